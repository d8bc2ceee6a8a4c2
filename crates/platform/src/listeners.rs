use crate::Host;
use crate::event::Event;
use core_types::{ListenerId, NodeId};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

pub type Listener = Rc<dyn Fn(&mut Host, &Event)>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    /// Run during the capture phase instead of the bubble phase.
    pub capture: bool,
    /// Remove the listener before its first invocation.
    pub once: bool,
}

pub(crate) struct ListenerEntry {
    pub(crate) id: ListenerId,
    pub(crate) capture: bool,
    pub(crate) once: bool,
    pub(crate) callback: Listener,
    // set on removal so snapshots taken by an ongoing dispatch skip it
    pub(crate) removed: Cell<bool>,
}

#[derive(Default)]
pub(crate) struct ListenerStore {
    next_id: u64,
    by_target: HashMap<(NodeId, String), Vec<Rc<ListenerEntry>>>,
}

impl ListenerStore {
    pub(crate) fn add(
        &mut self,
        target: NodeId,
        event_type: &str,
        options: ListenerOptions,
        callback: Listener,
    ) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.by_target
            .entry((target, event_type.to_string()))
            .or_default()
            .push(Rc::new(ListenerEntry {
                id,
                capture: options.capture,
                once: options.once,
                callback,
                removed: Cell::new(false),
            }));
        id
    }

    pub(crate) fn remove(&mut self, target: NodeId, event_type: &str, id: ListenerId) -> bool {
        let key = (target, event_type.to_string());
        let Some(entries) = self.by_target.get_mut(&key) else {
            return false;
        };
        let Some(pos) = entries.iter().position(|e| e.id == id) else {
            return false;
        };
        let entry = entries.remove(pos);
        entry.removed.set(true);
        if entries.is_empty() {
            self.by_target.remove(&key);
        }
        true
    }

    /// Registration-ordered copy of the listeners, so callbacks can edit
    /// the store while the dispatch iterates.
    pub(crate) fn snapshot(&self, target: NodeId, event_type: &str) -> Vec<Rc<ListenerEntry>> {
        self.by_target
            .get(&(target, event_type.to_string()))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn count(&self, target: NodeId, event_type: &str) -> usize {
        self.by_target
            .get(&(target, event_type.to_string()))
            .map_or(0, Vec::len)
    }
}
