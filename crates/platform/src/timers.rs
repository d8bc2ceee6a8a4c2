use crate::Host;
use core_types::TimerId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

pub type TimerCallback = Box<dyn FnOnce(&mut Host)>;

// (due, schedule order): equal deadlines run in the order they were set
type TimerKey = (Instant, u64);

#[derive(Default)]
pub(crate) struct TimerQueue {
    next_id: u64,
    next_order: u64,
    queue: BTreeMap<TimerKey, (TimerId, TimerCallback)>,
    keys: HashMap<TimerId, TimerKey>,
}

impl TimerQueue {
    pub(crate) fn schedule(&mut self, due: Instant, callback: TimerCallback) -> TimerId {
        self.next_id += 1;
        self.next_order += 1;
        let id = TimerId(self.next_id);
        let key = (due, self.next_order);
        self.queue.insert(key, (id, callback));
        self.keys.insert(id, key);
        id
    }

    pub(crate) fn cancel(&mut self, id: TimerId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    pub(crate) fn next_due(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest timer if it is due at `now`.
    pub(crate) fn pop_due(&mut self, now: Instant) -> Option<(TimerId, TimerCallback)> {
        let first = self.queue.first_entry()?;
        if first.key().0 > now {
            return None;
        }
        let (id, callback) = first.remove();
        self.keys.remove(&id);
        Some((id, callback))
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }
}
