use core_types::NodeId;
use std::cell::Cell;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventPhase {
    None,
    Capturing,
    AtTarget,
    Bubbling,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventInit {
    pub bubbles: bool,
    pub cancelable: bool,
}

impl EventInit {
    pub const BUBBLES: EventInit = EventInit {
        bubbles: true,
        cancelable: true,
    };
}

/// One event travelling through the tree.
///
/// Listeners get a shared reference; the flags they may flip
/// (`stop_propagation`, `prevent_default`, ...) live in cells.
#[derive(Debug)]
pub struct Event {
    event_type: String,
    target: NodeId,
    bubbles: bool,
    cancelable: bool,
    time_stamp: Instant,
    current_target: Cell<Option<NodeId>>,
    phase: Cell<EventPhase>,
    propagation_stopped: Cell<bool>,
    immediate_propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(event_type: &str, target: NodeId, init: EventInit, time_stamp: Instant) -> Self {
        Self {
            event_type: event_type.to_string(),
            target,
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            time_stamp,
            current_target: Cell::new(None),
            phase: Cell::new(EventPhase::None),
            propagation_stopped: Cell::new(false),
            immediate_propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// The node the event was dispatched at.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The node whose listeners are running; `None` outside dispatch.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target.get()
    }

    pub fn phase(&self) -> EventPhase {
        self.phase.get()
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    pub fn time_stamp(&self) -> Instant {
        self.time_stamp
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn stop_immediate_propagation(&self) {
        self.propagation_stopped.set(true);
        self.immediate_propagation_stopped.set(true);
    }

    /// No effect on events that are not cancelable.
    pub fn prevent_default(&self) {
        if self.cancelable {
            self.default_prevented.set(true);
        }
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped.get()
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }

    pub(crate) fn enter(&self, node: NodeId, phase: EventPhase) {
        self.current_target.set(Some(node));
        self.phase.set(phase);
    }

    pub(crate) fn finish(&self) {
        self.current_target.set(None);
        self.phase.set(EventPhase::None);
    }
}
