use crate::clock::{Clock, SystemClock};
use crate::error::HostError;
use crate::event::{Event, EventInit, EventPhase};
use crate::listeners::{Listener, ListenerOptions, ListenerStore};
use crate::timers::TimerQueue;
use core_types::{ListenerId, NodeId, ReadyState, TimerId};
use css::{Stylesheet, parse_stylesheet};
use dom::Document;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// Upper bound on timer callbacks in one `run_due_timers` or
    /// `run_until_idle` call.
    pub timer_step_limit: usize,
    /// Ready state the host starts in.
    pub ready_state: ReadyState,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            timer_step_limit: 10_000,
            ready_state: ReadyState::Loading,
        }
    }
}

pub struct Host {
    document: Document,
    listeners: ListenerStore,
    timers: TimerQueue,
    clock: Box<dyn Clock>,
    ready_state: ReadyState,
    stylesheets: Vec<Stylesheet>,
    config: HostConfig,
}

impl Host {
    /// A host with an `html > (head, body)` document and the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::with_config(HostConfig::default(), clock)
    }

    pub fn with_config(config: HostConfig, clock: impl Clock + 'static) -> Self {
        Self {
            document: Document::with_skeleton(),
            listeners: ListenerStore::default(),
            timers: TimerQueue::default(),
            clock: Box::new(clock),
            ready_state: config.ready_state,
            stylesheets: Vec::new(),
            config,
        }
    }

    /// Replace the document. Listeners registered on the old nodes are kept,
    /// so this is meant for setting the host up, not for navigation.
    pub fn set_document(&mut self, document: Document) {
        self.document = document;
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    // ---- listeners ----

    pub fn add_event_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        options: ListenerOptions,
        callback: impl Fn(&mut Host, &Event) + 'static,
    ) -> ListenerId {
        self.add_shared_listener(target, event_type, options, Rc::new(callback))
    }

    /// Like [`Host::add_event_listener`] for a callback that is already a
    /// [`Listener`]; the store keeps this `Rc` as is.
    pub fn add_shared_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        options: ListenerOptions,
        callback: Listener,
    ) -> ListenerId {
        let id = self.listeners.add(target, event_type, options, callback);
        log::trace!(
            target: "platform.dispatch",
            "add {event_type} listener {id:?} on {target} (capture={}, once={})",
            options.capture,
            options.once
        );
        id
    }

    /// Returns false if the listener was already removed.
    pub fn remove_event_listener(
        &mut self,
        target: NodeId,
        event_type: &str,
        id: ListenerId,
    ) -> bool {
        let removed = self.listeners.remove(target, event_type, id);
        if removed {
            log::trace!(target: "platform.dispatch", "remove {event_type} listener {id:?} from {target}");
        }
        removed
    }

    pub fn listener_count(&self, target: NodeId, event_type: &str) -> usize {
        self.listeners.count(target, event_type)
    }

    /// Dispatch a new event at `target` and return it once every phase ran.
    pub fn dispatch_event(&mut self, target: NodeId, event_type: &str, init: EventInit) -> Event {
        let event = Event::new(event_type, target, init, self.clock.now());
        // target first, root last
        let path: Vec<NodeId> = self.document.ancestors(target).collect();
        log::trace!(
            target: "platform.dispatch",
            "dispatch {event_type} at {target} through {} nodes",
            path.len()
        );

        for &node in path.iter().skip(1).rev() {
            self.invoke(node, &event, EventPhase::Capturing, true);
        }
        self.invoke(target, &event, EventPhase::AtTarget, true);
        self.invoke(target, &event, EventPhase::AtTarget, false);
        if event.bubbles() {
            for &node in path.iter().skip(1) {
                self.invoke(node, &event, EventPhase::Bubbling, false);
            }
        }

        event.finish();
        event
    }

    fn invoke(&mut self, node: NodeId, event: &Event, phase: EventPhase, capture: bool) {
        if event.propagation_stopped() {
            return;
        }
        event.enter(node, phase);
        for entry in self.listeners.snapshot(node, event.event_type()) {
            if entry.capture != capture || entry.removed.get() {
                continue;
            }
            if entry.once {
                self.listeners.remove(node, event.event_type(), entry.id);
            }
            (entry.callback)(self, event);
            if event.immediate_propagation_stopped() {
                break;
            }
        }
    }

    // ---- timers ----

    /// Run `callback` once `delay` has passed. A zero delay still waits for
    /// the next timer run.
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut Host) + 'static,
    ) -> TimerId {
        let due = self.clock.now() + delay;
        let id = self.timers.schedule(due, Box::new(callback));
        log::trace!(target: "platform.timers", "set timer {id:?} in {delay:?}");
        id
    }

    /// Returns false if the timer already ran or was cleared.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let cleared = self.timers.cancel(id);
        if cleared {
            log::trace!(target: "platform.timers", "clear timer {id:?}");
        }
        cleared
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn next_timer_due(&self) -> Option<Instant> {
        self.timers.next_due()
    }

    /// Run every timer due at the current instant, including ones that
    /// become due while running. Returns how many ran.
    pub fn run_due_timers(&mut self) -> Result<usize, HostError> {
        let mut ran = 0;
        self.drain_due(&mut ran)?;
        Ok(ran)
    }

    /// Run timers until none are left, sleeping the clock up to each
    /// deadline. With a `ManualClock` this finishes instantly.
    pub fn run_until_idle(&mut self) -> Result<usize, HostError> {
        let mut ran = 0;
        loop {
            self.drain_due(&mut ran)?;
            match self.timers.next_due() {
                Some(due) => self.clock.sleep_until(due),
                None => return Ok(ran),
            }
        }
    }

    fn drain_due(&mut self, ran: &mut usize) -> Result<(), HostError> {
        let now = self.clock.now();
        loop {
            if self.timers.next_due().is_none_or(|due| due > now) {
                return Ok(());
            }
            if *ran >= self.config.timer_step_limit {
                log::debug!(
                    target: "platform.timers",
                    "step limit of {} reached with {} timers pending",
                    self.config.timer_step_limit,
                    self.timers.len()
                );
                return Err(HostError::TimerStepLimit {
                    limit: self.config.timer_step_limit,
                });
            }
            let Some((id, callback)) = self.timers.pop_due(now) else {
                return Ok(());
            };
            log::trace!(target: "platform.timers", "run timer {id:?}");
            callback(self);
            *ran += 1;
        }
    }

    // ---- ready state ----

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Advance the ready state and fire the matching document events.
    /// Moving backwards (or to the current state) does nothing.
    pub fn set_ready_state(&mut self, state: ReadyState) {
        if state <= self.ready_state {
            log::debug!(
                target: "platform.ready",
                "ignoring ready state {} while {}",
                state.as_str(),
                self.ready_state.as_str()
            );
            return;
        }
        if state == ReadyState::Complete && self.ready_state == ReadyState::Loading {
            self.set_ready_state(ReadyState::Interactive);
            // a listener may have completed loading already
            if state <= self.ready_state {
                return;
            }
        }

        self.ready_state = state;
        log::debug!(target: "platform.ready", "ready state is now {}", state.as_str());
        self.dispatch_event(NodeId::DOCUMENT, "readystatechange", EventInit::default());
        match state {
            ReadyState::Interactive => {
                self.dispatch_event(NodeId::DOCUMENT, "DOMContentLoaded", EventInit::BUBBLES);
            }
            ReadyState::Complete => {
                self.dispatch_event(NodeId::DOCUMENT, "load", EventInit::default());
            }
            ReadyState::Loading => {}
        }
    }

    // ---- stylesheets ----

    pub fn add_stylesheet(&mut self, text: &str) {
        let sheet = parse_stylesheet(text);
        log::trace!(target: "css", "added stylesheet with {} rules", sheet.rules.len());
        self.stylesheets.push(sheet);
    }

    pub fn stylesheets(&self) -> &[Stylesheet] {
        &self.stylesheets
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ManualClock;
    use std::cell::RefCell;

    fn manual_host() -> (Host, ManualClock) {
        let clock = ManualClock::default();
        (Host::with_clock(clock.clone()), clock)
    }

    #[test]
    fn timers_wait_for_their_deadline() {
        let (mut host, clock) = manual_host();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (name, ms) in [("b", 20), ("a", 10), ("c", 20)] {
            let log = log.clone();
            host.set_timeout(Duration::from_millis(ms), move |_| {
                log.borrow_mut().push(name)
            });
        }
        assert_eq!(host.run_due_timers(), Ok(0));

        clock.advance(Duration::from_millis(10));
        assert_eq!(host.run_due_timers(), Ok(1));
        clock.advance(Duration::from_millis(10));
        assert_eq!(host.run_due_timers(), Ok(2));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(host.pending_timers(), 0);
    }

    #[test]
    fn cleared_timer_never_runs() {
        let (mut host, _clock) = manual_host();
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = host.set_timeout(Duration::ZERO, move |_| *h.borrow_mut() += 1);
        assert!(host.clear_timeout(id));
        assert!(!host.clear_timeout(id));
        assert_eq!(host.run_until_idle(), Ok(0));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn run_until_idle_follows_nested_timers() {
        let (mut host, clock) = manual_host();
        let start = clock.now();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        host.set_timeout(Duration::from_millis(50), move |host| {
            s.borrow_mut().push(host.now());
            let s = s.clone();
            host.set_timeout(Duration::from_millis(25), move |host| {
                s.borrow_mut().push(host.now());
            });
        });

        assert_eq!(host.run_until_idle(), Ok(2));
        assert_eq!(
            *seen.borrow(),
            vec![
                start + Duration::from_millis(50),
                start + Duration::from_millis(75)
            ]
        );
    }

    #[test]
    fn self_rescheduling_timer_hits_step_limit() {
        fn again(host: &mut Host) {
            host.set_timeout(Duration::ZERO, again);
        }
        let clock = ManualClock::default();
        let mut host = Host::with_config(
            HostConfig {
                timer_step_limit: 5,
                ..HostConfig::default()
            },
            clock,
        );
        host.set_timeout(Duration::ZERO, again);
        assert_eq!(
            host.run_due_timers(),
            Err(HostError::TimerStepLimit { limit: 5 })
        );
        assert_eq!(host.pending_timers(), 1);
    }

    #[test]
    fn ready_state_jump_fires_interactive_events_first() {
        let (mut host, _clock) = manual_host();
        let log = Rc::new(RefCell::new(Vec::new()));
        for event_type in ["readystatechange", "DOMContentLoaded", "load"] {
            let log = log.clone();
            host.add_event_listener(
                NodeId::DOCUMENT,
                event_type,
                ListenerOptions::default(),
                move |host, event| {
                    log.borrow_mut()
                        .push(format!("{}:{}", event.event_type(), host.ready_state().as_str()))
                },
            );
        }

        host.set_ready_state(ReadyState::Complete);
        host.set_ready_state(ReadyState::Interactive);
        assert_eq!(
            *log.borrow(),
            vec![
                "readystatechange:interactive",
                "DOMContentLoaded:interactive",
                "readystatechange:complete",
                "load:complete",
            ]
        );
    }

    #[test]
    fn shared_listener_is_stored_as_given() {
        let (mut host, _clock) = manual_host();
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        let listener: Listener = Rc::new(move |_, _| *counter.borrow_mut() += 1);

        let id = host.add_shared_listener(
            NodeId::DOCUMENT,
            "ping",
            ListenerOptions::default(),
            listener.clone(),
        );
        assert_eq!(Rc::strong_count(&listener), 2);
        host.dispatch_event(NodeId::DOCUMENT, "ping", EventInit::default());
        assert_eq!(*hits.borrow(), 1);

        assert!(host.remove_event_listener(NodeId::DOCUMENT, "ping", id));
        assert_eq!(Rc::strong_count(&listener), 1);
    }
}
