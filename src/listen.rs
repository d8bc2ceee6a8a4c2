use platform::{Event, Host, ListenerId, ListenerOptions, NodeId};

/// Handle returned by [`on`] and [`delegate`](crate::delegate) that removes
/// the listener again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Detach {
    target: NodeId,
    event_type: String,
    id: ListenerId,
}

impl Detach {
    pub(crate) fn new(target: NodeId, event_type: &str, id: ListenerId) -> Self {
        Self {
            target,
            event_type: event_type.to_string(),
            id,
        }
    }

    /// Remove the listener. Only the first call does anything; it returns
    /// whether a listener was removed.
    pub fn detach(&self, host: &mut Host) -> bool {
        host.remove_event_listener(self.target, &self.event_type, self.id)
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn listener_id(&self) -> ListenerId {
        self.id
    }
}

/// Listen for `event_type` on `target` during the bubble phase.
pub fn on(
    host: &mut Host,
    target: NodeId,
    event_type: &str,
    handler: impl Fn(&mut Host, &Event) + 'static,
) -> Detach {
    on_with(host, target, event_type, ListenerOptions::default(), handler)
}

pub fn on_with(
    host: &mut Host,
    target: NodeId,
    event_type: &str,
    options: ListenerOptions,
    handler: impl Fn(&mut Host, &Event) + 'static,
) -> Detach {
    let id = host.add_event_listener(target, event_type, options, handler);
    Detach::new(target, event_type, id)
}

/// Listen for the next `event_type` on `target` only.
pub fn once(
    host: &mut Host,
    target: NodeId,
    event_type: &str,
    handler: impl Fn(&mut Host, &Event) + 'static,
) {
    let options = ListenerOptions {
        once: true,
        ..ListenerOptions::default()
    };
    host.add_event_listener(target, event_type, options, handler);
}
