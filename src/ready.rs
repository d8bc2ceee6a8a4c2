use platform::{Host, ListenerOptions, NodeId, ReadyState};
use std::cell::Cell;

/// Run `callback` once the document content has loaded.
///
/// If the host is already `Interactive` or `Complete` the callback runs
/// before this returns; otherwise it runs on `DOMContentLoaded`.
pub fn ready(host: &mut Host, callback: impl FnOnce(&mut Host) + 'static) {
    if host.ready_state() >= ReadyState::Interactive {
        callback(host);
        return;
    }
    log::trace!(target: "domkit.ready", "deferring ready callback until DOMContentLoaded");
    let slot = Cell::new(Some(callback));
    let options = ListenerOptions {
        once: true,
        ..ListenerOptions::default()
    };
    host.add_event_listener(NodeId::DOCUMENT, "DOMContentLoaded", options, move |host, _| {
        if let Some(callback) = slot.take() {
            callback(host);
        }
    });
}
