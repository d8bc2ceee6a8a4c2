use crate::listen::Detach;
use css::{SelectorError, SelectorList, matches, parse_selector};
use dom::Document;
use platform::{Event, Host, ListenerOptions, NodeId};

/// Listen for `event_type` on `parent` and call `handler` for events whose
/// target sits inside an element matching `selector`.
///
/// The walk starts at the event target and goes up to the nearest matching
/// element. The handler runs only when `parent` contains that element
/// (inclusively), and gets it as its third argument. A bad selector is
/// reported here, before anything is attached.
pub fn delegate(
    host: &mut Host,
    parent: NodeId,
    event_type: &str,
    selector: &str,
    handler: impl Fn(&mut Host, &Event, NodeId) + 'static,
) -> Result<Detach, SelectorError> {
    let selectors = parse_selector(selector)?;
    let selector_text = selector.trim().to_string();

    let id = host.add_event_listener(
        parent,
        event_type,
        ListenerOptions::default(),
        move |host, event| {
            let Some(matched) = nearest_match(host.document(), event.target(), &selectors) else {
                return;
            };
            if !host.document().contains(parent, matched) {
                log::trace!(
                    target: "domkit.delegate",
                    "{selector_text:?} matched {matched} outside {parent}"
                );
                return;
            }
            handler(host, event, matched);
        },
    );
    Ok(Detach::new(parent, event_type, id))
}

fn nearest_match(doc: &Document, target: NodeId, selectors: &SelectorList) -> Option<NodeId> {
    doc.ancestors(target)
        .filter(|node| doc.is_element(*node))
        .find(|node| matches(doc, *node, selectors))
}
