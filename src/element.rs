use dom::DomError;
use platform::{Event, Host, Listener, ListenerOptions, NodeId};
use std::fmt;
use std::rc::Rc;

/// Value side of one `el` property.
#[derive(Clone)]
pub enum Prop {
    /// Set the attribute to this value.
    Attr(String),
    /// `true` sets a value-less attribute, `false` leaves it off.
    Flag(bool),
    /// Listen for the event named by the key, minus a leading `on`.
    On(Listener),
}

impl Prop {
    pub fn on(handler: impl Fn(&mut Host, &Event) + 'static) -> Prop {
        Prop::On(Rc::new(handler))
    }
}

impl fmt::Debug for Prop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prop::Attr(value) => f.debug_tuple("Attr").field(value).finish(),
            Prop::Flag(on) => f.debug_tuple("Flag").field(on).finish(),
            Prop::On(_) => f.write_str("On(..)"),
        }
    }
}

impl From<&str> for Prop {
    fn from(value: &str) -> Self {
        Prop::Attr(value.to_string())
    }
}

impl From<String> for Prop {
    fn from(value: String) -> Self {
        Prop::Attr(value)
    }
}

impl From<bool> for Prop {
    fn from(on: bool) -> Self {
        Prop::Flag(on)
    }
}

/// One `el` child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Node(NodeId),
    Skip,
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<NodeId> for Child {
    fn from(node: NodeId) -> Self {
        Child::Node(node)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(child: Option<T>) -> Self {
        child.map_or(Child::Skip, Into::into)
    }
}

fn attribute_name(key: &str) -> &str {
    match key {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    }
}

fn event_name(key: &str) -> String {
    key.strip_prefix("on").unwrap_or(key).to_ascii_lowercase()
}

/// Create a detached `<tag>` element with the given properties and children.
///
/// Node children are moved under the new element if they are attached
/// elsewhere; text children become text nodes.
pub fn el<K, V, P, C>(host: &mut Host, tag: &str, props: P, children: C) -> Result<NodeId, DomError>
where
    K: AsRef<str>,
    V: Into<Prop>,
    P: IntoIterator<Item = (K, V)>,
    C: IntoIterator,
    C::Item: Into<Child>,
{
    let node = host.document_mut().create_element(tag);

    for (key, value) in props {
        let key = key.as_ref();
        match value.into() {
            Prop::Attr(value) => {
                host.document_mut()
                    .set_attribute(node, attribute_name(key), Some(value.as_str()))?;
            }
            Prop::Flag(true) => {
                host.document_mut()
                    .set_attribute(node, attribute_name(key), None)?;
            }
            Prop::Flag(false) => {}
            Prop::On(handler) => {
                host.add_shared_listener(
                    node,
                    &event_name(key),
                    ListenerOptions::default(),
                    handler,
                );
            }
        }
    }

    for child in children {
        match child.into() {
            Child::Text(text) => {
                let text = host.document_mut().create_text(text);
                host.document_mut().append_child(node, text)?;
            }
            Child::Node(child) => host.document_mut().append_child(node, child)?,
            Child::Skip => {}
        }
    }

    log::trace!(target: "domkit", "el <{tag}> created as {node}");
    Ok(node)
}

/// Detach `node` from its parent. Returns `false` if it had none.
pub fn remove(host: &mut Host, node: NodeId) -> bool {
    host.document_mut().remove(node)
}
