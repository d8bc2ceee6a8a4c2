use dom::DomError;
use platform::{Host, NodeId};

pub fn add_class(host: &mut Host, node: NodeId, names: &[&str]) -> Result<(), DomError> {
    host.document_mut().add_classes(node, names)
}

pub fn remove_class(host: &mut Host, node: NodeId, names: &[&str]) -> Result<(), DomError> {
    host.document_mut().remove_classes(node, names)
}

/// Flip `name`, or pin it with `force`. Returns whether the class is set
/// afterwards.
pub fn toggle_class(
    host: &mut Host,
    node: NodeId,
    name: &str,
    force: Option<bool>,
) -> Result<bool, DomError> {
    host.document_mut().toggle_class(node, name, force)
}

pub fn has_class(host: &Host, node: NodeId, name: &str) -> bool {
    host.document().has_class(node, name)
}
