use css::{SelectorError, parse_selector, query_selector, query_selector_all};
use platform::{Host, NodeId};

/// First element in the document matching `selector`.
pub fn qs(host: &Host, selector: &str) -> Result<Option<NodeId>, SelectorError> {
    qs_within(host, NodeId::DOCUMENT, selector)
}

/// Every element in the document matching `selector`, in document order.
pub fn qsa(host: &Host, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
    qsa_within(host, NodeId::DOCUMENT, selector)
}

/// Like [`qs`], searching only the descendants of `root`.
pub fn qs_within(host: &Host, root: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
    let list = parse_selector(selector)?;
    Ok(query_selector(host.document(), root, &list))
}

pub fn qsa_within(host: &Host, root: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
    let list = parse_selector(selector)?;
    Ok(query_selector_all(host.document(), root, &list))
}
