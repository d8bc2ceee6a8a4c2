use crate::error::DomError;
use crate::traverse::{Ancestors, Descendants};
use crate::types::{NodeKind, NodeRecord};
use core_types::NodeId;

/// Arena-backed document tree.
///
/// Nodes are never freed: removing a node only detaches it, so a `NodeId`
/// stays valid for the lifetime of the document and a detached subtree can be
/// inserted again later.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<NodeRecord>,
}

impl Document {
    /// An empty document holding only the document node.
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeRecord::new(NodeKind::Document)],
        }
    }

    /// A document with the minimal `html > (head, body)` skeleton.
    pub fn with_skeleton() -> Self {
        let mut doc = Self::new();
        let html = doc.create_element("html");
        let head = doc.create_element("head");
        let body = doc.create_element("body");
        doc.link(NodeId::DOCUMENT, html);
        doc.link(html, head);
        doc.link(html, body);
        doc
    }

    pub fn root(&self) -> NodeId {
        NodeId::DOCUMENT
    }

    /// Number of allocated nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeRecord::new(kind));
        id
    }

    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.alloc(NodeKind::Element {
            name: name.to_ascii_lowercase(),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Text { text: text.into() })
    }

    pub fn create_comment(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeKind::Comment { text: text.into() })
    }

    pub(crate) fn record(&self, id: NodeId) -> Result<&NodeRecord, DomError> {
        self.nodes.get(id.index()).ok_or(DomError::UnknownNode(id))
    }

    pub(crate) fn record_mut(&mut self, id: NodeId) -> Result<&mut NodeRecord, DomError> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::UnknownNode(id))
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.nodes.get(id.index()).map(|r| &r.kind)
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.kind(id).is_some_and(NodeKind::is_element)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.index()).and_then(|r| r.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.index())
            .map(|r| r.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.is_element(*c))
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|c| *c == id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|c| self.is_element(*c))
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|c| *c == id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|c| self.is_element(*c))
    }

    /// The first element child of the document node (`<html>` in practice).
    pub fn document_element(&self) -> Option<NodeId> {
        self.element_children(NodeId::DOCUMENT).next()
    }

    pub fn head(&self) -> Option<NodeId> {
        self.document_child_named("head")
    }

    pub fn body(&self) -> Option<NodeId> {
        self.document_child_named("body")
    }

    fn document_child_named(&self, name: &str) -> Option<NodeId> {
        let html = self.document_element()?;
        self.element_children(html)
            .find(|c| self.tag_name(*c).is_some_and(|n| n == name))
    }

    /// Inclusive ancestor chain, starting at `id` itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors::new(self, id)
    }

    /// Descendants of `root` in document (pre-)order, `root` excluded.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        Descendants::new(self, root)
    }

    /// Inclusive containment: a node contains itself.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    pub fn is_connected(&self, id: NodeId) -> bool {
        self.contains(NodeId::DOCUMENT, id)
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.detach(child);
        self.link(parent, child);
        Ok(())
    }

    /// Insert `child` before `reference`, or append when `reference` is `None`.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<(), DomError> {
        let Some(before) = reference else {
            return self.append_child(parent, child);
        };
        self.check_insert(parent, child)?;
        if self.parent(before) != Some(parent) {
            return Err(DomError::InvalidSibling { parent, before });
        }
        if before == child {
            return Ok(());
        }
        self.detach(child);
        let siblings = &mut self.record_mut(parent)?.children;
        let pos = siblings
            .iter()
            .position(|k| *k == before)
            .ok_or(DomError::InvalidSibling { parent, before })?;
        siblings.insert(pos, child);
        self.record_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Detach `id` from its parent. Returns `false` when it had no parent.
    pub fn remove(&mut self, id: NodeId) -> bool {
        let removed = self.detach(id);
        if removed {
            log::trace!(target: "dom", "removed node {id}");
        }
        removed
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_record = self.record(parent)?;
        let child_record = self.record(child)?;
        if !parent_record.kind.allows_children() {
            return Err(DomError::InvalidParent(parent));
        }
        if matches!(child_record.kind, NodeKind::Document) {
            return Err(DomError::HierarchyRequest(child));
        }
        if self.contains(child, parent) {
            return Err(DomError::CycleDetected { parent, child });
        }
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> bool {
        let Some(parent) = self.nodes.get_mut(id.index()).and_then(|r| r.parent.take()) else {
            return false;
        };
        if let Some(record) = self.nodes.get_mut(parent.index()) {
            record.children.retain(|k| *k != id);
        }
        true
    }

    // Callers have already validated both ids and the hierarchy.
    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
    }

    pub fn attributes(&self, id: NodeId) -> &[(String, Option<String>)] {
        match self.kind(id) {
            Some(NodeKind::Element { attributes, .. }) => attributes,
            _ => &[],
        }
    }

    /// Attribute value; value-less attributes read as `""`.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.attributes(id)
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attributes(id)
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: &str,
        value: Option<&str>,
    ) -> Result<(), DomError> {
        let attributes = self.attributes_mut(id)?;
        let value = value.map(str::to_string);
        match attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = value,
            None => attributes.push((name.to_ascii_lowercase(), value)),
        }
        Ok(())
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Result<bool, DomError> {
        let attributes = self.attributes_mut(id)?;
        let before = attributes.len();
        attributes.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        Ok(attributes.len() != before)
    }

    fn attributes_mut(
        &mut self,
        id: NodeId,
    ) -> Result<&mut Vec<(String, Option<String>)>, DomError> {
        match &mut self.record_mut(id)?.kind {
            NodeKind::Element { attributes, .. } => Ok(attributes),
            _ => Err(DomError::NotAnElement(id)),
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.kind(id) {
            Some(NodeKind::Text { text } | NodeKind::Comment { text }) => text.clone(),
            Some(_) => {
                let mut out = String::new();
                for node in self.descendants(id) {
                    if let Some(NodeKind::Text { text }) = self.kind(node) {
                        out.push_str(text);
                    }
                }
                out
            }
            None => String::new(),
        }
    }

    /// Replace all children with a single text node (none for `""`).
    pub fn set_text_content(&mut self, id: NodeId, text: &str) -> Result<(), DomError> {
        let record = self.record_mut(id)?;
        match &mut record.kind {
            NodeKind::Text { text: existing } | NodeKind::Comment { text: existing } => {
                existing.clear();
                existing.push_str(text);
                return Ok(());
            }
            NodeKind::Document => return Err(DomError::NotAnElement(id)),
            NodeKind::Element { .. } => {}
        }
        let old = std::mem::take(&mut record.children);
        for child in old {
            if let Some(r) = self.nodes.get_mut(child.index()) {
                r.parent = None;
            }
        }
        if !text.is_empty() {
            let node = self.create_text(text);
            self.link(id, node);
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
