use core_types::NodeId;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("node {0} cannot have children")]
    InvalidParent(NodeId),

    #[error("node {0} cannot be inserted into a tree")]
    HierarchyRequest(NodeId),

    #[error("inserting {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("{before} is not a child of {parent}")]
    InvalidSibling { parent: NodeId, before: NodeId },

    #[error("invalid class token {0:?}")]
    InvalidToken(String),

    #[error("document has no document element")]
    MissingDocumentElement,
}
