use std::fmt;

pub type RawNodeId = u32;

/// Handle to a node inside a `dom::Document` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub RawNodeId);

impl NodeId {
    /// The document node always occupies the first arena slot.
    pub const DOCUMENT: NodeId = NodeId(0);

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Document loading progress. Ordering follows the lifecycle, so
/// `state >= ReadyState::Interactive` means "content loaded".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyState {
    #[default]
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadyState::Loading => "loading",
            ReadyState::Interactive => "interactive",
            ReadyState::Complete => "complete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_state_orders_by_lifecycle() {
        assert!(ReadyState::Loading < ReadyState::Interactive);
        assert!(ReadyState::Interactive < ReadyState::Complete);
        assert_eq!(ReadyState::default(), ReadyState::Loading);
    }

    #[test]
    fn node_id_index_and_display() {
        assert_eq!(NodeId(7).index(), 7);
        assert_eq!(NodeId::DOCUMENT.to_string(), "#0");
    }
}
