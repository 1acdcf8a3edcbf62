use std::fmt::Display;

use serde_derive::{Deserialize, Serialize};

/// Identifies one physical node of the substrate network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Deserialize, Serialize)]
pub struct NodeId {
    pub(super) value: usize,
}

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<NodeId> for usize {
    fn from(val: NodeId) -> Self {
        val.value
    }
}

impl NodeId {
    pub fn new(value: usize) -> Self {
        Self { value }
    }
}
