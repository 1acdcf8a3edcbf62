use std::fmt::Display;

use serde_derive::{Deserialize, Serialize};

/// Identifies one virtual node inside a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Deserialize, Serialize)]
pub struct VirtualNodeId {
    pub(super) value: usize,
}

impl Display for VirtualNodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<VirtualNodeId> for usize {
    fn from(val: VirtualNodeId) -> Self {
        val.value
    }
}

impl VirtualNodeId {
    pub fn new(value: usize) -> Self {
        Self { value }
    }
}

/// Identifies one virtual link inside a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Deserialize, Serialize)]
pub struct VirtualLinkId {
    pub(super) value: usize,
}

impl Display for VirtualLinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<VirtualLinkId> for usize {
    fn from(val: VirtualLinkId) -> Self {
        val.value
    }
}

impl VirtualLinkId {
    pub fn new(value: usize) -> Self {
        Self { value }
    }
}
