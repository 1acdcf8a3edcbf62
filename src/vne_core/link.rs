use std::fmt::Display;

use serde_derive::{Deserialize, Serialize};

use super::NodeId;

/// Identifies one physical link of the substrate network.
///
/// The id is derived from the endpoint pair. Endpoint order is normalized so
/// that both traversal directions of an undirected substrate edge resolve to
/// the same link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Deserialize, Serialize)]
pub struct LinkId {
    /// The lower-numbered endpoint.
    pub src: NodeId,
    /// The higher-numbered endpoint.
    pub dst: NodeId,
}

impl Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.src, self.dst)
    }
}

impl LinkId {
    /// Creates the canonical link id for the edge between two node indices.
    pub fn between(a: usize, b: usize) -> Self {
        if a <= b {
            Self {
                src: NodeId::new(a),
                dst: NodeId::new(b),
            }
        } else {
            Self {
                src: NodeId::new(b),
                dst: NodeId::new(a),
            }
        }
    }
}

impl From<LinkId> for (NodeId, NodeId) {
    fn from(val: LinkId) -> Self {
        (val.src, val.dst)
    }
}
