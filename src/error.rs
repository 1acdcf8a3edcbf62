use thiserror::Error;

use crate::{VirtualLinkId, VirtualNodeId};

/// A virtual element was placed twice in the same mapping. Always a mapper
/// bug, never recoverable by retrying against the same mapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConflictError {
    #[error("virtual node {0} is already mapped")]
    NodeAlreadyMapped(VirtualNodeId),

    #[error("virtual link {0} is already mapped")]
    LinkAlreadyMapped(VirtualLinkId),
}

/// Outcome of one embedding attempt at the mapper boundary.
///
/// `ResourceExhausted` is the expected rejection path: the request is
/// recorded as blocked and the simulation continues. `Conflict` wraps a
/// ledger defect and is propagated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("request {0} cannot be embedded under current substrate load")]
    ResourceExhausted(usize),
}
