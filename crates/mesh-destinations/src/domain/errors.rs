//! # Selection Errors
//!
//! A failed selection is never committed; the previous selection stays.

use mesh_state::KeyIndex;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    /// The owner was proposed as its own destination.
    #[error("Node {uuid} cannot be its own heartbeat destination")]
    SelfDestination { uuid: Uuid },

    /// The proposal does not resolve to an eligible destination.
    #[error("Invalid heartbeat destination: {reason}")]
    InvalidDestination { reason: String },

    /// The key is not bound to the owning node.
    #[error("Network key {index} is not bound to node {owner}")]
    UnknownKey { index: KeyIndex, owner: Uuid },

    /// The owning node is not in the registry.
    #[error("Unknown node {0}")]
    UnknownNode(Uuid),
}

impl DestinationError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        DestinationError::InvalidDestination {
            reason: reason.into(),
        }
    }
}
