//! # Domain Errors
//!
//! Error types for the mesh state subsystem.
//!
//! - Each error maps to a specific domain invariant violation or failure mode
//! - Registry errors are always returned to the immediate caller
//! - No retries happen at this layer

use super::address::Address;
use super::keys::KeyIndex;
use std::fmt;
use thiserror::Error;

/// Errors that can occur while building, mutating or persisting a `MeshState`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// An identity (key index, node uuid, address) is already taken (INVARIANT-1..3).
    #[error("Duplicate {kind}: {identity}")]
    DuplicateKey {
        kind: &'static str,
        identity: String,
    },

    /// Address is of the wrong class for its owner (INVARIANT-4).
    #[error("Invalid address {address}: expected {expected}")]
    InvalidAddress {
        address: Address,
        expected: &'static str,
    },

    /// Global TTL outside 0..=127.
    #[error("Invalid global TTL {0}: must be at most 127")]
    InvalidTtl(u8),

    /// No key with this index exists.
    #[error("Unknown key index {index}")]
    UnknownKey { index: KeyIndex },

    /// The primary network key cannot be removed (INVARIANT-5).
    #[error("Primary network key {index} cannot be removed")]
    PrimaryKeyRemoval { index: KeyIndex },

    /// The key generator returned no material.
    #[error("Key generation failed: no material for {0}")]
    KeyGenerationFailed(KeyKind),

    /// Durable storage I/O failed.
    #[error("Persistence error: {message}")]
    PersistenceError { message: String },

    /// No persisted record at the well-known location.
    #[error("No persisted mesh state found")]
    NotFound,

    /// A record is present but cannot be decoded.
    #[error("Corrupt mesh state: {message}")]
    CorruptState { message: String },
}

impl MeshError {
    pub(crate) fn duplicate(kind: &'static str, identity: impl fmt::Display) -> Self {
        MeshError::DuplicateKey {
            kind,
            identity: identity.to_string(),
        }
    }
}

/// Which key the generator failed to supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Network,
    Application,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Network => write!(f, "network key"),
            KeyKind::Application => write!(f, "application key"),
        }
    }
}

/// Record store errors.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// I/O error during read/write/remove.
    #[error("Record store I/O error: {message}")]
    IOError { message: String },
    /// Permission denied on the storage location.
    #[error("Record store permission denied")]
    PermissionDenied,
}

impl From<std::io::Error> for RecordStoreError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => RecordStoreError::PermissionDenied,
            _ => RecordStoreError::IOError {
                message: err.to_string(),
            },
        }
    }
}

impl From<RecordStoreError> for MeshError {
    fn from(err: RecordStoreError) -> Self {
        MeshError::PersistenceError {
            message: err.to_string(),
        }
    }
}

/// Serialization errors.
#[derive(Debug, Clone, Error)]
#[error("Serialization error: {message}")]
pub struct SerializationError {
    pub message: String,
}

impl From<SerializationError> for MeshError {
    fn from(err: SerializationError) -> Self {
        MeshError::CorruptState {
            message: err.message,
        }
    }
}
