//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the state store service requires from its host.
//!
//! Adapters live in `crate::adapters`:
//!
//! | Port | Adapters |
//! |------|----------|
//! | `RecordStore` | `FileRecordStore`, `InMemoryRecordStore` |
//! | `StateSerializer` | `JsonStateSerializer`, `BincodeStateSerializer` |
//! | `KeyGenerator` | `RandomKeyGenerator`, `StaticKeyGenerator` |
//! | `VirtualAddressHasher` | `Sha256VirtualHasher` |

use crate::domain::address::Address;
use crate::domain::errors::{MeshError, RecordStoreError, SerializationError};
use crate::domain::group::Group;
use crate::domain::keys::KeyMaterial;
use crate::domain::state::MeshStateRecord;
use uuid::Uuid;

/// Storage for the single, well-known state record.
pub trait RecordStore: Send + Sync {
    /// Check whether the record is present.
    fn exists(&self) -> Result<bool, RecordStoreError>;

    /// Read the record, `None` if absent.
    fn read(&self) -> Result<Option<Vec<u8>>, RecordStoreError>;

    /// Replace the record with `bytes`.
    fn write(&mut self, bytes: &[u8]) -> Result<(), RecordStoreError>;

    /// Remove the record. Returns `false` if it was absent.
    fn remove(&mut self) -> Result<bool, RecordStoreError>;
}

/// Deterministic encoding of the state record.
pub trait StateSerializer: Send + Sync {
    fn serialize(&self, record: &MeshStateRecord) -> Result<Vec<u8>, SerializationError>;

    fn deserialize(&self, data: &[u8]) -> Result<MeshStateRecord, SerializationError>;
}

/// External supplier of key material. `None` means generation failed.
pub trait KeyGenerator: Send + Sync {
    fn generate_network_key(&self) -> Option<KeyMaterial>;

    fn generate_application_key(&self) -> Option<KeyMaterial>;
}

/// Reduces a 128-bit virtual label to a 16-bit hash.
///
/// Collision handling is left to the caller.
pub trait VirtualAddressHasher: Send + Sync {
    fn hash_label(&self, label: &Uuid) -> u16;

    /// The virtual address for `label`.
    fn virtual_address(&self, label: &Uuid) -> Address {
        Address::virtual_from_hash(self.hash_label(label))
    }

    /// A virtual group for `label`.
    fn virtual_group(&self, name: &str, label: Uuid) -> Result<Group, MeshError> {
        Group::with_virtual_label(name, label, self.virtual_address(&label))
    }
}
