//! # Mesh State (mesh-state)
//!
//! The persisted configuration state of a mesh network: keys, nodes, groups
//! and the typed 16-bit address space they live in.
//!
//! ## Lifecycle
//!
//! ```text
//!               exists()?
//!          ┌──── no ─────┴───── yes ───┐
//!          ↓                           ↓
//!     generate()                   restore()
//!          ↓                           │
//!       save()                         │
//!          └───────────┬───────────────┘
//!                      ↓
//!                 MeshState ──→ (mutate) ──→ save()
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Unique Key Index | Network and application key indexes are unique |
//! | 2 | Unique Node | Node uuid and unicast address are unique |
//! | 3 | Unique Group | Group addresses are unique |
//! | 4 | Typed Addresses | Nodes own unicast addresses, groups own group or virtual addresses |
//! | 5 | Primary Key | The primary network key is never removed |
//! | 6 | Single Record | Exactly one persisted state per installation |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Address space, keys, registries, `MeshState`
//! - `ports/` - Inbound store API and outbound SPI (storage, codec, key generation, hashing)
//! - `adapters/` - File/memory record stores, JSON/bincode codecs, key generators, lock
//! - `service/` - `StateStoreService` implementing the store API
//!
//! ## Usage
//!
//! ```ignore
//! use mesh_state::{MeshStateStore, StateStoreService, StoreConfig};
//!
//! let mut store = StateStoreService::file_backed(StoreConfig::default());
//! let state = if store.exists() {
//!     store.restore()?
//! } else {
//!     let state = store.generate()?;
//!     store.save(&state)?;
//!     state
//! };
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export key types for convenience
pub use domain::address::{classify, Address, AddressKind, SpecialAddress};
pub use domain::config::{Codec, GenerationConfig, StoreConfig};
pub use domain::errors::{KeyKind, MeshError};
pub use domain::group::{Group, GroupRegistry};
pub use domain::keys::{ApplicationKey, KeyIndex, KeyMaterial, KeyStore, NetworkKey};
pub use domain::node::{Node, NodeRegistry};
pub use domain::state::{IvIndex, MeshState, MeshStateRecord};
pub use ports::inbound::MeshStateStore;
pub use ports::outbound::{KeyGenerator, RecordStore, StateSerializer, VirtualAddressHasher};
pub use service::{FileStateStore, StateStoreDependencies, StateStoreService};
