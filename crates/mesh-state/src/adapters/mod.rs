//! # Adapters Module
//!
//! Implementations of the outbound ports.
//!
//! ## Modules
//!
//! - `storage`: `RecordStore` implementations (file, memory)
//! - `serializer`: `StateSerializer` implementations (JSON, bincode)
//! - `keygen`: `KeyGenerator` implementations (random, static)
//! - `hasher`: `VirtualAddressHasher` implementation (SHA-256)
//! - `lock`: Installation process locking (single-writer guard)

pub mod hasher;
pub mod keygen;
#[cfg(feature = "locking")]
pub mod lock;
pub mod serializer;
pub mod storage;

pub use hasher::Sha256VirtualHasher;
pub use keygen::{RandomKeyGenerator, StaticKeyGenerator};
#[cfg(feature = "locking")]
pub use lock::{InstallationLock, LockError};
#[cfg(feature = "bincode-codec")]
pub use serializer::BincodeStateSerializer;
pub use serializer::JsonStateSerializer;
pub use storage::{FileRecordStore, InMemoryRecordStore};
