//! # Inbound Ports (Driving Ports)
//!
//! The persistence lifecycle of a `MeshState`.

use crate::domain::errors::MeshError;
use crate::domain::state::MeshState;

/// Primary API for the state store.
///
/// All operations are blocking. No operation retries on its own; retry
/// policy belongs to the caller.
///
/// ## Lifecycle
///
/// - First run: `exists() == false` → `generate()` → `save()`
/// - Later runs: `exists() == true` → `restore()`
pub trait MeshStateStore {
    /// True iff a record is present at the well-known location.
    ///
    /// A failed storage check also reports `true`, so `restore()` surfaces
    /// the `PersistenceError`.
    fn exists(&self) -> bool;

    /// Synthesize a default state. Nothing is written.
    ///
    /// ## Errors
    ///
    /// - `KeyGenerationFailed`: the key generator returned no material
    fn generate(&self) -> Result<MeshState, MeshError>;

    /// Encode `state` and overwrite the well-known record.
    ///
    /// ## Errors
    ///
    /// - `PersistenceError`: storage I/O failed
    fn save(&mut self, state: &MeshState) -> Result<(), MeshError>;

    /// Read and decode the well-known record.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record present
    /// - `CorruptState`: record present but undecodable, or decoded into an
    ///   invalid state (TTL out of range, address of the wrong class)
    /// - `DuplicateKey`: record repeats a key index, node or group identity
    /// - `PersistenceError`: storage I/O failed
    fn restore(&self) -> Result<MeshState, MeshError>;

    /// Remove the well-known record.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no record present
    /// - `PersistenceError`: storage I/O failed
    fn delete(&mut self) -> Result<(), MeshError>;
}
