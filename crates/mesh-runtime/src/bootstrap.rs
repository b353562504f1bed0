//! # Bootstrap
//!
//! ```text
//!          exists()?
//!     ┌─── no ──┴── yes ───┐
//!     ↓                    ↓
//! generate()           restore() ──CorruptState──→ regenerate_on_corrupt?
//!     ↓                    │                          │yes        │no
//!   save()                 │                  delete + generate  error
//!     └────────┬───────────┘                     + save
//!              ↓
//!         MeshContext
//! ```

use crate::config::RuntimeConfig;
use mesh_destinations::{DestinationError, DestinationResolver};
use mesh_state::adapters::lock::{InstallationLock, LockError};
use mesh_state::{FileStateStore, MeshError, MeshState, MeshStateStore};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Where the state in a `MeshContext` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateOrigin {
    Restored,
    Generated,
    /// The record was undecodable and has been replaced.
    Regenerated,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("installation lock: {0}")]
    Lock(#[from] LockError),

    #[error("mesh state: {0}")]
    State(#[from] MeshError),
}

/// Restore the persisted state, or generate and persist a fresh one.
pub fn bootstrap<S: MeshStateStore>(
    store: &mut S,
    regenerate_on_corrupt: bool,
) -> Result<(MeshState, StateOrigin), MeshError> {
    if !store.exists() {
        let state = store.generate()?;
        store.save(&state)?;
        info!("Generated new mesh state '{}'", state.name());
        return Ok((state, StateOrigin::Generated));
    }

    match store.restore() {
        Ok(state) => {
            info!("Restored mesh state '{}'", state.name());
            Ok((state, StateOrigin::Restored))
        }
        Err(MeshError::CorruptState { message }) if regenerate_on_corrupt => {
            warn!("Replacing corrupt mesh state: {}", message);
            store.delete()?;
            let state = store.generate()?;
            store.save(&state)?;
            Ok((state, StateOrigin::Regenerated))
        }
        Err(e) => Err(e),
    }
}

/// The installation handle owned by `main`.
///
/// Holds the lock for as long as it lives.
pub struct MeshContext {
    store: FileStateStore,
    state: MeshState,
    origin: StateOrigin,
    _lock: InstallationLock,
}

impl MeshContext {
    /// Lock the data directory, then bootstrap.
    pub fn open(config: &RuntimeConfig) -> Result<Self, BootstrapError> {
        let lock = InstallationLock::acquire_with_timeout(
            &config.store.data_dir,
            config.lock_timeout,
        )?;

        let mut store = FileStateStore::file_backed(config.store.clone());
        let (state, origin) = bootstrap(&mut store, config.regenerate_on_corrupt)?;

        Ok(Self {
            store,
            state,
            origin,
            _lock: lock,
        })
    }

    pub fn state(&self) -> &MeshState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MeshState {
        &mut self.state
    }

    pub fn origin(&self) -> StateOrigin {
        self.origin
    }

    /// Persist the current state.
    pub fn save(&mut self) -> Result<(), MeshError> {
        self.store.save(&self.state)
    }

    /// Drop the persisted record and start over with a fresh state.
    pub fn reset(&mut self) -> Result<(), MeshError> {
        match self.store.delete() {
            Ok(()) | Err(MeshError::NotFound) => {}
            Err(e) => return Err(e),
        }
        let state = self.store.generate()?;
        self.store.save(&state)?;
        info!("Reset mesh state to '{}'", state.name());

        self.state = state;
        self.origin = StateOrigin::Generated;
        Ok(())
    }

    pub fn resolver_for(&self, node: &Uuid) -> Result<DestinationResolver, DestinationError> {
        DestinationResolver::for_node(&self.state, node)
    }
}
