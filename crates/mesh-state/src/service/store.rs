//! # State Store API Implementation
//!
//! Implements the `MeshStateStore` trait.

use super::*;
use crate::domain::errors::{KeyKind, MeshError};
use crate::domain::keys::{ApplicationKey, NetworkKey};
use crate::domain::state::MeshState;
use crate::ports::inbound::MeshStateStore;

impl<RS, SZ, KG> MeshStateStore for StateStoreService<RS, SZ, KG>
where
    RS: RecordStore,
    SZ: StateSerializer,
    KG: KeyGenerator,
{
    fn exists(&self) -> bool {
        match self.record_store.exists() {
            Ok(exists) => exists,
            // Reported as present so the caller restores and sees the
            // storage error instead of overwriting the record.
            Err(e) => {
                tracing::warn!("[mesh-state] Could not check for state record: {}", e);
                true
            }
        }
    }

    fn generate(&self) -> Result<MeshState, MeshError> {
        let generation = &self.config.generation;

        let network_key = self
            .key_generator
            .generate_network_key()
            .ok_or(MeshError::KeyGenerationFailed(KeyKind::Network))?;

        let primary = NetworkKey::new(
            generation.network_key_index,
            generation.network_key_name.clone(),
            network_key,
        );
        let mut state = MeshState::new(
            generation.network_name.clone(),
            primary,
            generation.unicast_address,
        )?;
        state.set_global_ttl(generation.global_ttl)?;

        for index in 0..generation.application_key_count {
            let material = self
                .key_generator
                .generate_application_key()
                .ok_or(MeshError::KeyGenerationFailed(KeyKind::Application))?;
            state.keys_mut().insert_application_key(ApplicationKey::new(
                index,
                format!("AppKey {}", index + 1),
                material,
                generation.network_key_index,
            ))?;
        }

        tracing::info!(
            "[mesh-state] Generated state '{}' with {} application keys",
            state.name(),
            state.keys().application_key_count()
        );
        Ok(state)
    }

    fn save(&mut self, state: &MeshState) -> Result<(), MeshError> {
        let data = self
            .serializer
            .serialize(&state.to_record())
            .map_err(|e| MeshError::PersistenceError { message: e.message })?;

        self.record_store.write(&data).map_err(MeshError::from)?;

        tracing::info!(
            "[mesh-state] Saved state '{}' ({} nodes, {} groups, {} bytes)",
            state.name(),
            state.nodes().len(),
            state.groups().len(),
            data.len()
        );
        Ok(())
    }

    fn restore(&self) -> Result<MeshState, MeshError> {
        let data = self
            .record_store
            .read()
            .map_err(MeshError::from)?
            .ok_or(MeshError::NotFound)?;

        let record = self.serializer.deserialize(&data).map_err(|e| {
            tracing::error!("[mesh-state] State record is undecodable: {}", e);
            MeshError::from(e)
        })?;

        // Duplicates keep their own error; any other rule violation means the
        // record decoded but is not a valid state.
        let state = MeshState::try_from(record).map_err(|e| match e {
            MeshError::DuplicateKey { .. } | MeshError::CorruptState { .. } => e,
            other => {
                tracing::error!("[mesh-state] State record is invalid: {}", other);
                MeshError::CorruptState {
                    message: other.to_string(),
                }
            }
        })?;
        tracing::info!(
            "[mesh-state] Restored state '{}' ({} nodes, {} groups)",
            state.name(),
            state.nodes().len(),
            state.groups().len()
        );
        Ok(state)
    }

    fn delete(&mut self) -> Result<(), MeshError> {
        if !self.record_store.remove().map_err(MeshError::from)? {
            return Err(MeshError::NotFound);
        }
        tracing::info!("[mesh-state] Deleted state record");
        Ok(())
    }
}
