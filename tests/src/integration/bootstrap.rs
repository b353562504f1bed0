//! # Bootstrap Scenarios
//!
//! First run and later runs against a real data directory, including the
//! failure paths a restarted installation can hit.
//!
//! ## Flow Tested:
//!
//! 1. **First run**: no record → generate → save, with the documented defaults
//! 2. **Later run**: record present → restore, identical to what was saved
//! 3. **Corrupt record**: fails, or is replaced when regeneration is enabled
//! 4. **Duplicate identity**: a record repeating a group address is rejected

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use mesh_runtime::{BootstrapError, MeshContext, RuntimeConfig, StateOrigin};
    use mesh_state::adapters::{FileRecordStore, JsonStateSerializer, StaticKeyGenerator};
    use mesh_state::test_utils::{make_test_group, make_test_state};
    use mesh_state::{
        Address, Codec, IvIndex, MeshError, MeshStateStore, StateSerializer,
        StateStoreDependencies, StateStoreService, StoreConfig,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn runtime_config(dir: &Path, codec: Codec) -> RuntimeConfig {
        RuntimeConfig {
            store: StoreConfig {
                data_dir: dir.to_path_buf(),
                codec,
                ..Default::default()
            },
            regenerate_on_corrupt: false,
            lock_timeout: Duration::from_millis(200),
        }
    }

    /// File-backed store with fixed key material.
    fn static_store(
        dir: &Path,
    ) -> StateStoreService<FileRecordStore, JsonStateSerializer, StaticKeyGenerator> {
        let config = StoreConfig {
            data_dir: dir.to_path_buf(),
            ..Default::default()
        };
        let deps = StateStoreDependencies {
            record_store: FileRecordStore::new(config.state_path()),
            serializer: JsonStateSerializer,
            key_generator: StaticKeyGenerator::default(),
        };
        StateStoreService::new(deps, config)
    }

    // =============================================================================
    // FIRST RUN / LATER RUN
    // =============================================================================

    #[test]
    fn test_first_run_writes_generated_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = runtime_config(dir.path(), Codec::Json);

        let context = MeshContext::open(&config).unwrap();
        let state = context.state();

        assert_eq!(context.origin(), StateOrigin::Generated);
        assert!(config.store.state_path().exists());
        assert_eq!(state.name(), "My Network");
        assert_eq!(state.iv_index(), IvIndex(0));
        assert_eq!(state.global_ttl(), 5);
        assert_eq!(state.unicast_address(), Address::new(0x0123));
        assert_eq!(state.keys().network_key_count(), 1);
        assert_eq!(state.network_key().index, 0x0005);
        assert_eq!(state.keys().application_key_count(), 3);
        assert!(state.nodes().is_empty());
        assert!(state.groups().is_empty());
    }

    #[test]
    fn test_later_runs_restore_for_both_codecs() {
        for codec in [Codec::Json, Codec::Bincode] {
            let dir = tempfile::tempdir().unwrap();
            let config = runtime_config(dir.path(), codec);

            let first = {
                let mut context = MeshContext::open(&config).unwrap();
                context.state_mut().set_name("Restored Network");
                context.save().unwrap();
                context.state().clone()
            };

            let context = MeshContext::open(&config).unwrap();
            assert_eq!(context.origin(), StateOrigin::Restored, "codec {}", codec);
            assert_eq!(context.state(), &first, "codec {}", codec);
        }
    }

    #[test]
    fn test_static_generation_survives_restart() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = static_store(dir.path());
        assert!(!store.exists());
        let generated = store.generate().unwrap();
        store.save(&generated).unwrap();

        let restarted = static_store(dir.path());
        assert!(restarted.exists());
        assert_eq!(restarted.restore().unwrap(), generated);
    }

    // =============================================================================
    // FAILURE PATHS
    // =============================================================================

    #[test]
    fn test_corrupt_record_blocks_startup() {
        let dir = tempfile::tempdir().unwrap();
        let config = runtime_config(dir.path(), Codec::Json);
        std::fs::write(config.store.state_path(), b"\x00\x01 truncated").unwrap();

        let result = MeshContext::open(&config);

        assert!(matches!(
            result,
            Err(BootstrapError::State(MeshError::CorruptState { .. }))
        ));
    }

    #[test]
    fn test_corrupt_record_regenerated_on_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = runtime_config(dir.path(), Codec::Json);
        config.regenerate_on_corrupt = true;
        std::fs::write(config.store.state_path(), b"{ \"name\": ").unwrap();

        let context = MeshContext::open(&config).unwrap();

        assert_eq!(context.origin(), StateOrigin::Regenerated);
        assert_eq!(context.state().keys().application_key_count(), 3);
    }

    #[test]
    fn test_record_with_duplicate_group_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = static_store(dir.path());

        let mut record = make_test_state().to_record();
        record.groups.push(make_test_group("Kitchen Again", 0xC000));
        let bytes = JsonStateSerializer.serialize(&record).unwrap();
        std::fs::write(store.config().state_path(), bytes).unwrap();

        assert!(matches!(
            store.restore(),
            Err(MeshError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_delete_then_bootstrap_again() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = static_store(dir.path());
        store.save(&make_test_state()).unwrap();

        store.delete().unwrap();
        assert!(!store.exists());
        assert_eq!(store.delete(), Err(MeshError::NotFound));

        let config = runtime_config(dir.path(), Codec::Json);
        let context = MeshContext::open(&config).unwrap();
        assert_eq!(context.origin(), StateOrigin::Generated);
    }
}
