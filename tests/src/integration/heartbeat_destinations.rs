//! # Heartbeat Destination Scenarios
//!
//! Tests that a restored `MeshState` drives the destination resolver
//! exactly as the in-memory state does.
//!
//! ## Flow Tested:
//!
//! 1. **Persist → restore → resolve**: candidates survive a round-trip
//! 2. **Generated network**: no other nodes, specials fill the group slot
//! 3. **Virtual groups**: hashed from a label, never offered as destinations

#[cfg(test)]
mod tests {
    use mesh_destinations::{
        Category, Destination, DestinationError, DestinationRequest, DestinationResolver,
        HeartbeatDestination, HeartbeatDestinationApi,
    };
    use mesh_runtime::{MeshContext, RuntimeConfig};
    use mesh_state::adapters::{
        FileRecordStore, JsonStateSerializer, Sha256VirtualHasher, StaticKeyGenerator,
    };
    use mesh_state::test_utils::{make_test_node, make_test_state, PRIMARY_KEY_INDEX};
    use mesh_state::{
        Address, MeshState, MeshStateStore, SpecialAddress, StateStoreDependencies,
        StateStoreService, StoreConfig, VirtualAddressHasher,
    };
    use uuid::Uuid;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn restore_through_file(state: &MeshState) -> MeshState {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut store = StateStoreService::new(
            StateStoreDependencies {
                record_store: FileRecordStore::new(config.state_path()),
                serializer: JsonStateSerializer,
                key_generator: StaticKeyGenerator::default(),
            },
            config,
        );
        store.save(state).unwrap();
        store.restore().unwrap()
    }

    // =============================================================================
    // PERSIST → RESTORE → RESOLVE
    // =============================================================================

    #[test]
    fn test_restored_state_yields_same_candidates() {
        let original = make_test_state();
        let restored = restore_through_file(&original);
        let owner = Uuid::from_u128(1);

        let before = DestinationResolver::for_node(&original, &owner).unwrap();
        let after = DestinationResolver::for_node(&restored, &owner).unwrap();

        assert_eq!(before.candidates(), after.candidates());
        assert!(after.candidates().node(&owner).is_none());
        assert!(after.candidates().group(Address::new(0x8A11)).is_none());
    }

    #[test]
    fn test_node_then_group_selection_on_restored_state() {
        let state = restore_through_file(&make_test_state());
        let mut resolver = DestinationResolver::for_node(&state, &Uuid::from_u128(1)).unwrap();

        let first = resolver
            .select_destination(DestinationRequest::Node(Uuid::from_u128(2)))
            .unwrap();
        let second = resolver
            .select_destination(DestinationRequest::Group(Address::new(0xC000)))
            .unwrap();
        resolver.select_key(PRIMARY_KEY_INDEX).unwrap();

        assert_eq!(first.deselected, None);
        assert_eq!(second.deselected, Some(first.selected));
        assert_eq!(
            resolver.resolved(),
            Some(HeartbeatDestination {
                network_key: PRIMARY_KEY_INDEX,
                address: Address::new(0xC000),
            })
        );
    }

    // =============================================================================
    // GENERATED NETWORK
    // =============================================================================

    #[test]
    fn test_generated_network_offers_only_specials() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RuntimeConfig::default();
        config.store.data_dir = dir.path().to_path_buf();

        let mut context = MeshContext::open(&config).unwrap();
        let primary = context.state().network_key().index;
        let owner = make_test_node(1, 0x0002, vec![primary]);
        context.state_mut().nodes_mut().insert(owner.clone()).unwrap();
        context.save().unwrap();

        let mut resolver = context.resolver_for(&owner.uuid).unwrap();
        let candidates = resolver.candidates();

        assert!(candidates.nodes.is_empty());
        assert_eq!(candidates.keys.len(), 1);
        assert!(candidates.special_slot().is_none());
        let sections = candidates.sections();
        assert_eq!(sections[2].category, Category::SpecialGroups);
        assert_eq!(sections[2].entries.len(), 4);

        assert!(matches!(
            resolver.select_destination(DestinationRequest::Node(Uuid::from_u128(2))),
            Err(DestinationError::InvalidDestination { .. })
        ));
        assert!(matches!(
            resolver.select_destination(DestinationRequest::Node(owner.uuid)),
            Err(DestinationError::SelfDestination { .. })
        ));

        resolver.select_key(primary).unwrap();
        resolver.select_address(Address::ALL_NODES).unwrap();
        assert_eq!(
            resolver.selected_destination(),
            Some(&Destination::Special(SpecialAddress::AllNodes))
        );
        assert_eq!(
            resolver.resolved().map(|r| r.address),
            Some(Address::ALL_NODES)
        );
    }

    // =============================================================================
    // VIRTUAL GROUPS
    // =============================================================================

    #[test]
    fn test_hashed_virtual_group_is_never_a_destination() {
        let mut state = make_test_state();
        let label = Uuid::from_u128(0x5eed);
        let group = Sha256VirtualHasher
            .virtual_group("Labelled Lights", label)
            .unwrap();
        let address = group.address();
        state.groups_mut().insert(group).unwrap();

        let state = restore_through_file(&state);
        assert_eq!(
            state.groups().get(address).and_then(|g| g.virtual_label()),
            Some(label)
        );

        let mut resolver = DestinationResolver::for_node(&state, &Uuid::from_u128(2)).unwrap();
        assert!(resolver.candidates().group(address).is_none());
        assert!(matches!(
            resolver.select_address(address),
            Err(DestinationError::InvalidDestination { .. })
        ));
        assert!(resolver.selected_destination().is_none());
    }
}
