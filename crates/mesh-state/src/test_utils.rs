//! Shared fixtures for tests in this crate and downstream crates
//! (enable the `test-utils` feature).

use crate::domain::address::Address;
use crate::domain::group::Group;
use crate::domain::keys::{ApplicationKey, KeyIndex, KeyMaterial, NetworkKey};
use crate::domain::node::Node;
use crate::domain::state::MeshState;
use uuid::Uuid;

pub const PRIMARY_KEY_INDEX: KeyIndex = 0;
pub const SECONDARY_KEY_INDEX: KeyIndex = 1;
pub const OWNER_ADDRESS: u16 = 0x0123;

pub fn test_material(byte: u8) -> KeyMaterial {
    KeyMaterial::new([byte; 16])
}

pub fn make_test_node(id: u128, address: u16, keys: Vec<KeyIndex>) -> Node {
    Node::new(
        Uuid::from_u128(id),
        Some(format!("Node {}", id)),
        Address::new(address),
        keys,
    )
    .expect("test node address must be unicast")
}

pub fn make_test_group(name: &str, address: u16) -> Group {
    Group::new(name, Address::new(address)).expect("test group address must be group or virtual")
}

/// A state with two network keys, one application key and nothing else.
pub fn make_empty_state() -> MeshState {
    let mut state = MeshState::new(
        "Test Network",
        NetworkKey::new(PRIMARY_KEY_INDEX, "Primary Network Key", test_material(0x18)),
        Address::new(OWNER_ADDRESS),
    )
    .expect("owner address must be unicast");
    state
        .keys_mut()
        .insert_network_key(NetworkKey::new(
            SECONDARY_KEY_INDEX,
            "Guest Network Key",
            test_material(0x19),
        ))
        .expect("unique key index");
    state
        .keys_mut()
        .insert_application_key(ApplicationKey::new(
            0,
            "AppKey 1",
            test_material(0x2a),
            PRIMARY_KEY_INDEX,
        ))
        .expect("unique key index");
    state
}

/// `make_empty_state` plus three nodes, two groups and one virtual group.
///
/// | Node | Address | Keys |
/// |------|---------|------|
/// | 1 | 0x0002 | 0, 1 |
/// | 2 | 0x0004 | 0 |
/// | 3 | 0x0006 | 1 |
pub fn make_test_state() -> MeshState {
    let mut state = make_empty_state();
    for node in [
        make_test_node(1, 0x0002, vec![PRIMARY_KEY_INDEX, SECONDARY_KEY_INDEX]),
        make_test_node(2, 0x0004, vec![PRIMARY_KEY_INDEX]),
        make_test_node(3, 0x0006, vec![SECONDARY_KEY_INDEX]),
    ] {
        state.nodes_mut().insert(node).expect("unique node");
    }
    for group in [
        make_test_group("Kitchen", 0xC000),
        make_test_group("Hashed Lights", 0x8A11),
        make_test_group("Living Room", 0xC001),
    ] {
        state.groups_mut().insert(group).expect("unique group");
    }
    state
}
