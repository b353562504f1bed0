//! # Mesh State
//!
//! `MeshState` aggregates the key store, both registries and the network-wide
//! parameters. `MeshStateRecord` is its flat, serializable form; converting a
//! record back goes through the registries' insert operations so a persisted
//! duplicate identity fails fast with `DuplicateKey`.

use super::address::Address;
use super::errors::MeshError;
use super::group::{Group, GroupRegistry};
use super::keys::{ApplicationKey, KeyStore, NetworkKey};
use super::node::{Node, NodeRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest allowed global TTL.
pub const MAX_GLOBAL_TTL: u8 = 127;

/// Global TTL of freshly generated states.
pub const DEFAULT_GLOBAL_TTL: u8 = 5;

/// 32-bit IV index, persisted as a plain integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IvIndex(pub u32);

impl IvIndex {
    /// Big-endian wire form.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        IvIndex(u32::from_be_bytes(bytes))
    }
}

impl fmt::Display for IvIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The whole configuration of one mesh network installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshState {
    name: String,
    keys: KeyStore,
    nodes: NodeRegistry,
    groups: GroupRegistry,
    iv_index: IvIndex,
    global_ttl: u8,
    unicast_address: Address,
    flags: u8,
}

impl MeshState {
    /// Create an empty network around its primary network key.
    pub fn new(
        name: impl Into<String>,
        primary_key: NetworkKey,
        unicast_address: Address,
    ) -> Result<Self, MeshError> {
        if !unicast_address.is_unicast() {
            return Err(MeshError::InvalidAddress {
                address: unicast_address,
                expected: "unicast",
            });
        }
        Ok(Self {
            name: name.into(),
            keys: KeyStore::new(primary_key),
            nodes: NodeRegistry::new(),
            groups: GroupRegistry::new(),
            iv_index: IvIndex::default(),
            global_ttl: DEFAULT_GLOBAL_TTL,
            unicast_address,
            flags: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The primary network key.
    pub fn network_key(&self) -> &NetworkKey {
        self.keys.primary_network_key()
    }

    pub fn keys(&self) -> &KeyStore {
        &self.keys
    }

    pub fn keys_mut(&mut self) -> &mut KeyStore {
        &mut self.keys
    }

    pub fn application_keys(&self) -> impl Iterator<Item = &ApplicationKey> {
        self.keys.application_keys()
    }

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut NodeRegistry {
        &mut self.nodes
    }

    pub fn groups(&self) -> &GroupRegistry {
        &self.groups
    }

    pub fn groups_mut(&mut self) -> &mut GroupRegistry {
        &mut self.groups
    }

    pub fn iv_index(&self) -> IvIndex {
        self.iv_index
    }

    pub fn set_iv_index(&mut self, iv_index: IvIndex) {
        self.iv_index = iv_index;
    }

    pub fn global_ttl(&self) -> u8 {
        self.global_ttl
    }

    pub fn set_global_ttl(&mut self, ttl: u8) -> Result<(), MeshError> {
        if ttl > MAX_GLOBAL_TTL {
            return Err(MeshError::InvalidTtl(ttl));
        }
        self.global_ttl = ttl;
        Ok(())
    }

    /// Address of the installation owning this state.
    pub fn unicast_address(&self) -> Address {
        self.unicast_address
    }

    pub fn set_unicast_address(&mut self, address: Address) -> Result<(), MeshError> {
        if !address.is_unicast() {
            return Err(MeshError::InvalidAddress {
                address,
                expected: "unicast",
            });
        }
        self.unicast_address = address;
        Ok(())
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn set_flags(&mut self, flags: u8) {
        self.flags = flags;
    }

    pub fn to_record(&self) -> MeshStateRecord {
        MeshStateRecord::from(self)
    }
}

/// Serializable form of `MeshState`. Field order is the encoding order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshStateRecord {
    pub name: String,
    pub network_keys: Vec<NetworkKey>,
    pub application_keys: Vec<ApplicationKey>,
    pub nodes: Vec<Node>,
    pub groups: Vec<Group>,
    pub iv_index: IvIndex,
    pub global_ttl: u8,
    pub unicast_address: Address,
    pub flags: u8,
}

impl From<&MeshState> for MeshStateRecord {
    fn from(state: &MeshState) -> Self {
        Self {
            name: state.name.clone(),
            network_keys: state.keys.network_keys_slice().to_vec(),
            application_keys: state.keys.application_keys_slice().to_vec(),
            nodes: state.nodes.as_slice().to_vec(),
            groups: state.groups.as_slice().to_vec(),
            iv_index: state.iv_index,
            global_ttl: state.global_ttl,
            unicast_address: state.unicast_address,
            flags: state.flags,
        }
    }
}

impl TryFrom<MeshStateRecord> for MeshState {
    type Error = MeshError;

    fn try_from(record: MeshStateRecord) -> Result<Self, Self::Error> {
        let mut network_keys = record.network_keys.into_iter();
        let primary = network_keys.next().ok_or_else(|| MeshError::CorruptState {
            message: "record has no primary network key".to_string(),
        })?;

        let mut state = MeshState::new(record.name, primary, record.unicast_address)?;
        state.set_global_ttl(record.global_ttl)?;
        state.iv_index = record.iv_index;
        state.flags = record.flags;

        for key in network_keys {
            state.keys.insert_network_key(key)?;
        }
        for key in record.application_keys {
            state.keys.insert_application_key(key)?;
        }
        for node in record.nodes {
            // Re-validate: deserialization bypasses `Node::new`.
            let node = Node::new(
                node.uuid,
                node.name.clone(),
                node.unicast_address(),
                node.network_keys.clone(),
            )?;
            state.nodes.insert(node)?;
        }
        for group in record.groups {
            let group = match group.virtual_label() {
                Some(label) => {
                    Group::with_virtual_label(group.name.clone(), label, group.address())?
                }
                None => Group::new(group.name.clone(), group.address())?,
            };
            state.groups.insert(group)?;
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keys::KeyMaterial;
    use uuid::Uuid;

    fn primary() -> NetworkKey {
        NetworkKey::new(5, "Primary Network Key", KeyMaterial::new([0x18; 16]))
    }

    fn populated() -> MeshState {
        let mut state = MeshState::new("Home", primary(), Address::new(0x0123)).unwrap();
        state
            .keys_mut()
            .insert_network_key(NetworkKey::new(6, "Guest", KeyMaterial::new([6; 16])))
            .unwrap();
        state
            .keys_mut()
            .insert_application_key(ApplicationKey::new(
                0,
                "AppKey 1",
                KeyMaterial::new([1; 16]),
                5,
            ))
            .unwrap();
        state
            .nodes_mut()
            .insert(
                Node::new(
                    Uuid::from_u128(1),
                    Some("Lamp".into()),
                    Address::new(0x0002),
                    vec![5, 6],
                )
                .unwrap(),
            )
            .unwrap();
        state
            .groups_mut()
            .insert(Group::new("Kitchen", Address::new(0xC000)).unwrap())
            .unwrap();
        state
            .groups_mut()
            .insert(
                Group::with_virtual_label("Hashed", Uuid::from_u128(9), Address::new(0x8042))
                    .unwrap(),
            )
            .unwrap();
        state.set_iv_index(IvIndex(0x0102_0304));
        state.set_flags(0x02);
        state
    }

    #[test]
    fn test_new_state_defaults() {
        let state = MeshState::new("My Network", primary(), Address::new(0x0123)).unwrap();
        assert_eq!(state.iv_index(), IvIndex(0));
        assert_eq!(state.global_ttl(), DEFAULT_GLOBAL_TTL);
        assert_eq!(state.flags(), 0);
        assert_eq!(state.network_key().index, 5);
        assert!(state.nodes().is_empty());
        assert!(state.groups().is_empty());
    }

    #[test]
    fn test_owner_address_must_be_unicast() {
        let result = MeshState::new("Bad", primary(), Address::new(0xC000));
        assert!(matches!(result, Err(MeshError::InvalidAddress { .. })));
    }

    #[test]
    fn test_global_ttl_bounds() {
        let mut state = populated();
        assert!(state.set_global_ttl(0).is_ok());
        assert!(state.set_global_ttl(127).is_ok());
        assert_eq!(state.set_global_ttl(128), Err(MeshError::InvalidTtl(128)));
        assert_eq!(state.global_ttl(), 127);
    }

    #[test]
    fn test_record_roundtrip_preserves_state() {
        let state = populated();
        let back = MeshState::try_from(state.to_record()).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_record_with_duplicate_node_fails_fast() {
        let mut record = populated().to_record();
        let dup = record.nodes[0].clone();
        record.nodes.push(dup);
        assert!(matches!(
            MeshState::try_from(record),
            Err(MeshError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_record_with_duplicate_key_index_fails_fast() {
        let mut record = populated().to_record();
        record.network_keys[1].index = 5;
        assert!(matches!(
            MeshState::try_from(record),
            Err(MeshError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_record_without_keys_is_corrupt() {
        let mut record = populated().to_record();
        record.network_keys.clear();
        assert!(matches!(
            MeshState::try_from(record),
            Err(MeshError::CorruptState { .. })
        ));
    }

    #[test]
    fn test_iv_index_bytes() {
        let iv = IvIndex(0x0102_0304);
        assert_eq!(iv.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(IvIndex::from_bytes([1, 2, 3, 4]), iv);
    }
}
