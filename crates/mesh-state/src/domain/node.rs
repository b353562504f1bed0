//! # Nodes
//!
//! Provisioned nodes and the `NodeRegistry`. Provisioning itself happens
//! elsewhere; this module only holds the result.

use super::address::Address;
use super::errors::MeshError;
use super::keys::KeyIndex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Name shown for nodes that were never named.
pub const UNKNOWN_DEVICE: &str = "Unknown Device";

/// A provisioned node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub uuid: Uuid,
    pub name: Option<String>,
    unicast_address: Address,
    /// Indexes of the network keys this node knows, in the order they were added.
    pub network_keys: Vec<KeyIndex>,
}

impl Node {
    /// Create a node. Fails if `unicast_address` is not a unicast address (INVARIANT-4).
    pub fn new(
        uuid: Uuid,
        name: Option<String>,
        unicast_address: Address,
        network_keys: Vec<KeyIndex>,
    ) -> Result<Self, MeshError> {
        if !unicast_address.is_unicast() {
            return Err(MeshError::InvalidAddress {
                address: unicast_address,
                expected: "unicast",
            });
        }
        Ok(Self {
            uuid,
            name,
            unicast_address,
            network_keys,
        })
    }

    pub fn unicast_address(&self) -> Address {
        self.unicast_address
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_DEVICE)
    }

    pub fn knows_network_key(&self, index: KeyIndex) -> bool {
        self.network_keys.contains(&index)
    }
}

/// Known nodes, unique by uuid and by unicast address (INVARIANT-2).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> Result<(), MeshError> {
        if self.get(&node.uuid).is_some() {
            return Err(MeshError::duplicate("node uuid", node.uuid));
        }
        if self.by_address(node.unicast_address).is_some() {
            return Err(MeshError::duplicate(
                "node unicast address",
                node.unicast_address,
            ));
        }
        self.nodes.push(node);
        Ok(())
    }

    pub fn remove(&mut self, uuid: &Uuid) -> Option<Node> {
        let position = self.nodes.iter().position(|n| n.uuid == *uuid)?;
        Some(self.nodes.remove(position))
    }

    pub fn get(&self, uuid: &Uuid) -> Option<&Node> {
        self.nodes.iter().find(|n| n.uuid == *uuid)
    }

    pub fn by_address(&self, address: Address) -> Option<&Node> {
        self.nodes.iter().find(|n| n.unicast_address == address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Node] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u128, address: u16) -> Node {
        Node::new(
            Uuid::from_u128(id),
            Some(format!("Node {}", id)),
            Address::new(address),
            vec![0],
        )
        .unwrap()
    }

    #[test]
    fn test_node_requires_unicast_address() {
        for bad in [0x0000u16, 0x8001, 0xC000, 0xFFFF] {
            let result = Node::new(Uuid::from_u128(1), None, Address::new(bad), vec![]);
            assert!(matches!(result, Err(MeshError::InvalidAddress { .. })));
        }
    }

    #[test]
    fn test_unnamed_node_display_name() {
        let node = Node::new(Uuid::from_u128(1), None, Address::new(2), vec![]).unwrap();
        assert_eq!(node.display_name(), UNKNOWN_DEVICE);
    }

    #[test]
    fn test_duplicate_uuid_rejected() {
        let mut registry = NodeRegistry::new();
        registry.insert(node(1, 0x0002)).unwrap();
        let err = registry.insert(node(1, 0x0003)).unwrap_err();
        assert!(matches!(err, MeshError::DuplicateKey { kind: "node uuid", .. }));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_address_rejected() {
        let mut registry = NodeRegistry::new();
        registry.insert(node(1, 0x0002)).unwrap();
        let err = registry.insert(node(2, 0x0002)).unwrap_err();
        assert!(matches!(
            err,
            MeshError::DuplicateKey {
                kind: "node unicast address",
                ..
            }
        ));
    }

    #[test]
    fn test_lookup_and_remove() {
        let mut registry = NodeRegistry::new();
        registry.insert(node(1, 0x0002)).unwrap();
        registry.insert(node(2, 0x0010)).unwrap();

        assert_eq!(
            registry.by_address(Address::new(0x0010)).map(|n| n.uuid),
            Some(Uuid::from_u128(2))
        );

        let removed = registry.remove(&Uuid::from_u128(1)).unwrap();
        assert_eq!(removed.unicast_address(), Address::new(0x0002));
        assert!(registry.get(&Uuid::from_u128(1)).is_none());
        assert!(registry.remove(&Uuid::from_u128(1)).is_none());

        // Address is free again after removal.
        registry.insert(node(3, 0x0002)).unwrap();
        let order: Vec<u128> = registry.iter().map(|n| n.uuid.as_u128()).collect();
        assert_eq!(order, vec![2, 3]);
    }
}
