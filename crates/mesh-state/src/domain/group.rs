//! # Groups
//!
//! User-created groups and the `GroupRegistry`.
//!
//! A group is bound either to an ordinary group address or to a virtual
//! address. The four special addresses are a fixed catalog and never appear
//! as `Group` entities.

use super::address::{Address, AddressKind};
use super::errors::MeshError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    address: Address,
    /// Label the virtual address was derived from, if known.
    virtual_label: Option<Uuid>,
}

impl Group {
    /// Create a group on a group or virtual address (INVARIANT-4).
    pub fn new(name: impl Into<String>, address: Address) -> Result<Self, MeshError> {
        match address.kind() {
            AddressKind::Group | AddressKind::Virtual => Ok(Self {
                name: name.into(),
                address,
                virtual_label: None,
            }),
            _ => Err(MeshError::InvalidAddress {
                address,
                expected: "group or virtual",
            }),
        }
    }

    /// Create a virtual group, keeping the label its address was hashed from.
    pub fn with_virtual_label(
        name: impl Into<String>,
        label: Uuid,
        address: Address,
    ) -> Result<Self, MeshError> {
        if !address.is_virtual() {
            return Err(MeshError::InvalidAddress {
                address,
                expected: "virtual",
            });
        }
        Ok(Self {
            name: name.into(),
            address,
            virtual_label: Some(label),
        })
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn virtual_label(&self) -> Option<Uuid> {
        self.virtual_label
    }

    pub fn is_virtual(&self) -> bool {
        self.address.is_virtual()
    }
}

/// Named groups, unique by address (INVARIANT-3).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupRegistry {
    groups: Vec<Group>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, group: Group) -> Result<(), MeshError> {
        if self.get(group.address).is_some() {
            return Err(MeshError::duplicate("group address", group.address));
        }
        self.groups.push(group);
        Ok(())
    }

    pub fn remove(&mut self, address: Address) -> Option<Group> {
        let position = self.groups.iter().position(|g| g.address == address)?;
        Some(self.groups.remove(position))
    }

    pub fn get(&self, address: Address) -> Option<&Group> {
        self.groups.iter().find(|g| g.address == address)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Group] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_address_classes() {
        assert!(Group::new("Kitchen", Address::new(0xC001)).is_ok());
        assert!(Group::new("Hashed", Address::new(0x9000)).is_ok());

        for bad in [0x0001u16, 0x0000, 0xFF00, 0xFFFC, 0xFFFF] {
            let result = Group::new("Bad", Address::new(bad));
            assert!(
                matches!(result, Err(MeshError::InvalidAddress { .. })),
                "{:04X}",
                bad
            );
        }
    }

    #[test]
    fn test_virtual_label_requires_virtual_address() {
        let label = Uuid::from_u128(0xABCD);
        let group = Group::with_virtual_label("Lights", label, Address::new(0x8123)).unwrap();
        assert!(group.is_virtual());
        assert_eq!(group.virtual_label(), Some(label));

        assert!(Group::with_virtual_label("Lights", label, Address::new(0xC123)).is_err());
    }

    #[test]
    fn test_registry_rejects_duplicate_address() {
        let mut registry = GroupRegistry::new();
        registry
            .insert(Group::new("A", Address::new(0xC000)).unwrap())
            .unwrap();
        let err = registry
            .insert(Group::new("B", Address::new(0xC000)).unwrap())
            .unwrap_err();
        assert!(matches!(err, MeshError::DuplicateKey { .. }));
    }

    #[test]
    fn test_registry_remove_and_order() {
        let mut registry = GroupRegistry::new();
        for (name, address) in [("A", 0xC003u16), ("B", 0xC001), ("C", 0xC002)] {
            registry
                .insert(Group::new(name, Address::new(address)).unwrap())
                .unwrap();
        }
        let names: Vec<&str> = registry.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        assert_eq!(
            registry.remove(Address::new(0xC001)).map(|g| g.name),
            Some("B".to_string())
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.get(Address::new(0xC001)).is_none());
    }
}
