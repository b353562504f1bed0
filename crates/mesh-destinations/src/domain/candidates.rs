//! # Destination Candidates
//!
//! The eligible heartbeat destinations for one owning node, snapshotted
//! from a `MeshState`.

use mesh_state::{Address, KeyIndex, MeshState, Node, SpecialAddress};
use uuid::Uuid;

/// A network key the owner may publish heartbeats with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCandidate {
    pub index: KeyIndex,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCandidate {
    pub uuid: Uuid,
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCandidate {
    pub name: String,
    pub address: Address,
}

/// A validated heartbeat destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Node(NodeCandidate),
    Group(GroupCandidate),
    Special(SpecialAddress),
}

impl Destination {
    pub fn address(&self) -> Address {
        match self {
            Destination::Node(node) => node.address,
            Destination::Group(group) => group.address,
            Destination::Special(special) => special.address(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Destination::Node(node) => &node.name,
            Destination::Group(group) => &group.name,
            Destination::Special(special) => special.title(),
        }
    }
}

/// A destination proposed by the caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationRequest {
    Node(Uuid),
    Group(Address),
    Special(SpecialAddress),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NetworkKeys,
    Nodes,
    Groups,
    SpecialGroups,
}

impl Category {
    /// Section header. The special section carries none.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Category::NetworkKeys => Some("Network Keys"),
            Category::Nodes => Some("Nodes"),
            Category::Groups => Some("Groups"),
            Category::SpecialGroups => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionEntries {
    Keys(Vec<KeyCandidate>),
    Destinations(Vec<Destination>),
}

impl SectionEntries {
    pub fn len(&self) -> usize {
        match self {
            SectionEntries::Keys(keys) => keys.len(),
            SectionEntries::Destinations(destinations) => destinations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub category: Category,
    pub entries: SectionEntries,
}

/// Snapshot of every candidate, in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    pub keys: Vec<KeyCandidate>,
    pub nodes: Vec<NodeCandidate>,
    pub groups: Vec<GroupCandidate>,
}

impl CandidateSet {
    /// Enumerate the candidates `owner` may choose from.
    ///
    /// Keys the owner references but the key store lacks are skipped.
    pub fn build(state: &MeshState, owner: &Node) -> Self {
        let keys = owner
            .network_keys
            .iter()
            .filter_map(|&index| match state.keys().network_key(index) {
                Some(key) => Some(KeyCandidate {
                    index,
                    name: key.name.clone(),
                }),
                None => {
                    tracing::warn!(
                        "[mesh-destinations] Node {} references missing network key {}",
                        owner.uuid,
                        index
                    );
                    None
                }
            })
            .collect();

        let nodes = state
            .nodes()
            .iter()
            .filter(|node| node.uuid != owner.uuid)
            .map(|node| NodeCandidate {
                uuid: node.uuid,
                name: node.display_name().to_string(),
                address: node.unicast_address(),
            })
            .collect();

        let groups = state
            .groups()
            .iter()
            .filter(|group| !group.is_virtual())
            .map(|group| GroupCandidate {
                name: group.name.clone(),
                address: group.address(),
            })
            .collect();

        Self {
            keys,
            nodes,
            groups,
        }
    }

    pub fn specials() -> &'static [SpecialAddress; 4] {
        SpecialAddress::catalog()
    }

    pub fn key(&self, index: KeyIndex) -> Option<&KeyCandidate> {
        self.keys.iter().find(|key| key.index == index)
    }

    pub fn node(&self, uuid: &Uuid) -> Option<&NodeCandidate> {
        self.nodes.iter().find(|node| &node.uuid == uuid)
    }

    pub fn node_by_address(&self, address: Address) -> Option<&NodeCandidate> {
        self.nodes.iter().find(|node| node.address == address)
    }

    pub fn group(&self, address: Address) -> Option<&GroupCandidate> {
        self.groups.iter().find(|group| group.address == address)
    }

    /// Content of the group slot. Holds the specials when there are no groups.
    pub fn group_slot(&self) -> Vec<Destination> {
        if self.groups.is_empty() {
            Self::special_destinations()
        } else {
            self.groups.iter().cloned().map(Destination::Group).collect()
        }
    }

    /// The separate special section, present only alongside real groups.
    pub fn special_slot(&self) -> Option<Vec<Destination>> {
        if self.groups.is_empty() {
            None
        } else {
            Some(Self::special_destinations())
        }
    }

    /// Every destination candidate, nodes first.
    pub fn destinations(&self) -> Vec<Destination> {
        let mut destinations: Vec<Destination> =
            self.nodes.iter().cloned().map(Destination::Node).collect();
        destinations.extend(self.group_slot());
        if let Some(specials) = self.special_slot() {
            destinations.extend(specials);
        }
        destinations
    }

    /// Candidates grouped for presentation.
    ///
    /// The node section is always present, even when empty.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![
            Section {
                category: Category::NetworkKeys,
                entries: SectionEntries::Keys(self.keys.clone()),
            },
            Section {
                category: Category::Nodes,
                entries: SectionEntries::Destinations(
                    self.nodes.iter().cloned().map(Destination::Node).collect(),
                ),
            },
        ];

        let group_category = if self.groups.is_empty() {
            Category::SpecialGroups
        } else {
            Category::Groups
        };
        sections.push(Section {
            category: group_category,
            entries: SectionEntries::Destinations(self.group_slot()),
        });

        if let Some(specials) = self.special_slot() {
            sections.push(Section {
                category: Category::SpecialGroups,
                entries: SectionEntries::Destinations(specials),
            });
        }
        sections
    }

    fn special_destinations() -> Vec<Destination> {
        Self::specials()
            .iter()
            .copied()
            .map(Destination::Special)
            .collect()
    }
}
