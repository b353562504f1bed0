//! # Address Space
//!
//! Classification of 16-bit mesh addresses.
//!
//! ```text
//! 0x0000            Unassigned
//! 0x0001..=0x7FFF   Unicast
//! 0x8000..=0xBFFF   Virtual (hash of a 128-bit label)
//! 0xC000..=0xFEFF   Group
//! 0xFF00..=0xFFFB   Reserved
//! 0xFFFC..=0xFFFF   Special (all-proxies, all-friends, all-relays, all-nodes)
//! ```
//!
//! Special addresses win over every other rule, so `0xFFFF` (the broadcast
//! address) classifies as `Special(AllNodes)`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 16-bit mesh address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(u16);

impl Address {
    pub const UNASSIGNED: Address = Address(0x0000);
    pub const ALL_PROXIES: Address = Address(0xFFFC);
    pub const ALL_FRIENDS: Address = Address(0xFFFD);
    pub const ALL_RELAYS: Address = Address(0xFFFE);
    pub const ALL_NODES: Address = Address(0xFFFF);

    const MAX_UNICAST: u16 = 0x7FFF;
    const VIRTUAL_START: u16 = 0x8000;
    const VIRTUAL_END: u16 = 0xBFFF;
    const GROUP_START: u16 = 0xC000;
    const GROUP_END: u16 = 0xFEFF;

    pub const fn new(value: u16) -> Self {
        Address(value)
    }

    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Classify this address. First matching rule wins.
    pub fn kind(&self) -> AddressKind {
        if self.0 == 0 {
            return AddressKind::Unassigned;
        }
        if self.0 <= Self::MAX_UNICAST {
            return AddressKind::Unicast;
        }
        if let Some(special) = SpecialAddress::from_address(*self) {
            return AddressKind::Special(special);
        }
        match self.0 {
            Self::GROUP_START..=Self::GROUP_END => AddressKind::Group,
            Self::VIRTUAL_START..=Self::VIRTUAL_END => AddressKind::Virtual,
            _ => AddressKind::Reserved,
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.kind() == AddressKind::Unassigned
    }

    pub fn is_unicast(&self) -> bool {
        self.kind() == AddressKind::Unicast
    }

    pub fn is_virtual(&self) -> bool {
        self.kind() == AddressKind::Virtual
    }

    /// True for ordinary (non-special) group addresses only.
    pub fn is_group(&self) -> bool {
        self.kind() == AddressKind::Group
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind(), AddressKind::Special(_))
    }

    /// `0xFFFF` addresses every node; it doubles as the all-nodes special.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::ALL_NODES
    }

    /// Reduce a virtual-address hash to the virtual range.
    pub(crate) fn virtual_from_hash(hash: u16) -> Self {
        Address(Self::VIRTUAL_START | (hash & 0x3FFF))
    }
}

/// Free-function form of [`Address::kind`].
pub fn classify(address: Address) -> AddressKind {
    address.kind()
}

impl From<u16> for Address {
    fn from(value: u16) -> Self {
        Address(value)
    }
}

impl From<Address> for u16 {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{:04X})", self.0)
    }
}

/// Class of a 16-bit address.
///
/// There is no broadcast class: `0xFFFF` is `Special(AllNodes)` and
/// broadcast is exposed through `Address::is_broadcast`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    Unassigned,
    Unicast,
    Virtual,
    Group,
    Special(SpecialAddress),
    /// `0xFF00..=0xFFFB`, reserved for future use.
    Reserved,
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressKind::Unassigned => write!(f, "unassigned"),
            AddressKind::Unicast => write!(f, "unicast"),
            AddressKind::Virtual => write!(f, "virtual"),
            AddressKind::Group => write!(f, "group"),
            AddressKind::Special(special) => write!(f, "special ({})", special.title()),
            AddressKind::Reserved => write!(f, "reserved"),
        }
    }
}

/// The four reserved group addresses with network-wide semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialAddress {
    AllProxies,
    AllFriends,
    AllRelays,
    AllNodes,
}

impl SpecialAddress {
    /// Fixed catalog, in presentation order.
    pub const CATALOG: [SpecialAddress; 4] = [
        SpecialAddress::AllProxies,
        SpecialAddress::AllFriends,
        SpecialAddress::AllRelays,
        SpecialAddress::AllNodes,
    ];

    pub fn catalog() -> &'static [SpecialAddress; 4] {
        &Self::CATALOG
    }

    pub const fn address(&self) -> Address {
        match self {
            SpecialAddress::AllProxies => Address::ALL_PROXIES,
            SpecialAddress::AllFriends => Address::ALL_FRIENDS,
            SpecialAddress::AllRelays => Address::ALL_RELAYS,
            SpecialAddress::AllNodes => Address::ALL_NODES,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            SpecialAddress::AllProxies => "All Proxies",
            SpecialAddress::AllFriends => "All Friends",
            SpecialAddress::AllRelays => "All Relays",
            SpecialAddress::AllNodes => "All Nodes",
        }
    }

    pub fn from_address(address: Address) -> Option<Self> {
        Self::CATALOG
            .iter()
            .copied()
            .find(|special| special.address() == address)
    }
}

impl fmt::Display for SpecialAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
