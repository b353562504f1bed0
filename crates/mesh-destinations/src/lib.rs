//! # Heartbeat Destinations (mesh-destinations)
//!
//! Enumerates and validates heartbeat publication destinations for one
//! owning node of a `MeshState`.
//!
//! ## Candidate Order
//!
//! ```text
//! 1. Network Keys   the owner's bound keys (separate, orthogonal selection)
//! 2. Nodes          every node except the owner (compared by uuid)
//! 3. Groups         every non-virtual group
//!                   └─ when empty, the 4 special addresses fill this slot
//! 4. Special        the 4 special addresses (only when 3 has groups)
//! ```
//!
//! ## Rules
//!
//! | Rule | Description |
//! |------|-------------|
//! | Self-exclusion | The owner never appears among node candidates |
//! | No virtual | Virtual-address groups are never heartbeat destinations |
//! | Single slot | One key and one destination selection; a new selection replaces the old |
//! | Atomic reject | A failed selection leaves the current one untouched |
//!
//! ## Usage
//!
//! ```ignore
//! use mesh_destinations::{DestinationRequest, DestinationResolver};
//!
//! let mut resolver = DestinationResolver::for_node(&state, &owner_uuid)?;
//! resolver.select_key(0)?;
//! resolver.select_destination(DestinationRequest::Special(SpecialAddress::AllRelays))?;
//! let chosen = resolver.resolved(); // Some(HeartbeatDestination { network_key, address })
//! ```

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::candidates::{
    CandidateSet, Category, Destination, DestinationRequest, GroupCandidate, KeyCandidate,
    NodeCandidate, Section, SectionEntries,
};
pub use domain::errors::DestinationError;
pub use domain::selection::{SelectionChange, SelectionSlot};
pub use ports::HeartbeatDestinationApi;
pub use service::{DestinationResolver, HeartbeatDestination};
