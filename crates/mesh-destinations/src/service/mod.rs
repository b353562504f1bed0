//! # Destination Resolver
//!
//! Implements `HeartbeatDestinationApi` over a candidate snapshot.
//!
//! ## Validation Order
//!
//! ```text
//! request ──→ owner? ──yes──→ SelfDestination
//!               │no
//!               ↓
//!          eligible candidate? ──no──→ InvalidDestination
//!               │yes
//!               ↓
//!          slot.replace() ──→ SelectionChange { deselected, selected }
//! ```

use crate::domain::candidates::{CandidateSet, Destination, DestinationRequest, KeyCandidate};
use crate::domain::errors::DestinationError;
use crate::domain::selection::{SelectionChange, SelectionSlot};
use crate::ports::inbound::HeartbeatDestinationApi;
use mesh_state::{Address, AddressKind, KeyIndex, MeshState, Node};
use uuid::Uuid;

/// A fully selected heartbeat publication target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatDestination {
    pub network_key: KeyIndex,
    pub address: Address,
}

pub struct DestinationResolver {
    owner: Uuid,
    owner_address: Address,
    candidates: CandidateSet,
    key_selection: SelectionSlot<KeyCandidate>,
    destination_selection: SelectionSlot<Destination>,
}

impl DestinationResolver {
    pub fn new(state: &MeshState, owner: &Node) -> Self {
        let candidates = CandidateSet::build(state, owner);
        tracing::debug!(
            "[mesh-destinations] {} candidates for {}: {} keys, {} nodes, {} groups",
            owner.display_name(),
            owner.uuid,
            candidates.keys.len(),
            candidates.nodes.len(),
            candidates.groups.len()
        );

        Self {
            owner: owner.uuid,
            owner_address: owner.unicast_address(),
            candidates,
            key_selection: SelectionSlot::new(),
            destination_selection: SelectionSlot::new(),
        }
    }

    /// Look up the owner by uuid, then build the resolver.
    pub fn for_node(state: &MeshState, owner: &Uuid) -> Result<Self, DestinationError> {
        let node = state
            .nodes()
            .get(owner)
            .ok_or(DestinationError::UnknownNode(*owner))?;
        Ok(Self::new(state, node))
    }

    pub fn owner(&self) -> Uuid {
        self.owner
    }

    pub fn selected_key(&self) -> Option<&KeyCandidate> {
        self.key_selection.current()
    }

    pub fn selected_destination(&self) -> Option<&Destination> {
        self.destination_selection.current()
    }

    fn validate_node(&self, uuid: &Uuid) -> Result<Destination, DestinationError> {
        if *uuid == self.owner {
            return Err(DestinationError::SelfDestination { uuid: *uuid });
        }
        if self.candidates.nodes.is_empty() {
            return Err(DestinationError::invalid("no other nodes to publish to"));
        }
        self.candidates
            .node(uuid)
            .cloned()
            .map(Destination::Node)
            .ok_or_else(|| DestinationError::invalid(format!("unknown node {}", uuid)))
    }

    fn validate_group(&self, address: Address) -> Result<Destination, DestinationError> {
        match address.kind() {
            AddressKind::Group => self
                .candidates
                .group(address)
                .cloned()
                .map(Destination::Group)
                .ok_or_else(|| DestinationError::invalid(format!("unknown group {}", address))),
            AddressKind::Special(special) => Ok(Destination::Special(special)),
            AddressKind::Virtual => Err(DestinationError::invalid(format!(
                "virtual address {} cannot receive heartbeats",
                address
            ))),
            kind => Err(DestinationError::invalid(format!(
                "{} ({}) is not a group address",
                address, kind
            ))),
        }
    }

    fn resolve_address(&self, address: Address) -> Result<Destination, DestinationError> {
        match address.kind() {
            AddressKind::Unicast if address == self.owner_address => {
                Err(DestinationError::SelfDestination { uuid: self.owner })
            }
            AddressKind::Unicast => self
                .candidates
                .node_by_address(address)
                .cloned()
                .map(Destination::Node)
                .ok_or_else(|| {
                    DestinationError::invalid(format!("no node at unicast address {}", address))
                }),
            AddressKind::Unassigned | AddressKind::Reserved => Err(DestinationError::invalid(
                format!("{} is not a publishable address", address),
            )),
            _ => self.validate_group(address),
        }
    }

    fn commit(&mut self, destination: Destination) -> SelectionChange<Destination> {
        let change = self.destination_selection.replace(destination);
        if let Some(previous) = &change.deselected {
            tracing::debug!(
                "[mesh-destinations] Deselected {} ({})",
                previous.title(),
                previous.address()
            );
        }
        tracing::debug!(
            "[mesh-destinations] Selected {} ({})",
            change.selected.title(),
            change.selected.address()
        );
        change
    }
}

impl HeartbeatDestinationApi for DestinationResolver {
    fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    fn validate(&self, request: DestinationRequest) -> Result<Destination, DestinationError> {
        match request {
            DestinationRequest::Node(uuid) => self.validate_node(&uuid),
            DestinationRequest::Group(address) => self.validate_group(address),
            DestinationRequest::Special(special) => Ok(Destination::Special(special)),
        }
    }

    fn select_destination(
        &mut self,
        request: DestinationRequest,
    ) -> Result<SelectionChange<Destination>, DestinationError> {
        let destination = self.validate(request).map_err(|e| {
            tracing::debug!("[mesh-destinations] Rejected {:?}: {}", request, e);
            e
        })?;
        Ok(self.commit(destination))
    }

    fn select_address(
        &mut self,
        address: Address,
    ) -> Result<SelectionChange<Destination>, DestinationError> {
        let destination = self.resolve_address(address).map_err(|e| {
            tracing::debug!("[mesh-destinations] Rejected address {}: {}", address, e);
            e
        })?;
        Ok(self.commit(destination))
    }

    fn select_key(
        &mut self,
        index: KeyIndex,
    ) -> Result<SelectionChange<KeyCandidate>, DestinationError> {
        let key = self
            .candidates
            .key(index)
            .cloned()
            .ok_or(DestinationError::UnknownKey {
                index,
                owner: self.owner,
            })?;
        Ok(self.key_selection.replace(key))
    }

    fn resolved(&self) -> Option<HeartbeatDestination> {
        let key = self.key_selection.current()?;
        let destination = self.destination_selection.current()?;
        Some(HeartbeatDestination {
            network_key: key.index,
            address: destination.address(),
        })
    }
}
