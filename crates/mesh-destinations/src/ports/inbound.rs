//! # Inbound Ports (Driving Ports)

use crate::domain::candidates::{CandidateSet, Destination, DestinationRequest, KeyCandidate};
use crate::domain::errors::DestinationError;
use crate::domain::selection::SelectionChange;
use crate::service::HeartbeatDestination;
use mesh_state::{Address, KeyIndex};

/// Selection API for one owning node's heartbeat publication.
///
/// Key and destination are selected independently. Each holds at most
/// one value and a rejected proposal changes neither.
pub trait HeartbeatDestinationApi {
    fn candidates(&self) -> &CandidateSet;

    /// Check a proposal without selecting it.
    ///
    /// ## Errors
    ///
    /// - `SelfDestination`: the proposal is the owner itself
    /// - `InvalidDestination`: unknown, virtual or otherwise ineligible
    fn validate(&self, request: DestinationRequest) -> Result<Destination, DestinationError>;

    fn select_destination(
        &mut self,
        request: DestinationRequest,
    ) -> Result<SelectionChange<Destination>, DestinationError>;

    /// Select by raw address, classified first.
    fn select_address(
        &mut self,
        address: Address,
    ) -> Result<SelectionChange<Destination>, DestinationError>;

    /// ## Errors
    ///
    /// - `UnknownKey`: the key is not bound to the owner
    fn select_key(
        &mut self,
        index: KeyIndex,
    ) -> Result<SelectionChange<KeyCandidate>, DestinationError>;

    /// The chosen key and address, once both are selected.
    fn resolved(&self) -> Option<HeartbeatDestination>;
}
