//! Integration scenarios spanning `mesh-state`, `mesh-destinations` and
//! `mesh-runtime`.

pub mod bootstrap;
pub mod heartbeat_destinations;
