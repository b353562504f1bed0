//! # Ports Layer
//!
//! - `inbound` - Destination selection API

pub mod inbound;

pub use inbound::HeartbeatDestinationApi;
