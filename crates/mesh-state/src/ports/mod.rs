//! # Ports Layer
//!
//! - `inbound.rs` - Driving port (the state store API callers use)
//! - `outbound.rs` - Driven ports (storage, codec, key generation, virtual address hashing)

pub mod inbound;
pub mod outbound;
