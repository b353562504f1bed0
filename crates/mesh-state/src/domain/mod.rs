//! # Domain Layer
//!
//! Pure domain logic for the mesh state. No I/O happens here.
//!
//! ## Modules
//!
//! - `address` - 16-bit address space and the special address catalog
//! - `keys` - Network/application keys and the `KeyStore`
//! - `node` - Nodes and the `NodeRegistry`
//! - `group` - Groups and the `GroupRegistry`
//! - `state` - `MeshState` aggregate and its persisted record form
//! - `config` - Store and generation configuration
//! - `errors` - Domain error types

pub mod address;
pub mod config;
pub mod errors;
pub mod group;
pub mod keys;
pub mod node;
pub mod state;
