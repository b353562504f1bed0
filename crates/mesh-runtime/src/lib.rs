//! # Mesh Runtime
//!
//! Owns one mesh installation for the lifetime of the process.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then environment, then CLI arguments)
//! 2. Acquire the installation lock in the data directory
//! 3. Restore the persisted state, or generate and save a fresh one
//! 4. Hand the state to the caller as a `MeshContext`
//!
//! ## Modules
//!
//! - `config` - `RuntimeConfig` and environment overrides
//! - `bootstrap` - First-run / subsequent-run bootstrap and `MeshContext`
//! - `report` - Plain-text rendering of state and destination candidates

pub mod bootstrap;
pub mod config;
pub mod report;

pub use bootstrap::{bootstrap, BootstrapError, MeshContext, StateOrigin};
pub use config::RuntimeConfig;
