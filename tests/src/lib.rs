//! # Mesh Test Suite
//!
//! Cross-crate scenarios that no single crate can test alone.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── bootstrap.rs               # First run, later runs, corruption, locking
//!     └── heartbeat_destinations.rs  # Restored state → resolver → selection
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p mesh-tests
//! cargo test -p mesh-tests integration::heartbeat_destinations::
//! ```

pub mod integration;
