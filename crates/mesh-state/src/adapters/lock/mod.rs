//! # Installation Locking
//!
//! Keeps a second process from touching the same state record.
//!
//! ## Modules
//!
//! - `flock`: `InstallationLock` implementation using fs2
//! - `security`: Lock timeout and stale-lock detection

mod flock;
mod security;

pub use flock::{InstallationLock, LockError};
pub use security::DEFAULT_LOCK_TIMEOUT;
