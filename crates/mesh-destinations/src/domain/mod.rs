//! # Domain Layer
//!
//! - `candidates` - Candidate model and enumeration
//! - `selection` - Single-slot selection register
//! - `errors` - Selection errors

pub mod candidates;
pub mod errors;
pub mod selection;
