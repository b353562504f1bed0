//! Serializer Adapters
//!
//! Implementations of the `StateSerializer` trait.

#[cfg(feature = "bincode-codec")]
mod bincode;
mod json;

#[cfg(feature = "bincode-codec")]
pub use self::bincode::BincodeStateSerializer;
pub use self::json::JsonStateSerializer;
