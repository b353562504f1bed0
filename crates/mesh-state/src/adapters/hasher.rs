//! Virtual Address Hashing
//!
//! Implementation of the `VirtualAddressHasher` trait.

use crate::ports::outbound::VirtualAddressHasher;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Reduces a label to the last two bytes of its SHA-256 digest.
///
/// Only the low 14 bits survive the mapping into the virtual range.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sha256VirtualHasher;

impl VirtualAddressHasher for Sha256VirtualHasher {
    fn hash_label(&self, label: &Uuid) -> u16 {
        let digest = Sha256::digest(label.as_bytes());
        u16::from_be_bytes([digest[30], digest[31]])
    }
}
