//! Key Generation Adapters
//!
//! Implementations of the `KeyGenerator` trait.

use crate::domain::keys::{KeyMaterial, KEY_LENGTH};
use crate::ports::outbound::KeyGenerator;
use rand::rngs::OsRng;
use rand::RngCore;

/// Key generator drawing material from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomKeyGenerator;

impl RandomKeyGenerator {
    fn fresh() -> Option<KeyMaterial> {
        let mut bytes = [0u8; KEY_LENGTH];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => Some(KeyMaterial::new(bytes)),
            Err(e) => {
                tracing::error!("[mesh-state] OS entropy source failed: {}", e);
                None
            }
        }
    }
}

impl KeyGenerator for RandomKeyGenerator {
    fn generate_network_key(&self) -> Option<KeyMaterial> {
        Self::fresh()
    }

    fn generate_application_key(&self) -> Option<KeyMaterial> {
        Self::fresh()
    }
}

/// Fixed placeholder network key material.
pub const PLACEHOLDER_NETWORK_KEY: [u8; KEY_LENGTH] = [
    0x18, 0xee, 0xd9, 0xc2, 0xa5, 0x6a, 0xdd, 0x85, 0x04, 0x9f, 0xfc, 0x3c, 0x59, 0xad, 0x0e, 0x12,
];

/// Fixed placeholder application key material.
pub const PLACEHOLDER_APPLICATION_KEY: [u8; KEY_LENGTH] = [
    0x2a, 0xa2, 0xa6, 0xde, 0xd5, 0xa0, 0x79, 0x8c, 0xea, 0xb5, 0x78, 0x7c, 0xa3, 0xae, 0x39, 0xfc,
];

/// Key generator returning fixed material. Deterministic; not for production networks.
///
/// Either half can be disabled to simulate a failing generator.
#[derive(Debug, Clone, Copy)]
pub struct StaticKeyGenerator {
    network_key: Option<KeyMaterial>,
    application_key: Option<KeyMaterial>,
}

impl StaticKeyGenerator {
    pub fn new(network_key: Option<KeyMaterial>, application_key: Option<KeyMaterial>) -> Self {
        Self {
            network_key,
            application_key,
        }
    }

    /// Generator that never produces material.
    pub fn failing() -> Self {
        Self::new(None, None)
    }
}

impl Default for StaticKeyGenerator {
    fn default() -> Self {
        Self::new(
            Some(KeyMaterial::new(PLACEHOLDER_NETWORK_KEY)),
            Some(KeyMaterial::new(PLACEHOLDER_APPLICATION_KEY)),
        )
    }
}

impl KeyGenerator for StaticKeyGenerator {
    fn generate_network_key(&self) -> Option<KeyMaterial> {
        self.network_key
    }

    fn generate_application_key(&self) -> Option<KeyMaterial> {
        self.application_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_keys_differ() {
        let generator = RandomKeyGenerator;
        let a = generator.generate_network_key().unwrap();
        let b = generator.generate_network_key().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_static_generator() {
        let generator = StaticKeyGenerator::default();
        assert_eq!(
            generator.generate_network_key().map(|k| *k.as_bytes()),
            Some(PLACEHOLDER_NETWORK_KEY)
        );
        assert!(StaticKeyGenerator::failing().generate_application_key().is_none());
    }
}
