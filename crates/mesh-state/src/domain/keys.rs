//! # Keys
//!
//! Network and application keys plus the `KeyStore` that owns them.
//!
//! Key material is opaque 16-byte data supplied by a `KeyGenerator`; this
//! module never derives or inspects it.

use super::errors::MeshError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Stable key index. Unique per key kind within a `MeshState`.
pub type KeyIndex = u16;

/// Length of all key material in bytes.
pub const KEY_LENGTH: usize = 16;

/// 128-bit symmetric key material.
///
/// Text encodings (JSON) carry it as lowercase hex, binary encodings as raw
/// bytes. `Debug` never prints the material.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyMaterial([u8; KEY_LENGTH]);

impl KeyMaterial {
    pub const fn new(bytes: [u8; KEY_LENGTH]) -> Self {
        KeyMaterial(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; KEY_LENGTH]> for KeyMaterial {
    fn from(bytes: [u8; KEY_LENGTH]) -> Self {
        KeyMaterial(bytes)
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}

impl Serialize for KeyMaterial {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for KeyMaterial {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            let text = String::deserialize(deserializer)?;
            let bytes = hex::decode(&text).map_err(D::Error::custom)?;
            let bytes: [u8; KEY_LENGTH] = bytes.try_into().map_err(|raw: Vec<u8>| {
                D::Error::custom(format!(
                    "key material must be {} bytes, got {}",
                    KEY_LENGTH,
                    raw.len()
                ))
            })?;
            Ok(KeyMaterial(bytes))
        } else {
            <[u8; KEY_LENGTH]>::deserialize(deserializer).map(KeyMaterial)
        }
    }
}

/// A network key, referenced everywhere by its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkKey {
    pub index: KeyIndex,
    pub name: String,
    pub key: KeyMaterial,
}

impl NetworkKey {
    pub fn new(index: KeyIndex, name: impl Into<String>, key: KeyMaterial) -> Self {
        Self {
            index,
            name: name.into(),
            key,
        }
    }
}

/// An application key. The binding to a network key is stored, not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationKey {
    pub index: KeyIndex,
    pub name: String,
    pub key: KeyMaterial,
    pub bound_network_key: KeyIndex,
}

impl ApplicationKey {
    pub fn new(
        index: KeyIndex,
        name: impl Into<String>,
        key: KeyMaterial,
        bound_network_key: KeyIndex,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            key,
            bound_network_key,
        }
    }
}

/// Owns all keys of a `MeshState`. The first network key is the primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStore {
    network_keys: Vec<NetworkKey>,
    application_keys: Vec<ApplicationKey>,
}

impl KeyStore {
    /// Create a store holding only the primary network key.
    pub fn new(primary: NetworkKey) -> Self {
        Self {
            network_keys: vec![primary],
            application_keys: Vec::new(),
        }
    }

    pub fn primary_network_key(&self) -> &NetworkKey {
        // INVARIANT-5: `new` seeds the primary and `remove_network_key` refuses it.
        &self.network_keys[0]
    }

    pub fn network_key(&self, index: KeyIndex) -> Option<&NetworkKey> {
        self.network_keys.iter().find(|k| k.index == index)
    }

    pub fn network_keys(&self) -> impl Iterator<Item = &NetworkKey> {
        self.network_keys.iter()
    }

    pub fn network_key_count(&self) -> usize {
        self.network_keys.len()
    }

    /// Insert a network key (INVARIANT-1).
    pub fn insert_network_key(&mut self, key: NetworkKey) -> Result<(), MeshError> {
        if self.network_key(key.index).is_some() {
            return Err(MeshError::duplicate("network key index", key.index));
        }
        self.network_keys.push(key);
        Ok(())
    }

    /// Remove a secondary network key by index (INVARIANT-5).
    pub fn remove_network_key(&mut self, index: KeyIndex) -> Result<NetworkKey, MeshError> {
        if self.primary_network_key().index == index {
            return Err(MeshError::PrimaryKeyRemoval { index });
        }
        let position = self
            .network_keys
            .iter()
            .position(|k| k.index == index)
            .ok_or(MeshError::UnknownKey { index })?;
        Ok(self.network_keys.remove(position))
    }

    pub fn application_key(&self, index: KeyIndex) -> Option<&ApplicationKey> {
        self.application_keys.iter().find(|k| k.index == index)
    }

    pub fn application_keys(&self) -> impl Iterator<Item = &ApplicationKey> {
        self.application_keys.iter()
    }

    pub fn application_key_count(&self) -> usize {
        self.application_keys.len()
    }

    /// Insert an application key (INVARIANT-1).
    pub fn insert_application_key(&mut self, key: ApplicationKey) -> Result<(), MeshError> {
        if self.application_key(key.index).is_some() {
            return Err(MeshError::duplicate("application key index", key.index));
        }
        self.application_keys.push(key);
        Ok(())
    }

    pub fn remove_application_key(&mut self, index: KeyIndex) -> Option<ApplicationKey> {
        let position = self.application_keys.iter().position(|k| k.index == index)?;
        Some(self.application_keys.remove(position))
    }

    pub(crate) fn network_keys_slice(&self) -> &[NetworkKey] {
        &self.network_keys
    }

    pub(crate) fn application_keys_slice(&self) -> &[ApplicationKey] {
        &self.application_keys
    }
}
