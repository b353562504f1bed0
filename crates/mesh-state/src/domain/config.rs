//! # Configuration
//!
//! Where the state record lives, how it is encoded, and what a freshly
//! generated state looks like.

use super::address::Address;
use super::keys::KeyIndex;
use super::state::DEFAULT_GLOBAL_TTL;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// File name of the well-known state record.
pub const STATE_FILE_NAME: &str = "meshState.bin";

/// Encoding of the persisted record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Codec {
    #[default]
    Json,
    Bincode,
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Json => write!(f, "json"),
            Codec::Bincode => write!(f, "bincode"),
        }
    }
}

impl FromStr for Codec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Codec::Json),
            "bincode" => Ok(Codec::Bincode),
            other => Err(format!("unknown codec '{}': expected json or bincode", other)),
        }
    }
}

/// Configuration for the state store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the state record (and the installation lock).
    pub data_dir: PathBuf,

    /// Record encoding.
    pub codec: Codec,

    /// Parameters for `generate()`.
    pub generation: GenerationConfig,
}

impl StoreConfig {
    /// The well-known record location.
    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(STATE_FILE_NAME)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            codec: Codec::default(),
            generation: GenerationConfig::default(),
        }
    }
}

/// Shape of a freshly generated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub network_name: String,
    pub network_key_index: KeyIndex,
    pub network_key_name: String,
    /// Number of application keys, named "AppKey 1", "AppKey 2", ...
    pub application_key_count: u16,
    pub global_ttl: u8,
    pub unicast_address: Address,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            network_name: "My Network".to_string(),
            network_key_index: 0x0005,
            network_key_name: "Primary Network Key".to_string(),
            application_key_count: 3,
            global_ttl: DEFAULT_GLOBAL_TTL,
            unicast_address: Address::new(0x0123),
        }
    }
}
