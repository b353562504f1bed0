//! # Runtime Configuration
//!
//! Defaults, overridden by environment variables, overridden by CLI
//! arguments (applied in `main`).
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `MESH_DATA_DIR` | Directory holding the state record and lock |
//! | `MESH_CODEC` | `json` or `bincode` |
//! | `MESH_REGENERATE_ON_CORRUPT` | `1`/`true`: replace an undecodable record with a fresh state |
//! | `MESH_LOCK_TIMEOUT_MS` | How long to wait for another holder of the lock |

use mesh_state::adapters::lock::DEFAULT_LOCK_TIMEOUT;
use mesh_state::{Codec, StoreConfig};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const ENV_DATA_DIR: &str = "MESH_DATA_DIR";
pub const ENV_CODEC: &str = "MESH_CODEC";
pub const ENV_REGENERATE_ON_CORRUPT: &str = "MESH_REGENERATE_ON_CORRUPT";
pub const ENV_LOCK_TIMEOUT_MS: &str = "MESH_LOCK_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// State store configuration.
    pub store: StoreConfig,
    /// Replace a `CorruptState` record instead of failing startup.
    pub regenerate_on_corrupt: bool,
    /// Wait for the installation lock.
    pub lock_timeout: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            regenerate_on_corrupt: false,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }
}

impl RuntimeConfig {
    /// Defaults with the process environment applied.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Unparseable values are logged and ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.store.data_dir = PathBuf::from(dir);
        }

        if let Some(codec) = lookup(ENV_CODEC) {
            match codec.parse::<Codec>() {
                Ok(codec) => self.store.codec = codec,
                Err(e) => warn!("{} ignored: {}", ENV_CODEC, e),
            }
        }

        if let Some(flag) = lookup(ENV_REGENERATE_ON_CORRUPT) {
            match parse_flag(&flag) {
                Some(value) => self.regenerate_on_corrupt = value,
                None => warn!("{} must be true/false or 1/0", ENV_REGENERATE_ON_CORRUPT),
            }
        }

        if let Some(ms) = lookup(ENV_LOCK_TIMEOUT_MS) {
            if let Ok(ms) = ms.parse() {
                self.lock_timeout = Duration::from_millis(ms);
            } else {
                warn!("{} must be a number of milliseconds", ENV_LOCK_TIMEOUT_MS);
            }
        }

        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
