// src/config.rs

//! Configuration for the surface bridge.
//!
//! Every section applies `#[serde(default)]`, so a config file only needs to
//! name the settings it changes. An empty JSON object yields `Config::default()`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BridgeError;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Pointer input normalization settings.
    pub input: InputConfig,
    /// Surface lifecycle relay settings.
    pub lifecycle: LifecycleConfig,
}

impl Config {
    /// Parses a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, BridgeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BridgeError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| BridgeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// What to do with a pointer action that is neither a press, a release nor a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnclassifiedActionPolicy {
    /// Forward the event with state `Up`. Existing backends rely on this.
    #[default]
    ForwardAsUp,
    /// Emit nothing. The event is still reported as consumed.
    Suppress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    pub unclassified: UnclassifiedActionPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Drop host callbacks that break Created -> Changed* -> Destroyed.
    /// Off by default: every callback is forwarded as the host delivers it.
    pub enforce_ordering: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        LifecycleConfig {
            enforce_ordering: false,
        }
    }
}
