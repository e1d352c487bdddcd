//! Configuration schema for ctrmount
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};

/// Main configuration structure for ctrmount
///
/// Serialized to/from `~/.config/ctrmount/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Timeout for Docker API requests in seconds (default: 120)
    #[serde(default = "default_engine_timeout_secs")]
    pub engine_timeout_secs: u64,

    /// Always show full container IDs in listing tables (default: false)
    /// `--notruncate` enables this for a single invocation
    #[serde(default)]
    pub no_truncate: bool,
}

fn default_engine_timeout_secs() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            engine_timeout_secs: default_engine_timeout_secs(),
            no_truncate: false,
        }
    }
}
