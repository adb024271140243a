//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Local storage file (defaults to the platform data directory)
    pub path: Option<PathBuf>,
    /// Keep state in memory only; nothing is written to disk
    pub ephemeral: bool,
}
