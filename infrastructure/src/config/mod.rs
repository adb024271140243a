//! Configuration file loading for the Aging at Home Hub
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables: `AAH_<SECTION>__<KEY>` (e.g. `AAH_STORAGE__PATH`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./aah.toml` or `./.aah.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/aging-at-home/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLanguageConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat,
    FileStorageConfig,
};
pub use loader::ConfigLoader;
