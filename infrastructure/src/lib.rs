//! Infrastructure layer for the Aging at Home Hub
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLanguageConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileStorageConfig,
};
pub use storage::FileLocalStorage;
