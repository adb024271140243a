//! Local storage adapters
//!
//! Provides [`FileLocalStorage`], a JSON file implementing the
//! [`LocalStorage`](aah_application::LocalStorage) port.

mod file_storage;

pub use file_storage::FileLocalStorage;
