//! JSON-file local storage.
//!
//! All entries live in one JSON object on disk:
//!
//! ```json
//! { "aah_language": "es", "aah_quiz": "{\"stairs\":true}" }
//! ```
//!
//! Every write rewrites the file through a temporary file and a rename, so a
//! crash never leaves a half-written file behind. A file that cannot be parsed
//! is copied aside and treated as empty.

use aah_application::ports::local_storage::{LocalStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error, warn};

/// [`LocalStorage`] adapter backed by a single JSON file
///
/// Only one instance should point at a given path at a time.
pub struct FileLocalStorage {
    path: PathBuf,
    cache: Mutex<BTreeMap<String, String>>,
}

impl FileLocalStorage {
    /// Open the storage file, loading existing entries if any
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = Self::load_cache(&path).unwrap_or_default();
        Self {
            path,
            cache: Mutex::new(cache),
        }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("aging-at-home").join("local_storage.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_cache(path: &Path) -> Option<BTreeMap<String, String>> {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
                Ok(cache) => {
                    debug!(path = ?path, entries = cache.len(), "Loaded local storage");
                    Some(cache)
                }
                Err(e) => {
                    warn!(
                        path = ?path,
                        error = %e,
                        "Local storage file is unreadable, starting fresh"
                    );
                    Self::backup_corrupted(path);
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?path, "Local storage file not found, starting fresh");
                None
            }
            Err(e) => {
                warn!(path = ?path, error = %e, "Failed to read local storage");
                None
            }
        }
    }

    fn backup_corrupted(path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        let backup = parent.join(format!(
            "{}.corrupted.{}",
            path.file_name().unwrap_or_default().to_string_lossy(),
            chrono::Utc::now().timestamp()
        ));
        if let Err(e) = fs::copy(path, &backup) {
            warn!(backup = ?backup, error = %e, "Could not back up unreadable local storage");
        }
    }

    fn persist(&self, cache: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let io_error = |path: &Path, e: std::io::Error| StorageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };

        let json = serde_json::to_string_pretty(cache)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            error!(path = ?tmp_path, error = %e, "Failed to write local storage");
            io_error(&tmp_path, e)
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            error!(from = ?tmp_path, to = ?self.path, error = %e, "Failed to replace local storage");
            io_error(&self.path, e)
        })?;

        debug!(path = ?self.path, entries = cache.len(), "Persisted local storage");
        Ok(())
    }
}

impl LocalStorage for FileLocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let cache = self.cache.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(cache.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().map_err(|_| StorageError::Poisoned)?;
        cache.insert(key.to_string(), value.to_string());
        self.persist(&cache)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().map_err(|_| StorageError::Poisoned)?;
        if cache.remove(key).is_none() {
            return Ok(());
        }
        self.persist(&cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aah_application::{Session, QUIZ_KEY};
    use aah_domain::{Catalog, Language};
    use std::sync::Arc;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileLocalStorage::open(dir.path().join("absent.json"));
        assert_eq!(storage.get_item(QUIZ_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_item_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local_storage.json");

        let storage = FileLocalStorage::open(&path);
        storage.set_item("aah_language", "es").unwrap();
        drop(storage);

        let reopened = FileLocalStorage::open(&path);
        assert_eq!(
            reopened.get_item("aah_language").unwrap().as_deref(),
            Some("es")
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_remove_item_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");

        let storage = FileLocalStorage::open(&path);
        storage.set_item(QUIZ_KEY, "{}").unwrap();
        storage.remove_item(QUIZ_KEY).unwrap();

        assert_eq!(FileLocalStorage::open(&path).get_item(QUIZ_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_backed_up_and_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        fs::write(&path, "not json at all").unwrap();

        let storage = FileLocalStorage::open(&path);
        assert_eq!(storage.get_item(QUIZ_KEY).unwrap(), None);

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains(".corrupted."))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_session_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");

        {
            let storage = Arc::new(FileLocalStorage::open(&path));
            let mut session = Session::open(storage, Catalog::builtin(), Language::En);
            session.answer("flooring", true.into()).unwrap();
            session.set_language(Language::Es).unwrap();
        }

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get(QUIZ_KEY).map(String::as_str), Some(r#"{"flooring":true}"#));
        assert_eq!(raw.get("aah_language").map(String::as_str), Some("es"));

        let session = Session::open(
            Arc::new(FileLocalStorage::open(&path)),
            Catalog::builtin(),
            Language::En,
        );
        assert_eq!(session.language(), Language::Es);

        let mut session = session;
        session.reset().unwrap();
        let session = Session::open(
            Arc::new(FileLocalStorage::open(&path)),
            Catalog::builtin(),
            Language::En,
        );
        assert!(session.responses().get().is_empty());
    }
}
