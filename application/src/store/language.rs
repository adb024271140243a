//! Persisted language preference

use crate::ports::local_storage::{LocalStorage, StorageError};
use aah_domain::Language;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key of the language code
pub const LANGUAGE_KEY: &str = "aah_language";

/// The user's chosen UI language
pub struct LanguagePreference {
    storage: Arc<dyn LocalStorage>,
    language: Language,
}

impl LanguagePreference {
    /// Load the saved language, or use `default` when none is saved or it is unreadable
    pub fn load(storage: Arc<dyn LocalStorage>, default: Language) -> Self {
        let language = match storage.get_item(LANGUAGE_KEY) {
            Ok(Some(code)) => code.parse::<Language>().unwrap_or_else(|e| {
                warn!(error = %e, "Ignoring saved language");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!(error = %e, "Failed to read saved language");
                default
            }
        };
        debug!(language = %language, "Language selected");
        Self { storage, language }
    }

    pub fn get(&self) -> Language {
        self.language
    }

    /// Switch language and persist the choice
    ///
    /// The current language only changes once the write succeeds.
    pub fn set(&mut self, language: Language) -> Result<(), StorageError> {
        self.storage.set_item(LANGUAGE_KEY, language.code())?;
        self.language = language;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::local_storage::MemoryStorage;

    /// Storage whose writes always fail
    struct FailingStorage;

    impl LocalStorage for FailingStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: key.to_string(),
                message: "permission denied".to_string(),
            })
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_default_when_absent() {
        let pref = LanguagePreference::load(Arc::new(MemoryStorage::new()), Language::Es);
        assert_eq!(pref.get(), Language::Es);
    }

    #[test]
    fn test_saved_language_wins_over_default() {
        let storage = Arc::new(MemoryStorage::with_items([(LANGUAGE_KEY, "es")]));
        let pref = LanguagePreference::load(storage, Language::En);
        assert_eq!(pref.get(), Language::Es);
    }

    #[test]
    fn test_unknown_code_falls_back() {
        let storage = Arc::new(MemoryStorage::with_items([(LANGUAGE_KEY, "fr")]));
        let pref = LanguagePreference::load(storage, Language::En);
        assert_eq!(pref.get(), Language::En);
    }

    #[test]
    fn test_set_persists() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::new());
        let mut pref = LanguagePreference::load(storage.clone(), Language::En);
        pref.set(Language::Es).unwrap();

        assert_eq!(storage.get_item(LANGUAGE_KEY).unwrap().as_deref(), Some("es"));
        assert_eq!(
            LanguagePreference::load(storage, Language::En).get(),
            Language::Es
        );
    }

    #[test]
    fn test_failed_write_keeps_language() {
        let mut pref = LanguagePreference::load(Arc::new(FailingStorage), Language::En);
        assert!(matches!(
            pref.set(Language::Es),
            Err(StorageError::Io { .. })
        ));
        assert_eq!(pref.get(), Language::En);
    }
}
