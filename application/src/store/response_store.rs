//! Response store
//!
//! Holds the current quiz answers and writes the full set through to
//! [`LocalStorage`] on every change. A missing or unreadable entry at load
//! time means "no prior answers"; it is never an error.

use crate::ports::local_storage::{LocalStorage, StorageError};
use aah_domain::{AnswerValue, ResponseSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Storage key of the serialized [`ResponseSet`]
pub const QUIZ_KEY: &str = "aah_quiz";

/// Errors from persisting answers
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Could not persist answers: {0}")]
    Storage(#[from] StorageError),

    #[error("Could not serialize answers: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Current quiz answers, persisted as a flat JSON object
pub struct ResponseStore {
    storage: Arc<dyn LocalStorage>,
    responses: ResponseSet,
}

impl ResponseStore {
    /// Rehydrate answers from storage, falling back to an empty set
    pub fn load(storage: Arc<dyn LocalStorage>) -> Self {
        let responses = Self::read(storage.as_ref());
        Self { storage, responses }
    }

    fn read(storage: &dyn LocalStorage) -> ResponseSet {
        match storage.get_item(QUIZ_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<ResponseSet>(&json) {
                Ok(responses) => {
                    debug!(answers = responses.len(), "Loaded saved quiz answers");
                    responses
                }
                Err(e) => {
                    warn!(error = %e, "Saved quiz answers are unreadable, starting fresh");
                    ResponseSet::new()
                }
            },
            Ok(None) => {
                debug!("No saved quiz answers");
                ResponseSet::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read saved quiz answers, starting fresh");
                ResponseSet::new()
            }
        }
    }

    /// Current answers
    pub fn get(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn answer(&self, question_id: &str) -> Option<&AnswerValue> {
        self.responses.get(question_id)
    }

    /// Upsert one answer and persist the whole set
    ///
    /// The value is stored as given; checking it against the question is the
    /// caller's job (see [`record_answer`](crate::use_cases::quiz_flow::record_answer)).
    /// When the write fails the in-memory answers are left untouched.
    pub fn set(
        &mut self,
        question_id: impl Into<String>,
        value: impl Into<AnswerValue>,
    ) -> Result<(), StoreError> {
        let question_id = question_id.into();
        let value = value.into();
        debug!(question = %question_id, answer = %value, "Recording answer");
        let mut next = self.responses.clone();
        next.insert(question_id, value);
        self.persist(&next)?;
        self.responses = next;
        Ok(())
    }

    /// Forget every answer and remove the persisted entry
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.storage.remove_item(QUIZ_KEY)?;
        self.responses.clear();
        debug!("Cleared quiz answers");
        Ok(())
    }

    fn persist(&self, responses: &ResponseSet) -> Result<(), StoreError> {
        let json = serde_json::to_string(responses)?;
        self.storage.set_item(QUIZ_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::local_storage::MemoryStorage;

    fn storage() -> Arc<dyn LocalStorage> {
        Arc::new(MemoryStorage::new())
    }

    /// Serves saved entries but rejects every write
    struct ReadOnlyStorage(MemoryStorage);

    impl LocalStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "aah.json".to_string(),
                message: "disk full".to_string(),
            })
        }

        fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "aah.json".to_string(),
                message: "read-only file system".to_string(),
            })
        }
    }

    #[test]
    fn test_starts_empty_without_saved_state() {
        let store = ResponseStore::load(storage());
        assert!(store.get().is_empty());
    }

    #[test]
    fn test_set_persists_flat_object() {
        let storage = storage();
        let mut store = ResponseStore::load(storage.clone());
        store.set("stairs", true).unwrap();
        store.set("bathroom", "tub_shower").unwrap();

        assert_eq!(
            storage.get_item(QUIZ_KEY).unwrap().as_deref(),
            Some(r#"{"bathroom":"tub_shower","stairs":true}"#)
        );
    }

    #[test]
    fn test_reload_restores_answers() {
        let storage = storage();
        let mut store = ResponseStore::load(storage.clone());
        store.set("falls", false).unwrap();

        let reloaded = ResponseStore::load(storage);
        assert_eq!(reloaded.answer("falls"), Some(&AnswerValue::Bool(false)));
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let storage = storage();
        let mut store = ResponseStore::load(storage.clone());
        store.set("lighting", true).unwrap();
        store.clear().unwrap();

        assert!(store.get().is_empty());
        assert!(ResponseStore::load(storage.clone()).get().is_empty());
        assert_eq!(storage.get_item(QUIZ_KEY).unwrap(), None);
    }

    #[test]
    fn test_failed_write_keeps_previous_answers() {
        let storage: Arc<dyn LocalStorage> = Arc::new(ReadOnlyStorage(MemoryStorage::with_items(
            [(QUIZ_KEY, r#"{"stairs":false}"#)],
        )));
        let mut store = ResponseStore::load(storage);

        let err = store.set("stairs", true).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Io { .. })));
        assert!(store.set("falls", true).is_err());

        assert_eq!(store.answer("stairs"), Some(&AnswerValue::Bool(false)));
        assert_eq!(store.answer("falls"), None);
        assert_eq!(store.get().len(), 1);
    }

    #[test]
    fn test_failed_clear_keeps_answers() {
        let storage: Arc<dyn LocalStorage> = Arc::new(ReadOnlyStorage(MemoryStorage::with_items(
            [(QUIZ_KEY, r#"{"lighting":true}"#)],
        )));
        let mut store = ResponseStore::load(storage);

        assert!(store.clear().is_err());
        assert_eq!(store.answer("lighting"), Some(&AnswerValue::Bool(true)));
    }

    #[test]
    fn test_corrupt_state_falls_back_to_empty() {
        let storage: Arc<dyn LocalStorage> =
            Arc::new(MemoryStorage::with_items([(QUIZ_KEY, "{not json")]));
        assert!(ResponseStore::load(storage).get().is_empty());
    }

    #[test]
    fn test_wrong_shape_falls_back_to_empty() {
        let storage: Arc<dyn LocalStorage> =
            Arc::new(MemoryStorage::with_items([(QUIZ_KEY, r#"["stairs"]"#)]));
        assert!(ResponseStore::load(storage).get().is_empty());
    }

    #[test]
    fn test_stale_keys_are_kept() {
        let storage: Arc<dyn LocalStorage> = Arc::new(MemoryStorage::with_items([(
            QUIZ_KEY,
            r#"{"retired_question":true,"stairs":true}"#,
        )]));
        let store = ResponseStore::load(storage);
        assert_eq!(store.get().len(), 2);
    }
}
