//! Session state persisted in local storage
//!
//! Two independent entries: the language code under [`LANGUAGE_KEY`] and
//! the quiz answers under [`QUIZ_KEY`].

pub mod language;
pub mod response_store;

pub use language::{LANGUAGE_KEY, LanguagePreference};
pub use response_store::{QUIZ_KEY, ResponseStore, StoreError};
