//! Core domain concepts shared across all subdomains.
//!
//! - [`language::Language`] — the two supported UI languages
//! - [`language::LocalizedText`] — an English/Spanish string pair
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod language;
