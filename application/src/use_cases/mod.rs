//! Use cases
//!
//! - [`quiz_flow`] — step through the quiz and record answers
//! - [`build_report`] — personalized recommendations and action plan
//! - [`search_resources`] — resource directory search

pub mod build_report;
pub mod quiz_flow;
pub mod search_resources;
