//! Resource directory domain
//!
//! - [`record::ResourceRecord`] — an organization with contact details and service area
//! - [`filter::filter_resources`] — search by name/postal code and category

pub mod filter;
pub mod record;

pub use filter::filter_resources;
pub use record::{ContactInfo, ResourceCategory, ResourceRecord};
