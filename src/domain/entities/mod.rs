//! Core domain entities representing the business data model.
//!
//! The service persists exactly one kind of record, [`UrlMapping`]. Entities are
//! plain data structures without business logic.

pub mod url_mapping;

pub use url_mapping::UrlMapping;
