//! Domain layer containing business entities and the mapping protocol.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`mapping_store`] - Find-or-create protocol over a repository
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented by the infrastructure layer.

pub mod entities;
pub mod mapping_store;
pub mod repositories;

pub use mapping_store::MappingStore;
