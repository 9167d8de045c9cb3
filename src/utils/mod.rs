//! Utility functions for code generation, URL validation, and storage error handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Syntactic validation of submitted URLs
//! - [`db_error`] - PostgreSQL unique-violation classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
