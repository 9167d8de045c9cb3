//! Application layer services implementing business logic.
//!
//! Services coordinate validation and domain operations and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - URL shortening and resolution

pub mod services;
