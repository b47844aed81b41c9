//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, PUT, DELETE)
//! - [`ContentSource`] - Content listing and creation
//! - [`SettingsSource`] - Teacher settings read/write

pub mod content;
pub mod http;
pub mod settings;

pub use content::ContentSource;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use settings::SettingsSource;
