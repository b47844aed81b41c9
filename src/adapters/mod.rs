//! Concrete implementations of trait abstractions.
//!
//! This module provides the adapters that implement the traits defined in
//! `crate::traits`. Which content and settings adapters the application uses
//! is chosen once, at construction time (see `startup::AppConfig`).
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ApiClient`] - REST content and settings source over any `HttpClient`
//! - [`CatalogContentSource`] - Offline content source seeded from the game catalog
//! - [`InMemorySettingsSource`] - Settings store with server-style merging
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses with request recording

pub mod api;
pub mod catalog;
pub mod memory_settings;
pub mod mock;
pub mod reqwest_http;

pub use api::{ApiClient, IDEMPOTENCY_HEADER};
pub use catalog::CatalogContentSource;
pub use memory_settings::InMemorySettingsSource;
pub use mock::MockHttpClient;
pub use reqwest_http::ReqwestHttpClient;
