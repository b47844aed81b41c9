//! Hanami - terminal client for the Hanami social-emotional learning platform
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod forms;
pub mod models;
pub mod services;
pub mod startup;
pub mod traits;
pub mod ui;
pub mod view_state;
