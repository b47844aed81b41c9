//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - `AppConfig`, read from the environment, builds the data sources
//! - [`logging`] - tracing subscriber writing to the log file
//!
//! # Usage
//!
//! ```ignore
//! use hanami::startup::{init_logging, AppConfig};
//!
//! init_logging();
//! let config = AppConfig::from_env()?;
//! let (content, settings) = config.build_sources();
//! ```

pub mod config;
pub mod logging;

pub use config::{AppConfig, ConfigError, DataSourceMode};
pub use logging::init_logging;
