//! Startup configuration types.
//!
//! `AppConfig` decides, once, where content and settings come from. Every
//! later component receives the sources built here and never looks at the
//! environment again.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::adapters::{ApiClient, CatalogContentSource, InMemorySettingsSource, ReqwestHttpClient};
use crate::traits::{ContentSource, SettingsSource};

pub const ENV_API_URL: &str = "HANAMI_API_URL";
pub const ENV_DEV: &str = "HANAMI_DEV";
pub const ENV_TIMEOUT_SECS: &str = "HANAMI_TIMEOUT_SECS";
pub const ENV_TOKEN: &str = "HANAMI_TOKEN";

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors reading configuration from the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be greater than zero")]
    ZeroTimeout { var: &'static str },

    #[error("{var} must start with http:// or https://, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Where the data sources come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSourceMode {
    /// REST backend at `api_base_url`
    #[default]
    Live,
    /// Built-in game catalog and in-memory settings, no network
    Fixture,
}

/// Application configuration.
///
/// ```ignore
/// use hanami::startup::{AppConfig, DataSourceMode};
///
/// let config = AppConfig::default()
///     .with_api_base_url("https://api.example.com")
///     .with_data_source(DataSourceMode::Live);
/// let (content, settings) = config.build_sources();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL, without a trailing slash
    pub api_base_url: String,
    pub data_source: DataSourceMode,
    /// Per-request timeout for the HTTP client
    pub request_timeout_secs: u64,
    /// Bearer token passed through to the backend
    pub auth_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            data_source: DataSourceMode::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            auth_token: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_data_source(mut self, mode: DataSourceMode) -> Self {
        self.data_source = mode;
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Read the configuration from `HANAMI_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            let url = url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl {
                    var: ENV_API_URL,
                    value: url.to_string(),
                });
            }
            config = config.with_api_base_url(url);
        }

        if lookup(ENV_DEV).is_some() {
            config = config.with_data_source(DataSourceMode::Fixture);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                var: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            if secs == 0 {
                return Err(ConfigError::ZeroTimeout {
                    var: ENV_TIMEOUT_SECS,
                });
            }
            config = config.with_request_timeout_secs(secs);
        }

        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            config = config.with_auth_token(token);
        }

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Construct the content and settings sources for this configuration.
    pub fn build_sources(&self) -> (Arc<dyn ContentSource>, Arc<dyn SettingsSource>) {
        match self.data_source {
            DataSourceMode::Fixture => {
                tracing::info!("using offline fixture data");
                let content: Arc<dyn ContentSource> = Arc::new(CatalogContentSource::new());
                let settings: Arc<dyn SettingsSource> = Arc::new(InMemorySettingsSource::new());
                (content, settings)
            }
            DataSourceMode::Live => {
                tracing::info!(url = %self.api_base_url, "using live backend");
                let http = ReqwestHttpClient::with_timeout(self.request_timeout());
                let mut api = ApiClient::new(http, self.api_base_url.clone());
                if let Some(token) = &self.auth_token {
                    api = api.with_token(token.clone());
                }
                let api = Arc::new(api);
                let content: Arc<dyn ContentSource> = api.clone();
                let settings: Arc<dyn SettingsSource> = api;
                (content, settings)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.data_source, DataSourceMode::Live);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.auth_token.is_none());
    }

    #[test]
    fn test_app_config_builder() {
        let config = AppConfig::default()
            .with_api_base_url("https://api.example.com/")
            .with_data_source(DataSourceMode::Fixture)
            .with_request_timeout_secs(5)
            .with_auth_token("abc");

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.data_source, DataSourceMode::Fixture);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.auth_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_lookup_reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://school.example.org"),
            (ENV_DEV, "1"),
            (ENV_TIMEOUT_SECS, "12"),
            (ENV_TOKEN, "t0k"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://school.example.org");
        assert_eq!(config.data_source, DataSourceMode::Fixture);
        assert_eq!(config.request_timeout_secs, 12);
        assert_eq!(config.auth_token.as_deref(), Some("t0k"));
    }

    #[test]
    fn test_dev_flag_accepts_any_value() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_DEV, "")])).unwrap();
        assert_eq!(config.data_source, DataSourceMode::Fixture);
    }

    #[test]
    fn test_invalid_timeout() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimeout {
                var: ENV_TIMEOUT_SECS,
                value: "soon".to_string()
            }
        );

        let err = AppConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "0")])).unwrap_err();
        assert_eq!(err, ConfigError::ZeroTimeout { var: ENV_TIMEOUT_SECS });
    }

    #[test]
    fn test_invalid_url() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_API_URL, "localhost:3000")])).unwrap_err();
        assert!(err.to_string().contains("HANAMI_API_URL"));
    }

    #[tokio::test]
    async fn test_fixture_sources_work_offline() {
        let config = AppConfig::default().with_data_source(DataSourceMode::Fixture);
        let (content, settings) = config.build_sources();

        let items = content
            .list_content(&crate::models::ContentQuery::new())
            .await
            .unwrap();
        assert!(!items.is_empty());
        assert!(settings.fetch_settings().await.is_ok());
    }
}
