//! HTTP transport seam.
//!
//! [`ApiClient`](crate::adapters::ApiClient) speaks to the backend through
//! `HttpClient`, so the REST mapping can be tested against
//! [`MockHttpClient`](crate::adapters::MockHttpClient) and run over reqwest in
//! the binary. A transport returns every response the server produced,
//! including non-2xx ones; `HttpError` only covers requests that never got an
//! answer.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Request headers, name to value.
pub type Headers = HashMap<String, String>;

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    /// Response whose body is `value` encoded as JSON.
    pub fn json_body<T: serde::Serialize>(status: u16, value: &T) -> Self {
        let body = serde_json::to_vec(value).unwrap_or_default();
        Self::new(status, Bytes::from(body))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// A request that produced no response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error: {0}")]
    Other(String),
}

/// The four verbs the content and settings endpoints use.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST a JSON body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// PUT a JSON body.
    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_encodes_value() {
        let response = Response::json_body(201, &serde_json::json!({ "data": [] }));
        assert_eq!(response.status, 201);
        assert_eq!(response.text().unwrap(), r#"{"data":[]}"#);
    }

    #[test]
    fn test_only_2xx_is_success() {
        for status in [200, 201, 204] {
            assert!(Response::new(status, Bytes::new()).is_success());
        }
        for status in [304, 404, 422, 503] {
            assert!(!Response::new(status, Bytes::new()).is_success());
        }
    }

    #[test]
    fn test_envelope_body_decodes() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Titles {
            data: Vec<String>,
        }

        let response = Response::new(200, Bytes::from(r#"{"data":["Emotion Match"]}"#));
        let parsed: Titles = response.json().unwrap();
        assert_eq!(parsed.data, vec!["Emotion Match".to_string()]);
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "Connection failed: refused"
        );
        assert_eq!(
            HttpError::InvalidUrl("no scheme".to_string()).to_string(),
            "Invalid URL: no scheme"
        );
    }
}
