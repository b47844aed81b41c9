//! Recording `HttpClient` for adapter tests.
//!
//! Responses are keyed by URL. A key also answers any URL it is a prefix of,
//! longest key first, so `/api/content` covers `/api/content?type=game`
//! while `/api/content/game-2` can still be answered separately.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One request as the client received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub headers: Headers,
    /// JSON body of POST and PUT
    pub body: Option<String>,
}

/// What the mock answers for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, MockResponse>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

/// In-memory HTTP client. Clones share responses and recorded requests.
///
/// ```ignore
/// let http = MockHttpClient::new();
/// http.set_response(
///     "http://api.test/api/teacher/settings",
///     MockResponse::Success(Response::json_body(200, &json!({ "data": settings }))),
/// );
/// let api = ApiClient::new(http.clone(), "http://api.test");
/// api.fetch_settings().await?;
/// assert_eq!(http.requests_with_method("GET").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Arc<Mutex<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.lock().responses.insert(url.to_string(), response);
    }

    /// Answer for URLs no configured key matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.lock().fallback = Some(response);
    }

    /// Every request so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn handle(
        &self,
        method: &'static str,
        url: &str,
        headers: &Headers,
        body: Option<&str>,
    ) -> Result<Response, HttpError> {
        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(str::to_string),
        });

        let matched = state.responses.get(url).or_else(|| {
            state
                .responses
                .iter()
                .filter(|(key, _)| url.starts_with(key.as_str()))
                .max_by_key(|(key, _)| key.len())
                .map(|(_, response)| response)
        });
        match matched.or(state.fallback.as_ref()) {
            Some(MockResponse::Success(response)) => Ok(response.clone()),
            Some(MockResponse::Error(err)) => Err(err.clone()),
            None => Err(HttpError::Other(format!("no mock response for {} {}", method, url))),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, headers, None)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, headers, Some(body))
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("PUT", url, headers, Some(body))
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, headers, None)
    }
}
