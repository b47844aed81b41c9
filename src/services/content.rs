//! Content listing and CRUD with loading/error state.
//!
//! Listing never fails: a fetch error becomes an empty list plus a message in
//! [`ContentService::error`]. An empty result is therefore ambiguous and
//! callers have to check the error slot to tell "no matches" from "fetch
//! failed". Create, update and delete record the message and also return the
//! error.

use std::sync::Arc;

use crate::error::{describe, HanamiResult};
use crate::models::{Content, ContentPatch, ContentQuery, NewContent};
use crate::traits::ContentSource;

pub struct ContentService {
    source: Arc<dyn ContentSource>,
    is_loading: bool,
    error: Option<String>,
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            is_loading: false,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message from the most recent failed call, cleared when a call starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> Arc<dyn ContentSource> {
        Arc::clone(&self.source)
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn finish<T>(&mut self, result: HanamiResult<T>, fallback: &str) -> HanamiResult<T> {
        self.is_loading = false;
        if let Err(ref err) = result {
            tracing::warn!(code = err.error_code(), "{}: {}", fallback, err);
            self.error = Some(describe(err, fallback));
        }
        result
    }

    /// List items matching `query`, or an empty list if the fetch failed.
    pub async fn list_content(&mut self, query: &ContentQuery) -> Vec<Content> {
        self.begin();
        let result = self.source.list_content(query).await;
        self.finish(result, "Failed to fetch content")
            .unwrap_or_default()
    }

    pub async fn create_content(&mut self, content: &NewContent) -> HanamiResult<Content> {
        self.begin();
        let result = self.source.create_content(content).await;
        self.finish(result, "Failed to create content")
    }

    pub async fn update_content(
        &mut self,
        id: &str,
        patch: &ContentPatch,
    ) -> HanamiResult<Content> {
        self.begin();
        let result = self.source.update_content(id, patch).await;
        self.finish(result, "Failed to update content")
    }

    pub async fn delete_content(&mut self, id: &str) -> HanamiResult<()> {
        self.begin();
        let result = self.source.delete_content(id).await;
        self.finish(result, "Failed to delete content")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::adapters::{ApiClient, CatalogContentSource};
    use crate::traits::HttpError;

    fn failing_service() -> ContentService {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        ContentService::new(Arc::new(ApiClient::new(http, "http://api.test")))
    }

    #[tokio::test]
    async fn test_list_failure_swallowed_into_empty_result() {
        let mut service = failing_service();

        let items = service.list_content(&ContentQuery::new()).await;

        assert!(items.is_empty());
        assert!(service.error().is_some());
        assert!(!service.is_loading());
    }

    #[tokio::test]
    async fn test_error_cleared_on_next_success() {
        let mut service = ContentService::new(Arc::new(CatalogContentSource::new()));
        service.error = Some("stale".to_string());

        let items = service.list_content(&ContentQuery::new()).await;

        assert!(!items.is_empty());
        assert!(service.error().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_item_propagates() {
        let mut service = ContentService::new(Arc::new(CatalogContentSource::empty()));

        let result = service.delete_content("game-99").await;

        assert!(result.is_err());
        assert_eq!(service.error(), Some("Content game-99 not found"));
        assert!(!service.is_loading());
    }
}
