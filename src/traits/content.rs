//! Content data-source trait abstraction.
//!
//! The content listing and the games loader talk to a `ContentSource`
//! instead of the network directly. Which implementation is used (the HTTP
//! API or the offline catalog) is decided once, when the application is
//! assembled.

use async_trait::async_trait;

use crate::error::HanamiResult;
use crate::models::{Content, ContentPatch, ContentQuery, NewContent};

/// Trait for reading and writing content items.
///
/// # Example
///
/// ```ignore
/// use hanami::traits::ContentSource;
/// use hanami::models::{ContentQuery, ContentType};
///
/// async fn game_titles<S: ContentSource>(source: &S) -> Vec<String> {
///     let query = ContentQuery::new().with_type(ContentType::Game);
///     source
///         .list_content(&query)
///         .await
///         .map(|items| items.into_iter().map(|c| c.title).collect())
///         .unwrap_or_default()
/// }
/// ```
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List items matching the query.
    async fn list_content(&self, query: &ContentQuery) -> HanamiResult<Vec<Content>>;

    /// Create an item and return it as stored.
    async fn create_content(&self, content: &NewContent) -> HanamiResult<Content>;

    /// Create an item at most once per `idempotency_key`.
    ///
    /// Sources that cannot enforce the key fall back to a plain create.
    async fn create_content_once(
        &self,
        content: &NewContent,
        idempotency_key: &str,
    ) -> HanamiResult<Content> {
        let _ = idempotency_key;
        self.create_content(content).await
    }

    /// Apply a partial update and return the stored item.
    async fn update_content(&self, id: &str, patch: &ContentPatch) -> HanamiResult<Content>;

    /// Delete an item.
    async fn delete_content(&self, id: &str) -> HanamiResult<()>;
}
