//! Seeds the predefined game catalog into a content source.
//!
//! Existing games are fetched once and compared by exact title; only missing
//! titles are created. The check and the create are separate calls, so each
//! create carries an idempotency key derived from the title and a second
//! concurrent run cannot produce a duplicate on a backend that honours it.

use std::collections::HashSet;

use crate::catalog::PredefinedGame;
use crate::error::{ErrorContext, HanamiError, HanamiResult};
use crate::models::{ContentQuery, ContentType};
use crate::traits::ContentSource;

const FAILURE_MESSAGE: &str = "Failed to load predefined games";

/// Idempotency key for a catalog title: `predefined-game:<slug>`.
pub fn idempotency_key(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    format!("predefined-game:{}", slug)
}

/// Create every game in `catalog` whose title does not exist yet.
///
/// Returns how many were created. Any failure aborts the run; games created
/// before the failure stay created.
pub async fn load_predefined_games(
    source: &dyn ContentSource,
    catalog: &[PredefinedGame],
) -> HanamiResult<usize> {
    match seed(source, catalog).await {
        Ok(created) => {
            tracing::info!("Loaded {} predefined games", created);
            Ok(created)
        }
        Err(err) => {
            tracing::error!(code = err.error_code(), "{}: {}", FAILURE_MESSAGE, err);
            Err(HanamiError::failed(FAILURE_MESSAGE, err).with_context(
                ErrorContext::new("load_predefined_games").with_component("games_loader"),
            ))
        }
    }
}

async fn seed(source: &dyn ContentSource, catalog: &[PredefinedGame]) -> HanamiResult<usize> {
    let existing = source
        .list_content(&ContentQuery::new().with_type(ContentType::Game))
        .await?;
    let mut seen: HashSet<String> = existing.into_iter().map(|c| c.title).collect();

    let mut created = 0;
    for game in catalog {
        if !seen.insert(game.title.to_string()) {
            continue;
        }
        let key = idempotency_key(game.title);
        tracing::debug!(title = game.title, %key, "creating predefined game");
        source
            .create_content_once(&game.to_new_content(), &key)
            .await?;
        created += 1;
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CatalogContentSource;
    use crate::catalog::PREDEFINED_GAMES;
    use crate::error::NetworkError;
    use crate::models::{Content, ContentPatch, ContentStatus, NewContent};
    use async_trait::async_trait;

    /// Backend that is down for every call.
    struct DownSource;

    impl DownSource {
        fn down() -> HanamiError {
            NetworkError::HttpStatus {
                status: 503,
                message: "db down".to_string(),
            }
            .into()
        }
    }

    #[async_trait]
    impl ContentSource for DownSource {
        async fn list_content(&self, _query: &ContentQuery) -> HanamiResult<Vec<Content>> {
            Err(Self::down())
        }

        async fn create_content(&self, _content: &NewContent) -> HanamiResult<Content> {
            Err(Self::down())
        }

        async fn update_content(&self, _id: &str, _patch: &ContentPatch) -> HanamiResult<Content> {
            Err(Self::down())
        }

        async fn delete_content(&self, _id: &str) -> HanamiResult<()> {
            Err(Self::down())
        }
    }

    #[test]
    fn test_idempotency_key_slug() {
        assert_eq!(
            idempotency_key("Breathing Bubbles"),
            "predefined-game:breathing-bubbles"
        );
        assert_eq!(
            idempotency_key("  Kindness -- Garden! "),
            "predefined-game:kindness-garden"
        );
    }

    #[tokio::test]
    async fn test_creates_only_missing_titles() {
        let catalog = &PREDEFINED_GAMES[..3];
        let source = CatalogContentSource::from_items(vec![catalog[1].to_content(0)]);

        let created = load_predefined_games(&source, catalog).await.unwrap();

        assert_eq!(created, 2);
        let items = source.items();
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|c| c.status == ContentStatus::Published));
    }

    #[tokio::test]
    async fn test_second_run_creates_nothing() {
        let source = CatalogContentSource::empty();

        let first = load_predefined_games(&source, &PREDEFINED_GAMES).await.unwrap();
        let second = load_predefined_games(&source, &PREDEFINED_GAMES).await.unwrap();

        assert_eq!(first, PREDEFINED_GAMES.len());
        assert_eq!(second, 0);
    }

    #[tokio::test]
    async fn test_duplicate_titles_in_catalog_created_once() {
        let game = PREDEFINED_GAMES[0].clone();
        let catalog = vec![game.clone(), game];
        let source = CatalogContentSource::empty();

        let created = load_predefined_games(&source, &catalog).await.unwrap();

        assert_eq!(created, 1);
        assert_eq!(source.items().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_cause() {
        let err = load_predefined_games(&DownSource, &PREDEFINED_GAMES)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), FAILURE_MESSAGE);
        assert_eq!(err.context().unwrap().operation, "load_predefined_games");
        assert!(matches!(
            err.cause(),
            Some(HanamiError::Network(NetworkError::HttpStatus { status: 503, .. }))
        ));
        assert!(err.to_string().contains("db down"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
