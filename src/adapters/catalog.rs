//! Offline content source backed by the predefined games catalog.
//!
//! Used in fixture mode so the listing, editor and seeding flows work with
//! no backend. Items get ids `game-1`, `game-2`, ..., are published at
//! version 1 and are owned by `admin`. Creates, updates and deletes are kept
//! in memory for the lifetime of the source.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::catalog::{PredefinedGame, PREDEFINED_GAMES};
use crate::error::{HanamiError, HanamiResult, NetworkError};
use crate::models::{Content, ContentPatch, ContentQuery, NewContent};
use crate::traits::ContentSource;

const FIXTURE_OWNER: &str = "admin";

#[derive(Debug, Default)]
struct CatalogState {
    items: Vec<Content>,
    next_id: usize,
    created_by_key: HashMap<String, String>,
}

/// In-memory [`ContentSource`] seeded from a game catalog.
#[derive(Debug, Clone)]
pub struct CatalogContentSource {
    state: Arc<Mutex<CatalogState>>,
}

impl CatalogContentSource {
    /// Seed from the built-in predefined games.
    pub fn new() -> Self {
        Self::from_games(&PREDEFINED_GAMES)
    }

    pub fn from_games(games: &[PredefinedGame]) -> Self {
        let items: Vec<Content> = games
            .iter()
            .enumerate()
            .map(|(i, game)| game.to_content(i))
            .collect();
        Self::from_items(items)
    }

    /// Seed with arbitrary items, e.g. a server state under test.
    pub fn from_items(items: Vec<Content>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|item| item.id.strip_prefix("game-")?.parse::<usize>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: Arc::new(Mutex::new(CatalogState {
                items,
                next_id,
                created_by_key: HashMap::new(),
            })),
        }
    }

    /// An empty source.
    pub fn empty() -> Self {
        Self::from_items(Vec::new())
    }

    /// Snapshot of everything currently stored.
    pub fn items(&self) -> Vec<Content> {
        self.lock().items.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CatalogState> {
        // A poisoned lock only means a test panicked mid-write; the data is
        // still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn insert(state: &mut CatalogState, content: &NewContent) -> Content {
        let id = format!("game-{}", state.next_id);
        state.next_id += 1;
        let item = content.clone().into_content(id, FIXTURE_OWNER);
        state.items.push(item.clone());
        item
    }

    fn not_found(id: &str) -> HanamiError {
        NetworkError::HttpStatus {
            status: 404,
            message: format!("Content {} not found", id),
        }
        .into()
    }
}

impl Default for CatalogContentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for CatalogContentSource {
    async fn list_content(&self, query: &ContentQuery) -> HanamiResult<Vec<Content>> {
        let state = self.lock();
        Ok(state
            .items
            .iter()
            .filter(|item| query.matches(item))
            .cloned()
            .collect())
    }

    async fn create_content(&self, content: &NewContent) -> HanamiResult<Content> {
        let mut state = self.lock();
        Ok(Self::insert(&mut state, content))
    }

    async fn create_content_once(
        &self,
        content: &NewContent,
        idempotency_key: &str,
    ) -> HanamiResult<Content> {
        let mut state = self.lock();
        if let Some(id) = state.created_by_key.get(idempotency_key).cloned() {
            if let Some(existing) = state.items.iter().find(|item| item.id == id) {
                tracing::debug!(key = idempotency_key, %id, "replaying idempotent create");
                return Ok(existing.clone());
            }
        }
        let item = Self::insert(&mut state, content);
        state
            .created_by_key
            .insert(idempotency_key.to_string(), item.id.clone());
        Ok(item)
    }

    async fn update_content(&self, id: &str, patch: &ContentPatch) -> HanamiResult<Content> {
        let mut state = self.lock();
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        patch.apply_to(item);
        Ok(item.clone())
    }

    async fn delete_content(&self, id: &str) -> HanamiResult<()> {
        let mut state = self.lock();
        let before = state.items.len();
        state.items.retain(|item| item.id != id);
        if state.items.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
