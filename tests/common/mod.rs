//! Common test utilities for integration tests.
//!
//! Offline sources, app construction and buffer helpers shared by the
//! integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//!
//! let app = common::offline_app();
//! let text = common::render_app(&app, 120, 40);
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use hanami::adapters::{CatalogContentSource, InMemorySettingsSource};
use hanami::app::App;
use hanami::catalog::PREDEFINED_GAMES;
use hanami::models::Content;
use ratatui::{backend::TestBackend, Terminal};

/// App over the full offline catalog and default settings.
pub fn offline_app() -> App {
    App::new(
        Arc::new(CatalogContentSource::new()),
        Arc::new(InMemorySettingsSource::new()),
    )
}

/// App whose settings source can be inspected or made to fail.
pub fn app_with_settings(settings: Arc<InMemorySettingsSource>) -> App {
    App::new(Arc::new(CatalogContentSource::new()), settings)
}

/// The first `n` catalog games as server-side content.
pub fn catalog_items(n: usize) -> Vec<Content> {
    PREDEFINED_GAMES
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, g)| g.to_content(i))
        .collect()
}

/// JSON body the backend sends for a content list.
pub fn content_list_body(items: &[Content]) -> serde_json::Value {
    serde_json::json!({ "data": items })
}

/// Draw the whole app and return the buffer as one string.
pub fn render_app(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal
        .draw(|f| hanami::ui::render(f, app))
        .expect("draw");
    buffer_text(&terminal)
}

pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
