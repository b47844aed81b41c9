//! Key-driven flows through the whole app, checked on the rendered screen.

mod common;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hanami::adapters::InMemorySettingsSource;
use hanami::app::Screen;
use hanami::view_state::DashboardView;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn alt(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)
}

async fn type_text(app: &mut hanami::app::App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c))).await;
    }
}

#[tokio::test]
async fn library_search_refetches_and_shows_no_matches() {
    let mut app = common::offline_app();
    app.initialize().await;

    type_text(&mut app, "zzzz").await;
    assert!(app.library_needs_fetch());
    app.refresh_library().await;

    let text = common::render_app(&app, 120, 30);
    assert!(text.contains("No content matches your search"));
}

#[tokio::test]
async fn library_delete_removes_selected_item() {
    let mut app = common::offline_app();
    app.initialize().await;
    let first = app.library.items[0].title.clone();

    app.handle_key_event(key(KeyCode::Delete)).await;
    assert_eq!(
        app.library.notice.as_deref(),
        Some(format!("Deleted \"{}\"", first).as_str())
    );
    app.refresh_library().await;
    assert!(app.library.items.iter().all(|item| item.title != first));
}

#[tokio::test]
async fn settings_save_failure_is_shown() {
    let settings = Arc::new(InMemorySettingsSource::new());
    let mut app = common::app_with_settings(settings.clone());
    app.initialize().await;
    app.handle_key_event(key(KeyCode::F(2))).await;

    settings.fail_with("Settings service is down");
    app.handle_key_event(key(KeyCode::Char(' '))).await;
    app.handle_key_event(ctrl('s')).await;

    let text = common::render_app(&app, 120, 30);
    assert!(text.contains("Settings service is down"));
    assert!(settings.updates().is_empty());
}

#[tokio::test]
async fn editor_requires_every_selected_translation() {
    let mut app = common::offline_app();
    app.handle_key_event(key(KeyCode::F(4))).await;
    assert_eq!(app.screen, Screen::Editor);

    type_text(&mut app, "Kindness chain").await;
    app.handle_key_event(key(KeyCode::Tab)).await;
    type_text(&mut app, "Link paper rings").await;
    app.handle_key_event(alt('2')).await;
    app.handle_key_event(ctrl('s')).await;

    assert_eq!(
        app.content_editor.error(),
        Some("Title in Japanese is required")
    );
    let text = common::render_app(&app, 120, 40);
    assert!(text.contains("Title in Japanese is required"));
    assert!(app.activities.is_empty());
}

#[tokio::test]
async fn student_edit_keeps_access_code() {
    let mut app = common::offline_app();
    app.handle_key_event(key(KeyCode::F(3))).await;
    app.handle_key_event(key(KeyCode::Char('n'))).await;
    type_text(&mut app, "Mei").await;
    app.handle_key_event(key(KeyCode::Tab)).await;
    app.handle_key_event(key(KeyCode::Right)).await;
    app.handle_key_event(key(KeyCode::Enter)).await;

    let code = app.roster.students()[0].access_code.clone();
    assert!(code.is_some());

    app.handle_key_event(key(KeyCode::Enter)).await;
    assert!(app.student_modal.is_open());
    app.handle_key_event(key(KeyCode::Char('!'))).await;
    app.handle_key_event(key(KeyCode::Enter)).await;

    let student = &app.roster.students()[0];
    assert_eq!(student.name, "Mei!");
    assert_eq!(student.access_code, code);
    assert_eq!(app.roster.students().len(), 1);
}

#[tokio::test]
async fn dashboard_journal_and_path() {
    let mut app = common::offline_app();
    app.handle_key_event(key(KeyCode::F(5))).await;

    type_text(&mut app, "Shared my lunch").await;
    app.handle_key_event(key(KeyCode::Enter)).await;
    let text = common::render_app(&app, 120, 40);
    assert!(text.contains("Your Comic"));
    assert!(text.contains("Shared my lunch"));

    app.handle_key_event(key(KeyCode::Esc)).await;
    app.handle_key_event(ctrl('p')).await;
    assert_eq!(app.dashboard.view(), DashboardView::Path);
    app.handle_key_event(key(KeyCode::Esc)).await;
    assert_eq!(app.dashboard.view(), DashboardView::Dashboard);
}
