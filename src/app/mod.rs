//! Application state and logic for the Hanami terminal client.
//!
//! `App` owns one instance of every form and view state plus the services
//! that talk to the injected data sources. Key handling lives in
//! [`handlers`]; the operations that reach a data source are the async
//! methods below. Each is awaited from the event loop before the next key is
//! read, so no two requests from the same screen overlap.

mod handlers;
mod types;

pub use types::Screen;

use std::sync::Arc;

use crate::catalog::PREDEFINED_GAMES;
use crate::forms::{ContentEditor, SettingsEditor, StudentModal};
use crate::models::{ParentContentPayload, TeacherSettings};
use crate::services::{load_predefined_games, ContentService, SettingsService};
use crate::traits::{ContentSource, SettingsSource};
use crate::view_state::{EditorField, LibraryState, RosterState, StudentDashboardState};

/// Main application state
pub struct App {
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes; cleared after each draw
    pub needs_redraw: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,

    pub library: LibraryState,
    pub settings_editor: SettingsEditor,
    pub roster: RosterState,
    pub student_modal: StudentModal,
    pub content_editor: ContentEditor,
    pub editor_focus: EditorField,
    /// Activities saved from the editor this session
    pub activities: Vec<ParentContentPayload>,
    pub dashboard: StudentDashboardState,

    content: ContentService,
    settings: SettingsService,
}

impl App {
    /// Create an app over the given data sources. Nothing is fetched until
    /// [`App::initialize`] runs.
    pub fn new(content: Arc<dyn ContentSource>, settings: Arc<dyn SettingsSource>) -> Self {
        Self {
            screen: Screen::default(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            library: LibraryState::new(),
            settings_editor: SettingsEditor::new(TeacherSettings::default()),
            roster: RosterState::new(),
            student_modal: StudentModal::new(),
            content_editor: ContentEditor::new(),
            editor_focus: EditorField::default(),
            activities: Vec::new(),
            dashboard: StudentDashboardState::new(),
            content: ContentService::new(content),
            settings: SettingsService::new(settings),
        }
    }

    /// Load the teacher settings and the first page of content.
    pub async fn initialize(&mut self) {
        self.load_settings().await;
        self.refresh_library().await;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = self.screen.id(), to = screen.id(), "switching screen");
            self.screen = screen;
            self.mark_dirty();
        }
    }

    /// The library's search or filter changed since the last fetch.
    pub fn library_needs_fetch(&self) -> bool {
        self.library.stale
    }

    /// Whether a content request is in flight.
    pub fn is_loading(&self) -> bool {
        self.content.is_loading() || self.settings.is_loading()
    }

    // ========================================================================
    // Data source operations
    // ========================================================================

    /// Fetch the library for the current search and filter. A failure
    /// leaves an empty list with the error set.
    pub async fn refresh_library(&mut self) {
        let query = self.library.query();
        let items = self.content.list_content(&query).await;
        let error = self.content.error().map(str::to_string);
        self.library.set_results(items, error);
        self.mark_dirty();
    }

    /// Create any predefined games the backend does not have yet.
    pub async fn seed_games(&mut self) {
        let source = self.content.source();
        let notice = match load_predefined_games(source.as_ref(), &PREDEFINED_GAMES).await {
            Ok(count) => format!("Loaded {} predefined games", count),
            Err(err) => crate::error::describe(&err, "Failed to load predefined games"),
        };
        self.library.notice = Some(notice);
        self.library.stale = true;
        self.mark_dirty();
    }

    /// Delete the selected library item.
    pub async fn delete_selected_content(&mut self) {
        let Some(item) = self.library.selected_item().cloned() else {
            return;
        };
        match self.content.delete_content(&item.id).await {
            Ok(()) => {
                tracing::info!(id = %item.id, "deleted content");
                self.library.notice = Some(format!("Deleted \"{}\"", item.title));
                self.library.stale = true;
            }
            Err(_) => {
                self.library.notice = self.content.error().map(str::to_string);
            }
        }
        self.mark_dirty();
    }

    /// Replace the settings editor with a fresh fetch. Defaults are shown
    /// when the fetch fails.
    pub async fn load_settings(&mut self) {
        let settings = self.settings.get_settings().await;
        let tab = self.settings_editor.tab();
        self.settings_editor = SettingsEditor::new(settings);
        self.settings_editor.set_tab(tab);
        self.mark_dirty();
    }

    /// Send the whole settings draft.
    pub async fn save_settings(&mut self) {
        let service = &mut self.settings;
        let result = self
            .settings_editor
            .submit(|update| async move { service.update_settings(&update).await })
            .await;
        if result.is_ok() {
            tracing::info!("settings saved");
        }
        self.mark_dirty();
    }

    /// Submit the student modal, recording the student in the roster.
    pub async fn save_student(&mut self) {
        let editing = self.student_modal.editing().map(|s| s.id.clone());
        let roster = &mut self.roster;
        let result = self
            .student_modal
            .submit(|form| async move {
                roster.save(editing.as_deref(), form);
                Ok(())
            })
            .await;
        if result.is_ok() {
            tracing::info!(students = self.roster.students().len(), "student saved");
        }
        self.mark_dirty();
    }

    /// Submit the content editor. A saved activity is kept for the session
    /// and the editor starts over.
    pub async fn save_activity(&mut self) {
        let activities = &mut self.activities;
        let result = self
            .content_editor
            .submit(|payload| async move {
                activities.push(payload);
                Ok(())
            })
            .await;
        if result.is_ok() {
            tracing::info!(saved = self.activities.len(), "activity saved");
            self.content_editor = ContentEditor::new();
            self.editor_focus = EditorField::default();
        }
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CatalogContentSource, InMemorySettingsSource};
    use crate::forms::StudentField;

    fn app() -> (App, Arc<InMemorySettingsSource>) {
        let settings = Arc::new(InMemorySettingsSource::new());
        let app = App::new(Arc::new(CatalogContentSource::new()), settings.clone());
        (app, settings)
    }

    #[tokio::test]
    async fn test_initialize_loads_library() {
        let (mut app, _) = app();
        assert!(app.library_needs_fetch());
        app.initialize().await;

        assert!(!app.library_needs_fetch());
        assert_eq!(app.library.items.len(), PREDEFINED_GAMES.len());
        assert!(app.library.error.is_none());
    }

    #[tokio::test]
    async fn test_save_settings_sends_draft() {
        let (mut app, source) = app();
        app.initialize().await;
        app.settings_editor.activate(0);
        app.save_settings().await;

        assert!(app.settings_editor.saved());
        assert_eq!(source.updates().len(), 1);
        assert!(!source.settings().notifications.email);
    }

    #[tokio::test]
    async fn test_failed_settings_save_keeps_draft() {
        let (mut app, source) = app();
        app.initialize().await;
        source.fail_with("Server unavailable");
        app.settings_editor.activate(0);
        app.save_settings().await;

        assert_eq!(app.settings_editor.error(), Some("Server unavailable"));
        assert!(app.settings_editor.is_dirty());
    }

    #[tokio::test]
    async fn test_save_student_records_in_roster() {
        let (mut app, _) = app();
        app.student_modal.open_new();
        app.student_modal.set(StudentField::Name, "Aiko");
        app.student_modal.cycle_grade();
        app.save_student().await;

        assert!(!app.student_modal.is_open());
        assert_eq!(app.roster.students().len(), 1);
        assert_eq!(app.roster.students()[0].grade, "1st");
    }

    #[tokio::test]
    async fn test_seed_games_reports_nothing_new() {
        let (mut app, _) = app();
        app.seed_games().await;
        assert_eq!(
            app.library.notice.as_deref(),
            Some("Loaded 0 predefined games")
        );
        assert!(app.library_needs_fetch());
    }
}
