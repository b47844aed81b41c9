//! Keyboard handling for the App.
//!
//! Global keys are handled first; everything else is routed to the active
//! screen. Handlers that reach a data source are awaited inline.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::forms::FieldValue;
use crate::models::{ContentStatus, Language, ParentContentType};
use crate::view_state::{DashboardView, EditorField};

use super::{App, Screen};

/// Plain text input: no Ctrl/Alt/Super held.
fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl App {
    /// Handle one key event. Release and repeat events are ignored.
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if is_ctrl(&key, 'c') {
            self.quit();
            return;
        }
        if let KeyCode::F(n) = key.code {
            if let Some(screen) = Screen::from_function_key(n) {
                self.navigate_to(screen);
            }
            return;
        }

        match self.screen {
            Screen::Library => self.handle_library_key(key).await,
            Screen::Settings => self.handle_settings_key(key).await,
            Screen::Students => self.handle_students_key(key).await,
            Screen::Editor => self.handle_editor_key(key).await,
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    async fn handle_library_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 'g') {
            self.seed_games().await;
            return;
        }
        match key.code {
            KeyCode::Delete => self.delete_selected_content().await,
            KeyCode::Tab => self.library.cycle_type_filter(),
            KeyCode::Up => self.library.select_prev(),
            KeyCode::Down => self.library.select_next(),
            KeyCode::Backspace => self.library.pop_search_char(),
            KeyCode::Esc => self.library.notice = None,
            KeyCode::Char(c) if is_plain(&key) => self.library.push_search_char(c),
            _ => {}
        }
    }

    async fn handle_settings_key(&mut self, key: KeyEvent) {
        if is_ctrl(&key, 's') {
            self.save_settings().await;
            return;
        }
        let editor = &mut self.settings_editor;
        let index = editor.selected();
        let selected_text = match editor.fields().get(index).map(|f| f.value.clone()) {
            Some(FieldValue::Text(text)) => Some(text),
            _ => None,
        };

        match key.code {
            KeyCode::Left => editor.prev_tab(),
            KeyCode::Right => editor.next_tab(),
            KeyCode::Up => editor.select_prev(),
            KeyCode::Down => editor.select_next(),
            KeyCode::Enter => {
                editor.activate(index);
            }
            KeyCode::Backspace => {
                if let Some(mut text) = selected_text {
                    text.pop();
                    editor.set_text(index, text);
                }
            }
            KeyCode::Char(c) if is_plain(&key) => match selected_text {
                Some(mut text) => {
                    text.push(c);
                    editor.set_text(index, text);
                }
                None if c == ' ' => {
                    editor.activate(index);
                }
                None => {}
            },
            _ => {}
        }
    }

    async fn handle_students_key(&mut self, key: KeyEvent) {
        if self.student_modal.is_open() {
            self.handle_student_modal_key(key).await;
            return;
        }
        match key.code {
            KeyCode::Char('n') if is_plain(&key) => self.student_modal.open_new(),
            KeyCode::Enter => {
                if let Some(student) = self.roster.selected_student().cloned() {
                    self.student_modal.open_edit(&student);
                }
            }
            KeyCode::Up => self.roster.select_prev(),
            KeyCode::Down => self.roster.select_next(),
            _ => {}
        }
    }

    async fn handle_student_modal_key(&mut self, key: KeyEvent) {
        let modal = &mut self.student_modal;
        let field = modal.focused();
        match key.code {
            KeyCode::Esc => modal.close(),
            KeyCode::Enter => self.save_student().await,
            KeyCode::Tab | KeyCode::Down => modal.focus_next(),
            KeyCode::BackTab | KeyCode::Up => modal.focus_prev(),
            KeyCode::Left | KeyCode::Right if field == crate::forms::StudentField::Grade => {
                modal.cycle_grade()
            }
            KeyCode::Backspace => {
                let mut value = modal.value(field).to_string();
                value.pop();
                modal.set(field, value);
            }
            KeyCode::Char(c) if is_plain(&key) => {
                let mut value = modal.value(field).to_string();
                value.push(c);
                modal.set(field, value);
            }
            _ => {}
        }
    }

    async fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let editor = &mut self.content_editor;

        if ctrl {
            match key.code {
                KeyCode::Char('s') => self.save_activity().await,
                KeyCode::Char('n') => {
                    editor.add_step();
                    self.editor_focus = EditorField::Step(editor.step_count() - 1);
                }
                KeyCode::Char('d') => {
                    if let EditorField::Step(i) = self.editor_focus {
                        editor.remove_step(i);
                        self.editor_focus = self.editor_focus.clamp(editor.step_count());
                    }
                }
                KeyCode::Char('l') => {
                    let languages = editor.selected_languages().to_vec();
                    let pos = languages
                        .iter()
                        .position(|l| *l == editor.active_language())
                        .unwrap_or(0);
                    editor.set_active_language(languages[(pos + 1) % languages.len()]);
                }
                KeyCode::Char('t') => {
                    let all = ParentContentType::ALL;
                    let pos = all
                        .iter()
                        .position(|t| *t == editor.payload().content_type)
                        .unwrap_or(0);
                    editor.set_content_type(all[(pos + 1) % all.len()]);
                }
                KeyCode::Char('u') => {
                    let next = match editor.payload().status {
                        ContentStatus::Draft => ContentStatus::Published,
                        ContentStatus::Published => ContentStatus::Archived,
                        ContentStatus::Archived => ContentStatus::Draft,
                    };
                    editor.set_status(next);
                }
                _ => {}
            }
            return;
        }

        if alt {
            if let KeyCode::Char(c) = key.code {
                if let Some(lang) = c
                    .to_digit(10)
                    .and_then(|d| Language::ALL.get((d as usize).checked_sub(1)?).copied())
                {
                    editor.toggle_language(lang);
                }
            }
            return;
        }

        let steps = editor.step_count();
        match key.code {
            KeyCode::Tab => self.editor_focus = self.editor_focus.next(steps),
            KeyCode::BackTab => self.editor_focus = self.editor_focus.prev(steps),
            KeyCode::Backspace => self.edit_focused_text(|text| {
                text.pop();
            }),
            KeyCode::Char(c) => self.edit_focused_text(|text| text.push(c)),
            _ => {}
        }
    }

    /// Apply `edit` to the focused editor field in the active language.
    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        let editor = &mut self.content_editor;
        let translation = editor.active_translation();
        match self.editor_focus {
            EditorField::Title => {
                let mut text = translation.map(|t| t.title.clone()).unwrap_or_default();
                edit(&mut text);
                editor.set_translated_title(text);
            }
            EditorField::Description => {
                let mut text = translation
                    .map(|t| t.description.clone())
                    .unwrap_or_default();
                edit(&mut text);
                editor.set_translated_description(text);
            }
            EditorField::Step(i) => {
                let mut text = editor.step_text(i).to_string();
                edit(&mut text);
                editor.set_step_text(i, text);
            }
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        let dashboard = &mut self.dashboard;
        match dashboard.view() {
            DashboardView::Dashboard => {
                if dashboard.comic().is_some() {
                    if key.code == KeyCode::Esc {
                        dashboard.close_comic();
                    }
                    return;
                }
                if is_ctrl(&key, 'p') {
                    dashboard.open_path();
                    return;
                }
                if is_ctrl(&key, 'a') {
                    dashboard.open_assessment_select();
                    return;
                }
                match key.code {
                    KeyCode::Left => dashboard.move_mood_cursor(false),
                    KeyCode::Right => dashboard.move_mood_cursor(true),
                    KeyCode::Up => dashboard.select_mood(),
                    KeyCode::Enter => {
                        dashboard.submit_journal();
                    }
                    KeyCode::Backspace => dashboard.pop_journal_char(),
                    KeyCode::Char(c) if is_plain(&key) => dashboard.push_journal_char(c),
                    _ => {}
                }
            }
            DashboardView::Path => {
                if key.code == KeyCode::Esc {
                    dashboard.back_to_dashboard();
                }
            }
            DashboardView::AssessmentSelect => match key.code {
                KeyCode::Esc => dashboard.back_to_dashboard(),
                KeyCode::Up => dashboard.move_assessment_cursor(false),
                KeyCode::Down => dashboard.move_assessment_cursor(true),
                KeyCode::Enter => {
                    dashboard.confirm_assessment();
                }
                _ => {}
            },
            DashboardView::Assessment(_) => match key.code {
                KeyCode::Esc => dashboard.back_to_dashboard(),
                KeyCode::Enter => {
                    if let Some(assessment) = dashboard.current_assessment() {
                        dashboard.complete_assessment(assessment.questions);
                    }
                }
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{CatalogContentSource, InMemorySettingsSource};
    use crate::forms::SettingsTab;
    use std::sync::Arc;

    fn app() -> App {
        App::new(
            Arc::new(CatalogContentSource::new()),
            Arc::new(InMemorySettingsSource::new()),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c))).await;
        }
    }

    #[tokio::test]
    async fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key_event(ctrl('c')).await;
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_function_keys_switch_screens() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::F(3))).await;
        assert_eq!(app.screen, Screen::Students);
        app.handle_key_event(key(KeyCode::F(9))).await;
        assert_eq!(app.screen, Screen::Students);
    }

    #[tokio::test]
    async fn test_library_typing_marks_stale() {
        let mut app = app();
        app.initialize().await;
        type_text(&mut app, "emo").await;
        assert_eq!(app.library.search, "emo");
        assert!(app.library_needs_fetch());
    }

    #[tokio::test]
    async fn test_settings_space_toggles_and_ctrl_s_saves() {
        let mut app = app();
        app.navigate_to(Screen::Settings);
        app.handle_key_event(key(KeyCode::Char(' '))).await;
        assert!(app.settings_editor.is_dirty());

        app.handle_key_event(ctrl('s')).await;
        assert!(app.settings_editor.saved());
        assert!(!app.settings_editor.is_dirty());
    }

    #[tokio::test]
    async fn test_settings_text_field_typing() {
        let mut app = app();
        app.navigate_to(Screen::Settings);
        app.handle_key_event(key(KeyCode::Right)).await;
        assert_eq!(app.settings_editor.tab(), SettingsTab::Email);
        type_text(&mut app, "Ms. K").await;
        assert_eq!(app.settings_editor.draft().email.signature, "Ms. K");
    }

    #[tokio::test]
    async fn test_student_modal_flow() {
        let mut app = app();
        app.navigate_to(Screen::Students);
        app.handle_key_event(key(KeyCode::Char('n'))).await;
        assert!(app.student_modal.is_open());

        type_text(&mut app, "Ren").await;
        app.handle_key_event(key(KeyCode::Tab)).await;
        app.handle_key_event(key(KeyCode::Right)).await;
        app.handle_key_event(key(KeyCode::Enter)).await;

        assert!(!app.student_modal.is_open());
        assert_eq!(app.roster.students()[0].name, "Ren");
    }

    #[tokio::test]
    async fn test_editor_rejects_blank_title() {
        let mut app = app();
        app.navigate_to(Screen::Editor);
        app.handle_key_event(ctrl('s')).await;
        assert_eq!(app.content_editor.error(), Some("Title is required"));
        assert!(app.activities.is_empty());
    }

    #[tokio::test]
    async fn test_editor_alt_digit_toggles_language() {
        let mut app = app();
        app.navigate_to(Screen::Editor);
        let alt = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT);

        app.handle_key_event(alt('1')).await;
        assert_eq!(app.content_editor.selected_languages(), &[Language::En]);
        assert_eq!(
            app.content_editor.error(),
            Some(crate::forms::LAST_LANGUAGE_NOTICE)
        );

        app.handle_key_event(alt('2')).await;
        assert_eq!(app.content_editor.selected_languages().len(), 2);
        assert!(app.content_editor.error().is_none());
    }

    #[tokio::test]
    async fn test_editor_saves_activity() {
        let mut app = app();
        app.navigate_to(Screen::Editor);
        type_text(&mut app, "Calm jar").await;
        app.handle_key_event(key(KeyCode::Tab)).await;
        type_text(&mut app, "Shake and watch").await;
        app.handle_key_event(key(KeyCode::Tab)).await;
        type_text(&mut app, "Fill a jar").await;
        app.handle_key_event(ctrl('s')).await;

        assert_eq!(app.activities.len(), 1);
        assert_eq!(app.activities[0].title, "Calm jar");
        assert_eq!(app.editor_focus, EditorField::Title);
    }

    #[tokio::test]
    async fn test_dashboard_assessment_flow() {
        let mut app = app();
        app.navigate_to(Screen::Dashboard);
        app.handle_key_event(ctrl('a')).await;
        assert_eq!(app.dashboard.view(), DashboardView::AssessmentSelect);

        app.handle_key_event(key(KeyCode::Enter)).await;
        app.handle_key_event(key(KeyCode::Enter)).await;
        assert_eq!(app.dashboard.view(), DashboardView::Dashboard);
        assert_eq!(app.dashboard.last_score(), Some(20));
    }
}
