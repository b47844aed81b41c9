//! UI rendering for Hanami
//!
//! Every screen is drawn the same way:
//! - Top line: screen tabs (F1..F5)
//! - Body: the active screen
//! - Bottom line: keybind hints for that screen
//!
//! ## Responsive Layout System
//!
//! All render functions receive a `LayoutContext` built from the frame size.
//! It answers `is_compact()` / `is_narrow()` / `should_stack_panels()` so each
//! screen can drop columns or stack fields on small terminals.

pub mod components;
mod editor;
mod layout;
mod library;
mod settings;
mod student_dashboard;
mod students;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_INPUT_BG, COLOR_PENDING, COLOR_SUCCESS,
};

// Re-export layout system for external use
pub use layout::{breakpoints, truncate, LayoutContext, SizeCategory};

// Re-export screen renderers
pub use editor::render_content_editor;
pub use library::render_library;
pub use settings::render_settings;
pub use student_dashboard::render_student_dashboard;
pub use students::{render_student_modal, render_students};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use components::{render_tab_selector, TabItem};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &App) {
    let ctx = LayoutContext::from(frame.area());
    let [tabs_area, body_area, hints_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_screen_tabs(frame, tabs_area, app.screen, &ctx);

    match app.screen {
        Screen::Library => render_library(frame, body_area, &app.library, &ctx),
        Screen::Settings => render_settings(frame, body_area, &app.settings_editor, &ctx),
        Screen::Students => {
            render_students(frame, body_area, &app.roster, &app.student_modal, &ctx)
        }
        Screen::Editor => render_content_editor(
            frame,
            body_area,
            &app.content_editor,
            app.editor_focus,
            &ctx,
        ),
        Screen::Dashboard => render_student_dashboard(frame, body_area, &app.dashboard, &ctx),
    }

    render_hints(frame, hints_area, app);
}

fn render_screen_tabs(frame: &mut Frame, area: Rect, screen: Screen, ctx: &LayoutContext) {
    let items: Vec<TabItem> = Screen::ALL
        .iter()
        .map(|s| TabItem::with_short_label(s.id(), s.title(), s.short_title()))
        .collect();
    frame.render_widget(
        Paragraph::new(render_tab_selector(&items, screen.index(), true, ctx)),
        area,
    );
}

/// Keybind hints for the active screen.
pub fn build_hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Library => "type to search · Tab type · ↑↓ select · Del delete · Ctrl+G seed games",
        Screen::Settings => "←→ tab · ↑↓ field · Space toggle · Ctrl+S save",
        Screen::Students if app.student_modal.is_open() => {
            "Tab field · ←→ grade · Enter save · Esc cancel"
        }
        Screen::Students => "n new · Enter edit · ↑↓ select",
        Screen::Editor => {
            "Tab field · Alt+1-3 language · Ctrl+L active · Ctrl+N/D step · Ctrl+T/U type/status · Ctrl+S save"
        }
        Screen::Dashboard => "←→ mood · ↑ pick · Enter journal · Ctrl+P path · Ctrl+A assessments",
    }
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", build_hints(app)), Style::default().fg(COLOR_DIM)),
        Span::styled("· Ctrl+C quit", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
