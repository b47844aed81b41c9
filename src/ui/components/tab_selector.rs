//! Tab Selector Component
//!
//! A horizontal tab row used for the screen bar, the settings sections and
//! the editor's language tabs. Uses a `▶` marker for the selected item with
//! responsive label sizing.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// A single tab item in the selector
#[derive(Debug, Clone)]
pub struct TabItem<'a> {
    /// Unique identifier for the tab
    pub id: &'a str,
    /// Full label displayed on normal-sized terminals
    pub label: &'a str,
    /// Short label displayed on compact terminals
    pub short_label: &'a str,
}

impl<'a> TabItem<'a> {
    /// Same label in normal and compact modes
    pub fn new(id: &'a str, label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label: label,
        }
    }

    /// Different labels for normal and compact modes
    pub fn with_short_label(id: &'a str, label: &'a str, short_label: &'a str) -> Self {
        Self {
            id,
            label,
            short_label,
        }
    }
}

/// Render a horizontal tab selector
///
/// `focused` controls whether the selected tab is drawn in the accent color
/// or dimmed; the marker is shown either way.
///
/// ```ignore
/// let items = vec![
///     TabItem::with_short_label("notifications", "Notifications", "Notif"),
///     TabItem::new("email", "Email"),
/// ];
/// let line = render_tab_selector(&items, 0, true, &ctx);
/// ```
pub fn render_tab_selector(
    items: &[TabItem<'_>],
    selected: usize,
    focused: bool,
    ctx: &LayoutContext,
) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();

    spans.push(Span::raw("  "));

    for (idx, item) in items.iter().enumerate() {
        let label = if ctx.is_compact() {
            item.short_label
        } else {
            item.label
        };

        if idx == selected {
            let marker_style = if focused {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };

            let text_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            spans.push(Span::styled("▶ ".to_string(), marker_style));
            spans.push(Span::styled(label.to_string(), text_style));
        } else {
            let text_style = Style::default().fg(COLOR_DIM);
            spans.push(Span::styled("  ".to_string(), text_style));
            spans.push(Span::styled(label.to_string(), text_style));
        }

        if idx + 1 < items.len() {
            let spacing = if ctx.is_extra_small() { "  " } else { "    " };
            spans.push(Span::raw(spacing.to_string()));
        }
    }

    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================
