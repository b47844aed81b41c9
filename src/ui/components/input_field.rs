//! Input Field Component
//!
//! A labelled text input with focus handling, read-only display and an
//! inline error line. Used by the student modal and the editor fields.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label displayed above the input
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Shown but not editable (no cursor, dimmed border)
    pub read_only: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
    /// Optional placeholder text when empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            read_only: false,
            error: None,
            placeholder: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Rows needed for an input field:
/// - 1 for label
/// - 3 for input box (border + content + border)
/// - 1 for error (if present)
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// Render an input field with label, input box, and optional error.
///
/// Returns the height consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;
    let inner_width = area.width.saturating_sub(4);

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let mut label_spans = vec![Span::styled(config.label, label_style)];
    if config.read_only {
        label_spans.push(Span::styled(" (read-only)", Style::default().fg(COLOR_DIM)));
    }

    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: inner_width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(Line::from(label_spans)), label_area);
    y_offset += 1;

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: inner_width,
        height: 3,
    };

    let border_color = if config.focused && !config.read_only {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let placeholder = config.placeholder.filter(|_| config.value.is_empty());
    let mut content = match placeholder {
        Some(text) => text.to_string(),
        None => config.value.to_string(),
    };

    let text_style = if placeholder.is_some() || config.read_only {
        Style::default().fg(COLOR_DIM)
    } else if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    if config.focused && !config.read_only && placeholder.is_none() {
        content.push('\u{2588}'); // Block cursor
    }

    let input_text = Paragraph::new(Line::from(Span::styled(content, text_style))).block(block);
    frame.render_widget(input_text, input_area);
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x + 2,
            y: area.y + y_offset,
            width: inner_width,
            height: 1,
        };

        let error_text = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
        ]));

        frame.render_widget(error_text, error_area);
        y_offset += 1;
    }

    y_offset
}

// ============================================================================
// Tests
// ============================================================================
