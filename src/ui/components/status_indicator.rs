//! Status Indicator Component
//!
//! One-line loading, saved and error indicators shown in screen footers.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING, COLOR_SUCCESS};

/// Spinner animation frames
const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Status indicator types
#[derive(Debug, Clone, PartialEq)]
pub enum StatusIndicatorType {
    /// Request in flight
    Spinner { message: String, frame: usize },
    Success { message: String },
    Error { message: String },
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>) -> Self {
        Self::Spinner {
            message: message.into(),
            frame: 0,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    /// Pick the indicator for a form's flags: in-flight beats error beats
    /// success.
    pub fn from_flags(busy: bool, error: Option<&str>, success: Option<&str>) -> Option<Self> {
        if busy {
            Some(Self::spinner("Saving..."))
        } else if let Some(err) = error {
            Some(Self::error(err))
        } else {
            success.map(Self::success)
        }
    }
}

/// Get the current spinner character based on frame
pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as a single line.
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Line<'static> {
    match indicator {
        StatusIndicatorType::Spinner { message, frame } => Line::from(vec![
            Span::styled(
                format!("{} ", get_spinner_char(*frame)),
                Style::default().fg(COLOR_PENDING),
            ),
            Span::styled(message.clone(), Style::default().fg(COLOR_PENDING)),
        ]),
        StatusIndicatorType::Success { message } => Line::from(vec![
            Span::styled("\u{25CF} ", Style::default().fg(COLOR_SUCCESS)),
            Span::styled(
                message.clone(),
                Style::default()
                    .fg(COLOR_SUCCESS)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        StatusIndicatorType::Error { message } => Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)),
        ]),
        StatusIndicatorType::Info { message } => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(COLOR_DIM),
        )),
    }
}
