//! Students screen and the add/edit student dialog.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::forms::{StudentField, StudentModal};
use crate::view_state::RosterState;

use super::components::{
    calculate_input_field_height, render_dialog_frame, render_input_field,
    render_status_indicator, DialogFrameConfig, InputFieldConfig, StatusIndicatorType,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

pub fn render_students(
    frame: &mut Frame,
    area: Rect,
    roster: &RosterState,
    modal: &StudentModal,
    ctx: &LayoutContext,
) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Students ({}) ", roster.students().len()),
            Style::default().fg(Color::White),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines: Vec<Line<'static>> = if roster.students().is_empty() {
        vec![Line::from(Span::styled(
            "No students yet. Press n to add one.",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        roster
            .students()
            .iter()
            .enumerate()
            .map(|(idx, student)| {
                let selected = idx == roster.selected();
                let marker = if selected { "▶ " } else { "  " };
                let name_style = if selected {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
                    Span::styled(student.name.clone(), name_style),
                    Span::styled(format!("  {}", student.grade), Style::default().fg(COLOR_DIM)),
                ];
                if !ctx.is_compact() {
                    if let Some(code) = &student.access_code {
                        spans.push(Span::styled(
                            format!("  code {}", code),
                            Style::default().fg(COLOR_DIM),
                        ));
                    }
                }
                Line::from(spans)
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if modal.is_open() {
        render_student_modal(frame, area, modal, ctx);
    }
}

/// Render the student dialog centered over `area`.
pub fn render_student_modal(
    frame: &mut Frame,
    area: Rect,
    modal: &StudentModal,
    ctx: &LayoutContext,
) {
    let errors: Vec<(StudentField, Option<String>)> = modal
        .fields()
        .into_iter()
        .map(|f| (f, modal.field_error(f)))
        .collect();

    let configs: Vec<InputFieldConfig> = errors
        .iter()
        .map(|(field, error)| {
            let config = InputFieldConfig::new(field.label(), modal.value(*field))
                .focused(modal.focused() == *field)
                .read_only(modal.is_read_only(*field))
                .error(error.as_deref());
            match field {
                StudentField::Grade => config.placeholder("Select grade"),
                StudentField::Email | StudentField::ParentEmail => config.placeholder("optional"),
                _ => config,
            }
        })
        .collect();

    let fields_height: u16 = configs.iter().map(calculate_input_field_height).sum();
    let config = DialogFrameConfig::new(modal.title(), fields_height + 1).max_width(64);
    let inner = render_dialog_frame(frame, area, ctx, &config);

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for field in &configs {
        let height = calculate_input_field_height(field);
        if y + height > bottom {
            break;
        }
        let field_area = Rect {
            y,
            height,
            ..inner
        };
        y += render_input_field(frame, field_area, field);
    }

    if y < bottom {
        let indicator = StatusIndicatorType::from_flags(modal.is_submitting(), modal.error(), None)
            .unwrap_or_else(|| StatusIndicatorType::info("Enter save · Esc cancel"));
        let status_area = Rect {
            x: inner.x + 2,
            y,
            width: inner.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), status_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentFormData;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(roster: &RosterState, modal: &StudentModal) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::from(f.area());
                render_students(f, f.area(), roster, modal, &ctx);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_empty_roster_hint() {
        let text = draw(&RosterState::new(), &StudentModal::new());
        assert!(text.contains("No students yet"));
    }

    #[test]
    fn test_add_dialog_shows_field_errors() {
        let mut modal = StudentModal::new();
        modal.open_new();
        modal.set(StudentField::Name, "A");
        let _ = modal.validate();

        let text = draw(&RosterState::new(), &modal);
        assert!(text.contains("Add Student"));
        assert!(text.contains("Name must be at least 2 characters"));
        assert!(text.contains("Grade is required"));
        assert!(!text.contains("Access Code"));
    }

    #[test]
    fn test_edit_dialog_shows_read_only_access_code() {
        let mut roster = RosterState::new();
        let student = roster
            .save(
                None,
                StudentFormData {
                    name: "Aiko".to_string(),
                    grade: "2nd".to_string(),
                    ..StudentFormData::default()
                },
            )
            .clone();
        let mut modal = StudentModal::new();
        modal.open_edit(&student);

        let text = draw(&roster, &modal);
        assert!(text.contains("Edit Student"));
        assert!(text.contains("Access Code (read-only)"));
    }
}
