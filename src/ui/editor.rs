//! Content editor screen
//!
//! Language checkboxes, a tab per selected language, the translated title
//! and description for the active language and the step list. Steps with
//! an attached image are marked.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::forms::ContentEditor;
use crate::models::Language;
use crate::view_state::EditorField;

use super::components::{
    render_input_field, render_status_indicator, render_tab_selector, InputFieldConfig,
    StatusIndicatorType, TabItem,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM};

pub fn render_content_editor(
    frame: &mut Frame,
    area: Rect,
    editor: &ContentEditor,
    focus: EditorField,
    ctx: &LayoutContext,
) {
    let [langs_area, tabs_area, meta_area, fields_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(language_checkboxes(editor)), langs_area);

    let tabs: Vec<TabItem> = editor
        .selected_languages()
        .iter()
        .map(|l| TabItem::with_short_label(l.code(), l.native_name(), l.code()))
        .collect();
    let active = editor
        .selected_languages()
        .iter()
        .position(|l| *l == editor.active_language())
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&tabs, active, true, ctx)),
        tabs_area,
    );

    frame.render_widget(Paragraph::new(meta_line(editor)), meta_area);

    let (text_area, steps_area) = if ctx.should_stack_panels() {
        let [top, bottom] =
            Layout::vertical([Constraint::Length(8), Constraint::Min(3)]).areas(fields_area);
        (top, bottom)
    } else {
        let (left, _) = LayoutContext::new(fields_area.width, fields_area.height).two_column_widths();
        let [l, r] = Layout::horizontal([Constraint::Length(left), Constraint::Min(10)])
            .areas(fields_area);
        (l, r)
    };

    let translation = editor.active_translation();
    let title = translation.map(|t| t.title.as_str()).unwrap_or("");
    let description = translation.map(|t| t.description.as_str()).unwrap_or("");

    let title_label = format!("Title ({})", editor.active_language().name());
    let description_label = format!("Description ({})", editor.active_language().name());

    let used = render_input_field(
        frame,
        text_area,
        &InputFieldConfig::new(&title_label, title).focused(focus == EditorField::Title),
    );
    let description_area = Rect {
        y: text_area.y + used,
        height: text_area.height.saturating_sub(used),
        ..text_area
    };
    render_input_field(
        frame,
        description_area,
        &InputFieldConfig::new(&description_label, description)
            .focused(focus == EditorField::Description),
    );

    render_steps(frame, steps_area, editor, focus);

    let indicator = StatusIndicatorType::from_flags(editor.is_submitting(), editor.error(), None)
        .unwrap_or_else(|| {
            StatusIndicatorType::info(if editor.is_editing() {
                "Editing saved activity"
            } else {
                "New activity"
            })
        });
    frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), status_area);
}

fn language_checkboxes(editor: &ContentEditor) -> Line<'static> {
    let mut spans = vec![Span::styled("  Languages: ", Style::default().fg(COLOR_DIM))];
    for lang in Language::ALL {
        let selected = editor.is_selected(lang);
        let (mark, style) = if selected {
            ("[x] ", Style::default().fg(COLOR_ACTIVE))
        } else {
            ("[ ] ", Style::default().fg(COLOR_DIM))
        };
        spans.push(Span::styled(mark, style));
        spans.push(Span::styled(format!("{}  ", lang.name()), style));
    }
    Line::from(spans)
}

fn meta_line(editor: &ContentEditor) -> Line<'static> {
    let draft = editor.payload();
    let dim = Style::default().fg(COLOR_DIM);
    let value = Style::default().fg(COLOR_ACCENT);
    let duration = if draft.duration.is_empty() {
        "-".to_string()
    } else {
        draft.duration.clone()
    };

    Line::from(vec![
        Span::styled("  Type: ", dim),
        Span::styled(draft.content_type.label(), value),
        Span::styled("  Status: ", dim),
        Span::styled(draft.status.as_str(), value),
        Span::styled("  Ages: ", dim),
        Span::styled(format!("{}-{}", draft.target_age.0, draft.target_age.1), value),
        Span::styled("  Duration: ", dim),
        Span::styled(duration, value),
    ])
}

fn render_steps(frame: &mut Frame, area: Rect, editor: &ContentEditor, focus: EditorField) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Steps ({}) ", editor.step_count()),
            Style::default().fg(Color::White),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let steps = &editor.payload().steps;
    let lines: Vec<Line<'static>> = if steps.is_empty() {
        vec![Line::from(Span::styled(
            "No steps yet",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        steps
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let focused = focus == EditorField::Step(idx);
                let marker = if focused { "▶ " } else { "  " };
                let text = editor.step_text(idx);
                let text_style = if focused {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
                    Span::styled(format!("{}. ", idx + 1), Style::default().fg(COLOR_DIM)),
                    Span::styled(text.to_string(), text_style),
                ];
                if focused {
                    spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
                }
                if step.image.is_some() {
                    spans.push(Span::styled(" [img]", Style::default().fg(COLOR_ACCENT)));
                }
                Line::from(spans)
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
