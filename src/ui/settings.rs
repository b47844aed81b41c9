//! Teacher settings screen
//!
//! One tab per settings section. Each row shows a toggle, a choice or a
//! text value; the selected row is marked and text rows show a cursor.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::forms::{FieldValue, SettingsEditor, SettingsField, SettingsTab};

use super::components::{
    render_status_indicator, render_tab_selector, StatusIndicatorType, TabItem,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    editor: &SettingsEditor,
    ctx: &LayoutContext,
) {
    let [tabs_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let tabs: Vec<TabItem> = SettingsTab::ALL
        .iter()
        .map(|t| TabItem::new(t.label(), t.label()))
        .collect();
    let selected_tab = SettingsTab::ALL
        .iter()
        .position(|t| *t == editor.tab())
        .unwrap_or(0);
    frame.render_widget(
        Paragraph::new(render_tab_selector(&tabs, selected_tab, true, ctx)),
        tabs_area,
    );

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", editor.tab().heading()),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let label_width = if ctx.is_compact() { 22 } else { 34 };
    let lines: Vec<Line<'static>> = editor
        .fields()
        .iter()
        .enumerate()
        .map(|(idx, field)| field_row(field, idx == editor.selected(), label_width))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), body_area);

    let saved = editor.saved().then_some("Settings saved");
    let indicator = StatusIndicatorType::from_flags(editor.is_saving(), editor.error(), saved)
        .or_else(|| {
            editor
                .is_dirty()
                .then(|| StatusIndicatorType::info("Unsaved changes"))
        });
    if let Some(indicator) = indicator {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), status_area);
    }
}

fn field_row(field: &SettingsField, selected: bool, label_width: usize) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
        Span::styled(
            format!("{:<width$}", field.label, width = label_width),
            label_style,
        ),
    ];

    match &field.value {
        FieldValue::Toggle(on) => {
            let (text, color) = if *on {
                ("[on] ", COLOR_ACTIVE)
            } else {
                ("[off]", COLOR_DIM)
            };
            spans.push(Span::styled(text, Style::default().fg(color)));
        }
        FieldValue::Choice(shown) => {
            spans.push(Span::styled(
                format!("< {} >", shown),
                Style::default().fg(COLOR_ACCENT),
            ));
        }
        FieldValue::Text(text) => {
            let shown = if text.is_empty() && !selected {
                Span::styled("(empty)", Style::default().fg(COLOR_DIM))
            } else {
                Span::styled(text.clone(), Style::default().fg(Color::White))
            };
            spans.push(shown);
            if selected {
                spans.push(Span::styled("\u{2588}", Style::default().fg(Color::White)));
            }
        }
    }

    Line::from(spans)
}
