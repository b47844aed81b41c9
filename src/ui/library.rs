//! Content library screen
//!
//! Search box, type filter and the list of content items. A failed fetch
//! shows the error instead of "no matches" since both arrive as an empty
//! list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{Content, ContentStatus};
use crate::view_state::LibraryState;

use super::components::{
    calculate_input_field_height, render_input_field, render_status_indicator, InputFieldConfig,
    StatusIndicatorType,
};
use super::layout::{truncate, LayoutContext};
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_SUCCESS};

pub fn render_library(frame: &mut Frame, area: Rect, state: &LibraryState, ctx: &LayoutContext) {
    let search = InputFieldConfig::new("Search", &state.search)
        .focused(true)
        .placeholder("title or description");
    let search_height = calculate_input_field_height(&search);

    let [search_area, filter_area, list_area, status_area] = Layout::vertical([
        Constraint::Length(search_height),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    render_input_field(frame, search_area, &search);

    let filter = Line::from(vec![
        Span::styled("  Type: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            state.type_filter.display_name(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("   {} item(s)", state.items.len()),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(filter), filter_area);

    let block = Block::default()
        .title(Span::styled(" Content ", Style::default().fg(Color::White)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let visible = list_area.height.saturating_sub(2) as usize;
    let offset = (state.selected + 1).saturating_sub(visible);
    let lines: Vec<Line<'static>> = state
        .items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(idx, item)| content_row(item, idx == state.selected, ctx))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), list_area);

    let indicator = if state.stale && state.items.is_empty() && state.error.is_none() {
        Some(StatusIndicatorType::spinner("Loading content..."))
    } else if let Some(err) = &state.error {
        Some(StatusIndicatorType::error(err.clone()))
    } else if state.is_empty_result() {
        Some(StatusIndicatorType::info("No content matches your search"))
    } else {
        state.notice.clone().map(StatusIndicatorType::info)
    };
    if let Some(indicator) = indicator {
        frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), status_area);
    }
}

fn content_row(item: &Content, selected: bool, ctx: &LayoutContext) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let status_color = match item.status {
        ContentStatus::Published => COLOR_SUCCESS,
        ContentStatus::Draft => COLOR_ACCENT,
        ContentStatus::Archived => COLOR_DIM,
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
        Span::styled(truncate(&item.title, ctx.max_title_length()), title_style),
        Span::styled(
            format!("  [{}]", item.content_type.as_str()),
            Style::default().fg(COLOR_DIM),
        ),
    ];

    if !ctx.is_compact() {
        if !item.category.is_empty() {
            spans.push(Span::styled(
                format!(" {}", item.category),
                Style::default().fg(COLOR_DIM),
            ));
        }
        if let Some(minutes) = item.duration_minutes {
            spans.push(Span::styled(
                format!(" {} min", minutes),
                Style::default().fg(COLOR_DIM),
            ));
        }
        spans.push(Span::styled(
            format!(" {}", item.status.as_str()),
            Style::default().fg(status_color),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PREDEFINED_GAMES;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &LibraryState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::from(f.area());
                render_library(f, f.area(), state, &ctx);
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
    fn test_lists_titles_with_marker() {
        let mut state = LibraryState::new();
        let items = PREDEFINED_GAMES
            .iter()
            .take(2)
            .enumerate()
            .map(|(i, g)| g.to_content(i))
            .collect();
        state.set_results(items, None);

        let text = draw(&state, 100, 20);
        assert!(text.contains(PREDEFINED_GAMES[0].title));
        assert!(text.contains(PREDEFINED_GAMES[1].title));
        assert!(text.contains("▶"));
        assert!(text.contains("[game]"));
    }

    #[test]
    fn test_error_distinguished_from_empty() {
        let mut state = LibraryState::new();
        state.set_results(Vec::new(), Some("Failed to fetch content".to_string()));
        let text = draw(&state, 100, 20);
        assert!(text.contains("Failed to fetch content"));
        assert!(!text.contains("No content matches"));

        state.set_results(Vec::new(), None);
        let text = draw(&state, 100, 20);
        assert!(text.contains("No content matches your search"));
    }

    #[test]
    fn test_loading_before_first_fetch() {
        let state = LibraryState::new();
        let text = draw(&state, 100, 20);
        assert!(text.contains("Loading content..."));
    }
}
