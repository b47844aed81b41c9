//! Student dashboard screen
//!
//! Renders whichever page `StudentDashboardState` is on: the dashboard with
//! mood check-in, trend and journal, the learning path, the assessment
//! picker, or a running assessment.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::catalog::ASSESSMENTS;
use crate::models::Assessment;
use crate::view_state::{ComicPreview, DashboardView, StudentDashboardState, MOODS};

use super::components::{
    render_dialog_frame, render_input_field, DialogFrameConfig, InputFieldConfig,
};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Width of the mood trend bars at value 1.0.
const TREND_BAR_WIDTH: usize = 20;

pub fn render_student_dashboard(
    frame: &mut Frame,
    area: Rect,
    state: &StudentDashboardState,
    ctx: &LayoutContext,
) {
    match state.view() {
        DashboardView::Dashboard => render_home(frame, area, state, ctx),
        DashboardView::Path => render_path(frame, area),
        DashboardView::AssessmentSelect => render_assessment_select(frame, area, state),
        DashboardView::Assessment(_) => {
            if let Some(assessment) = state.current_assessment() {
                render_assessment(frame, area, assessment);
            }
        }
    }
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

fn render_home(
    frame: &mut Frame,
    area: Rect,
    state: &StudentDashboardState,
    ctx: &LayoutContext,
) {
    let trend_height = state.mood_trend().len() as u16 + 3;
    let [welcome_area, mood_area, trend_area, journal_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(trend_height),
        Constraint::Min(4),
    ])
    .areas(area);

    let mut welcome = vec![Span::styled(
        "  Welcome back!",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(score) = state.last_score() {
        welcome.push(Span::styled(
            format!("   Last assessment score: {}", score),
            Style::default().fg(COLOR_ACCENT),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(welcome)), welcome_area);

    let mut moods: Vec<Span<'static>> = Vec::new();
    for (idx, mood) in MOODS.iter().enumerate() {
        let picked = state.mood() == Some(*mood);
        let under_cursor = idx == state.mood_cursor();
        let style = match (picked, under_cursor) {
            (true, _) => Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
            (false, false) => Style::default().fg(COLOR_DIM),
        };
        let marker = if picked { "● " } else { "  " };
        moods.push(Span::styled(format!("{}{}  ", marker, mood), style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(moods)).block(panel("How are you feeling today?")),
        mood_area,
    );

    let mut trend: Vec<Line<'static>> = state
        .mood_trend()
        .iter()
        .map(|point| {
            let filled = ((point.value * TREND_BAR_WIDTH as f32).round() as usize).min(TREND_BAR_WIDTH);
            let padding = " ".repeat(TREND_BAR_WIDTH - filled);
            Line::from(vec![
                Span::styled(format!("{} ", point.date), Style::default().fg(COLOR_DIM)),
                Span::styled("█".repeat(filled), Style::default().fg(COLOR_ACCENT)),
                Span::styled(
                    format!("{} {:.2} {}", padding, point.value, point.dominant_emotion),
                    Style::default().fg(Color::Gray),
                ),
            ])
        })
        .collect();
    trend.push(Line::from(Span::styled(
        format!("Average mood {:.2}", state.average_mood()),
        Style::default().fg(COLOR_DIM),
    )));
    frame.render_widget(Paragraph::new(trend).block(panel("Mood Trend")), trend_area);

    render_input_field(
        frame,
        journal_area,
        &InputFieldConfig::new("Journal", state.journal())
            .focused(true)
            .placeholder("Write about your day, then press Enter"),
    );

    if let Some(comic) = state.comic() {
        render_comic(frame, area, comic, ctx);
    }
}

fn render_comic(frame: &mut Frame, area: Rect, comic: &ComicPreview, ctx: &LayoutContext) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for panel in &comic.panels {
        lines.push(Line::from(Span::styled(
            format!("Panel {}", panel.id),
            Style::default().fg(COLOR_DIM),
        )));
        for bubble in &panel.bubbles {
            lines.push(Line::from(vec![
                Span::styled("» ", Style::default().fg(COLOR_ACCENT)),
                Span::styled(bubble.text.clone(), Style::default().fg(Color::White)),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(COLOR_DIM),
    )));

    let config = DialogFrameConfig::new("Your Comic", lines.len() as u16 + 2).max_width(70);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_path(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Your learning path grows as you finish activities.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Esc: Back to Dashboard",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(panel(DashboardView::Path.title())),
        area,
    );
}

fn render_assessment_select(frame: &mut Frame, area: Rect, state: &StudentDashboardState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Select an assessment to begin your journey of self-discovery",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ];
    for (idx, assessment) in ASSESSMENTS.iter().enumerate() {
        let selected = idx == state.assessment_cursor();
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(COLOR_ACTIVE)),
            Span::styled(assessment.title, title_style),
            Span::styled(
                format!("  {}", assessment.summary()),
                Style::default().fg(COLOR_ACCENT),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", assessment.description),
            Style::default().fg(COLOR_DIM),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).block(panel(DashboardView::AssessmentSelect.title())),
        area,
    );
}

fn render_assessment(frame: &mut Frame, area: Rect, assessment: &Assessment) {
    let lines = vec![
        Line::from(Span::styled(
            assessment.description,
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            assessment.summary(),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Finish · Esc: Back to Dashboard",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .block(panel(assessment.title))
            .wrap(Wrap { trim: false }),
        area,
    );
}
