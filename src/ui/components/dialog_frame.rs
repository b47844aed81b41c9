//! Dialog Frame Component
//!
//! A centered dialog with rounded borders. Clears what is behind it and
//! sizes itself to the terminal.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Configuration for rendering a dialog frame
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    /// Title displayed in the border
    pub title: &'a str,
    /// Content height (not including borders)
    pub content_height: u16,
    /// Optional fixed width (otherwise responsive)
    pub fixed_width: Option<u16>,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            fixed_width: None,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn fixed_width(mut self, width: u16) -> Self {
        self.fixed_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }
}

fn calculate_dialog_width(ctx: &LayoutContext, config: &DialogFrameConfig, area_width: u16) -> u16 {
    if let Some(fixed) = config.fixed_width {
        return fixed.min(area_width.saturating_sub(4));
    }

    if ctx.is_extra_small() {
        area_width.saturating_sub(4).min(config.max_width)
    } else if ctx.is_narrow() {
        ctx.bounded_width(80, config.min_width, config.max_width)
    } else {
        ctx.bounded_width(50, config.min_width, config.max_width)
    }
}

/// Render a dialog frame and return the inner content area.
///
/// The height is capped to the area, so callers with tall content should
/// check the returned height before laying out rows.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_width = calculate_dialog_width(ctx, config, area.width).min(area.width);
    let dialog_height = calculate_total_dialog_height(config.content_height).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(block, dialog_area);

    Rect {
        x: dialog_area.x + 1,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(2),
        height: dialog_area.height.saturating_sub(2),
    }
}

/// Total dialog height for the given content height.
pub fn calculate_total_dialog_height(content_height: u16) -> u16 {
    content_height + 2
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_frame_config_builder() {
        let config = DialogFrameConfig::new("Add Student", 10)
            .fixed_width(50)
            .max_width(70);

        assert_eq!(config.title, "Add Student");
        assert_eq!(config.fixed_width, Some(50));
        assert_eq!(config.min_width, 30);
        assert_eq!(config.max_width, 70);
    }

    #[test]
    fn test_calculate_dialog_width_fixed_clamped() {
        let ctx = LayoutContext::new(40, 20);
        let config = DialogFrameConfig::new("Test", 10).fixed_width(50);
        assert_eq!(calculate_dialog_width(&ctx, &config, 40), 36);
    }

    #[test]
    fn test_calculate_dialog_width_normal() {
        let ctx = LayoutContext::new(120, 40);
        let config = DialogFrameConfig::new("Test", 10);
        // 50% of 120 = 60, clamped to max 60
        assert_eq!(calculate_dialog_width(&ctx, &config, 120), 60);
    }

    #[test]
    fn test_calculate_dialog_width_narrow() {
        let ctx = LayoutContext::new(70, 30);
        let config = DialogFrameConfig::new("Test", 10);
        // 80% of 70 = 56
        assert_eq!(calculate_dialog_width(&ctx, &config, 70), 56);
    }

    #[test]
    fn test_render_returns_inner_area() {
        use ratatui::{backend::TestBackend, Terminal};

        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut inner = Rect::default();
        terminal
            .draw(|f| {
                let ctx = LayoutContext::from(f.area());
                inner = render_dialog_frame(f, f.area(), &ctx, &DialogFrameConfig::new("Edit", 8));
            })
            .unwrap();

        assert_eq!(inner.height, 8);
        assert_eq!(inner.width, 48);
        assert_eq!(inner.y, 11);
    }
}
