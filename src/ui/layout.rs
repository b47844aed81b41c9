//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the screens ask: how wide a dialog should be, whether the
//! editor's two panes fit side by side, how long a title may get before it
//! is truncated.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// Extra small (< 60 cols)
    ExtraSmall,
    /// Small (< 80 cols)
    Small,
    /// Medium (< 120 cols)
    Medium,
    /// Large (>= 120 cols)
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Layout context holding terminal dimensions for responsive calculations.
///
/// Passed by reference to every render function.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// if ctx.should_stack_panels() {
///     // editor steps go below the fields
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    /// Create a new layout context with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate proportional width with min/max bounds.
    ///
    /// ```ignore
    /// let ctx = LayoutContext::new(200, 40);
    /// // 30% of 200 = 60, but clamped to max of 50
    /// assert_eq!(ctx.bounded_width(30, 20, 50), 50);
    /// ```
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    /// Get the width size category.
    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Narrow or short: labels and hints should be condensed.
    pub fn is_compact(&self) -> bool {
        self.is_narrow() || self.is_short()
    }

    /// Very constrained space.
    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Stack panes vertically instead of side-by-side (< 80 columns).
    pub fn should_stack_panels(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Responsive widths for a two-column layout, `(left, right)`.
    ///
    /// - Very narrow (< 60): equal split
    /// - Medium (< 120): 40/60 split
    /// - Wide (>= 120): 35/65 split with max left width of 60
    pub fn two_column_widths(&self) -> (u16, u16) {
        if self.width < breakpoints::XS_WIDTH {
            let half = self.width / 2;
            (half, self.width - half)
        } else if self.width < breakpoints::MD_WIDTH {
            let left = (self.width * 40) / 100;
            (left, self.width - left)
        } else {
            let left = ((self.width * 35) / 100).min(60);
            (left, self.width - left)
        }
    }

    // ========================================================================
    // Text Truncation Helpers
    // ========================================================================

    /// Maximum display length for a title in a list row.
    pub fn max_title_length(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 20,
            SizeCategory::Small => 30,
            SizeCategory::Medium => 50,
            SizeCategory::Large => 80,
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

impl From<ratatui::layout::Rect> for LayoutContext {
    fn from(area: ratatui::layout::Rect) -> Self {
        Self::new(area.width, area.height)
    }
}

/// Truncate `text` to `max` display columns, ending with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let ctx = LayoutContext::default();
        assert_eq!(ctx.width, 80);
        assert_eq!(ctx.height, 24);
        assert!(!ctx.is_compact());
    }

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(0), 1); // Minimum of 1
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(30, 20, 50), 50);
        assert_eq!(ctx.bounded_width(10, 25, 50), 25);
        assert_eq!(ctx.bounded_width(20, 20, 50), 40);
    }

    #[test]
    fn test_width_category() {
        assert_eq!(
            LayoutContext::new(50, 24).width_category(),
            SizeCategory::ExtraSmall
        );
        assert_eq!(
            LayoutContext::new(70, 24).width_category(),
            SizeCategory::Small
        );
        assert_eq!(
            LayoutContext::new(100, 24).width_category(),
            SizeCategory::Medium
        );
        assert_eq!(
            LayoutContext::new(160, 24).width_category(),
            SizeCategory::Large
        );
    }

    #[test]
    fn test_compact_states() {
        assert!(LayoutContext::new(70, 40).is_compact());
        assert!(LayoutContext::new(120, 20).is_compact());
        assert!(LayoutContext::new(50, 40).is_extra_small());
        assert!(LayoutContext::new(100, 12).is_extra_small());
        assert!(!LayoutContext::new(100, 30).is_extra_small());
    }

    #[test]
    fn test_two_column_widths() {
        assert_eq!(LayoutContext::new(50, 24).two_column_widths(), (25, 25));
        assert_eq!(LayoutContext::new(100, 24).two_column_widths(), (40, 60));
        assert_eq!(LayoutContext::new(200, 24).two_column_widths(), (60, 140));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Deep Breathing", 20), "Deep Breathing");
        assert_eq!(truncate("Deep Breathing", 6), "Deep …");
        assert_eq!(truncate("こんにちは", 5), "こん…");
    }
}
