//! Color theme constants for the Hanami UI
//!
//! A dark palette with the platform's purple as the accent.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for panels and dialogs
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - Hanami purple for highlights
pub const COLOR_ACCENT: Color = Color::Rgb(167, 139, 250);

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Selected/active elements - bright green
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Status Colors
// ============================================================================

/// Success state (saved, published)
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Error state
pub const COLOR_ERROR: Color = Color::Red;

/// In-flight state (loading, saving)
pub const COLOR_PENDING: Color = Color::Yellow;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for modal dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
