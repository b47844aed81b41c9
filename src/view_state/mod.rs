//! View state module for decoupling UI rendering from application state.
//!
//! Screen-local state that is not a form lives here, so the `ui` module can
//! render it without importing `App`.
//!
//! ## Components
//!
//! - [`StudentDashboardState`]: student dashboard view switching, journal and mood
//! - [`LibraryState`]: content library search, results and selection
//! - [`EditorField`]: content editor focus
//! - [`RosterState`]: students saved from the student modal

pub mod dashboard;
pub mod editor;
pub mod library;
pub mod roster;

pub use dashboard::{
    ComicPreview, DashboardView, MoodPoint, StudentDashboardState, MOODS, SAMPLE_MOOD_TREND,
};
pub use editor::EditorField;
pub use library::{LibraryState, TypeFilter};
pub use roster::RosterState;
