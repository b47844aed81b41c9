//! Reusable UI Components
//!
//! Shared by every screen and dialog. All components take a `LayoutContext`
//! or a target `Rect` and size themselves from it.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab selector with arrow marker
//! - `InputField` - Labelled text input with focus, read-only and error display
//! - `StatusIndicator` - Saving, saved and error lines
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
pub use tab_selector::{render_tab_selector, TabItem};
