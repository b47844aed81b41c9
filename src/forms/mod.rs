//! Form state machines: drafts, validation and submission.
//!
//! Forms never talk to a data source themselves. `submit` takes the save
//! operation as a closure, so the caller decides where the record goes.

pub mod content_editor;
pub mod settings_editor;
pub mod student_form;

pub use content_editor::{ContentEditor, LAST_LANGUAGE_NOTICE};
pub use settings_editor::{FieldValue, SettingsEditor, SettingsField, SettingsTab};
pub use student_form::{is_valid_email, StudentField, StudentModal};
