//! Data-access services used by the screens and the CLI.
//!
//! Each service owns its loading flag and error slot. Calls reset the error
//! when they start and reset the loading flag when they finish, whatever the
//! outcome.

pub mod content;
pub mod games_loader;
pub mod settings;

pub use content::ContentService;
pub use games_loader::{idempotency_key, load_predefined_games};
pub use settings::SettingsService;
