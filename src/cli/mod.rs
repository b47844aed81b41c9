//! CLI module for Hanami.
//!
//! Non-interactive commands that run against the configured data sources
//! and print to stdout. The dispatcher is called early in main(), before
//! the TUI is set up:
//!
//! ```ignore
//! use hanami::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(&command, content, settings, &mut std::io::stdout()).await {
//!     // CLI command was executed, exit with result
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use version::{version_line, VERSION};

use std::io::Write;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::PREDEFINED_GAMES;
use crate::error::HanamiError;
use crate::models::ContentQuery;
use crate::services::load_predefined_games;
use crate::traits::{ContentSource, SettingsSource};

/// Failure of a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Source(#[from] HanamiError),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub async fn run_cli_command<W: Write>(
    command: &CliCommand,
    content: Arc<dyn ContentSource>,
    settings: Arc<dyn SettingsSource>,
    out: &mut W,
) -> Option<Result<(), CliError>> {
    let result = match command {
        CliCommand::RunTui => return None,
        CliCommand::Version => writeln!(out, "{}", version_line()).map_err(CliError::from),
        CliCommand::SeedGames => seed_games(content.as_ref(), out).await,
        CliCommand::List { search } => list_content(content.as_ref(), search.as_deref(), out).await,
        CliCommand::Settings => print_settings(settings.as_ref(), out).await,
    };
    Some(result)
}

async fn seed_games<W: Write>(content: &dyn ContentSource, out: &mut W) -> Result<(), CliError> {
    let created = load_predefined_games(content, &PREDEFINED_GAMES).await?;
    writeln!(out, "Loaded {} predefined games", created)?;
    Ok(())
}

async fn list_content<W: Write>(
    content: &dyn ContentSource,
    search: Option<&str>,
    out: &mut W,
) -> Result<(), CliError> {
    let mut query = ContentQuery::new();
    if let Some(search) = search {
        query = query.with_search(search);
    }
    let items = content.list_content(&query).await?;
    if items.is_empty() {
        writeln!(out, "No content found")?;
    }
    for item in items {
        writeln!(out, "{}\t{}\t{}", item.id, item.content_type.as_str(), item.title)?;
    }
    Ok(())
}

async fn print_settings<W: Write>(
    settings: &dyn SettingsSource,
    out: &mut W,
) -> Result<(), CliError> {
    let current = settings.fetch_settings().await?;
    writeln!(out, "{}", serde_json::to_string_pretty(&current)?)?;
    Ok(())
}
