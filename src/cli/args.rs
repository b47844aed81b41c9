//! Command-line argument parsing for the Hanami CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Create the predefined games that are missing
    SeedGames,
    /// Print content titles, optionally filtered by a search term
    List { search: Option<String> },
    /// Print the teacher settings as JSON
    Settings,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first recognised flag wins. `--list` takes the next argument as its
/// search term unless that argument is itself a flag.
///
/// # Examples
///
/// ```
/// use hanami::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hanami".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let mut args = args.skip(1).peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--seed-games" => return CliCommand::SeedGames,
            "--settings" => return CliCommand::Settings,
            "--list" => {
                let search = args.next_if(|next| !next.starts_with('-'));
                return CliCommand::List { search };
            }
            _ => {}
        }
    }
    CliCommand::RunTui
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        parse_args(
            std::iter::once("hanami")
                .chain(args.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_seed_games_flag() {
        assert_eq!(parse(&["--seed-games"]), CliCommand::SeedGames);
    }

    #[test]
    fn test_parse_settings_flag() {
        assert_eq!(parse(&["--settings"]), CliCommand::Settings);
    }

    #[test]
    fn test_parse_list_with_search() {
        assert_eq!(
            parse(&["--list", "calm"]),
            CliCommand::List {
                search: Some("calm".to_string())
            }
        );
    }

    #[test]
    fn test_parse_list_without_search() {
        assert_eq!(parse(&["--list"]), CliCommand::List { search: None });
        assert_eq!(
            parse(&["--list", "--version"]),
            CliCommand::List { search: None }
        );
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui);
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui);
    }
}
