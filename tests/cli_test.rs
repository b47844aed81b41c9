//! CLI parsing and command output against offline sources.

mod common;

use std::sync::Arc;

use hanami::adapters::{CatalogContentSource, InMemorySettingsSource};
use hanami::catalog::PREDEFINED_GAMES;
use hanami::cli::{parse_args, run_cli_command, CliCommand};

fn args(list: &[&str]) -> impl Iterator<Item = String> {
    list.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .into_iter()
}

#[test]
fn test_first_recognised_flag_wins() {
    assert_eq!(
        parse_args(args(&["hanami", "--settings", "--version"])),
        CliCommand::Settings
    );
    assert_eq!(
        parse_args(args(&["hanami", "--verbose", "--seed-games"])),
        CliCommand::SeedGames
    );
}

#[tokio::test]
async fn test_seed_games_creates_missing_titles() {
    let content = Arc::new(CatalogContentSource::from_items(common::catalog_items(2)));
    let mut out = Vec::new();

    let result = run_cli_command(
        &CliCommand::SeedGames,
        content.clone(),
        Arc::new(InMemorySettingsSource::new()),
        &mut out,
    )
    .await
    .unwrap();

    assert!(result.is_ok());
    let expected = PREDEFINED_GAMES.len() - 2;
    assert_eq!(
        String::from_utf8(out).unwrap().trim(),
        format!("Loaded {} predefined games", expected)
    );
    assert_eq!(content.items().len(), PREDEFINED_GAMES.len());
}

#[tokio::test]
async fn test_list_on_empty_source() {
    let mut out = Vec::new();
    let result = run_cli_command(
        &CliCommand::List { search: None },
        Arc::new(CatalogContentSource::empty()),
        Arc::new(InMemorySettingsSource::new()),
        &mut out,
    )
    .await
    .unwrap();

    assert!(result.is_ok());
    assert_eq!(String::from_utf8(out).unwrap().trim(), "No content found");
}
