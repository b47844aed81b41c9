//! Version command for the Hanami CLI.

/// The current version of Hanami, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The line printed by `--version`.
pub fn version_line() -> String {
    format!("hanami {}", VERSION)
}
