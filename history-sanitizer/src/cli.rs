// history-sanitizer/src/cli.rs
//! This file defines the command-line interface for history-sanitizer,
//! including the default sanitize run and the auxiliary subcommands.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
///
/// Without a subcommand the tool scans and sanitizes a history file.
#[derive(Parser, Debug)]
#[command(
    name = "history-sanitizer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find and redact secrets in your shell history",
    long_about = "history-sanitizer scans a shell history file for credentials, tokens and keys, \
    reports every finding with a masked preview, and writes a sanitized copy in which each secret \
    is replaced by a deterministic, type-tagged placeholder such as [REDACTED_KEY_1a2b3c4d]."
)]
pub struct Cli {
    /// Load detection rules from a YAML file instead of the built-in set.
    #[arg(
        long = "rules",
        value_name = "FILE",
        env = "HISTORY_SANITIZER_RULES",
        global = true,
        help = "Load detection rules from a YAML file instead of the built-in set."
    )]
    pub rules: Option<PathBuf>,

    /// Disable these rule names (comma-separated).
    #[arg(
        long,
        short = 'x',
        value_delimiter = ',',
        global = true,
        help = "Disable these rule names (comma-separated)."
    )]
    pub disable: Vec<String>,

    /// Disable all log output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(flatten)]
    pub sanitize: SanitizeCommand,

    /// The subcommand to run; omit it to sanitize.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Auxiliary commands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Lists every active detection rule, grouped by family.
    #[command(about = "List the active detection rules.")]
    ListRules,

    /// Prints the version.
    #[command(about = "Print the version.")]
    Version,
}

/// Arguments for the default sanitize run.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    /// History file to scan. Falls back to $HISTFILE, then ~/.zsh_history.
    #[arg(long, short = 'f', value_name = "FILE", env = "HISTFILE", help = "History file to scan (default: ~/.zsh_history).")]
    pub file: Option<PathBuf>,

    /// Where to write the sanitized history (default: <FILE>.sanitized).
    #[arg(long, short = 'o', value_name = "FILE", help = "Write the sanitized history here (default: <FILE>.sanitized).")]
    pub output: Option<PathBuf>,

    /// Report findings without writing anything.
    #[arg(long = "dry-run", short = 'd', help = "Report findings without writing any file.")]
    pub dry_run: bool,

    /// Also print the raw matched value of every finding.
    #[arg(long, short = 'v', help = "Also print the raw matched value of every finding.")]
    pub verbose: bool,

    /// Overwrite the input file, keeping the original as <FILE>.backup.
    #[arg(
        long = "in-place",
        short = 'i',
        conflicts_with = "output",
        help = "Overwrite the input file, keeping the original as <FILE>.backup."
    )]
    pub in_place: bool,
}
