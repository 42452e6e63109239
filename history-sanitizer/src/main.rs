// history-sanitizer/src/main.rs
//! history-sanitizer entry point.
//!
//! Parses the command line, sets up logging and the theme, builds the rule
//! registry and dispatches to the selected command.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{info, LevelFilter};
use std::io;

use history_sanitizer::cli::{Cli, Commands};
use history_sanitizer::commands::{self, list_rules, sanitize};
use history_sanitizer::logger;
use history_sanitizer::ui::theme::build_theme_map;
use history_sanitizer_core::RegexEngine;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("history-sanitizer started. Version: {}", env!("CARGO_PKG_VERSION"));

    let theme_map = build_theme_map(cli.theme.as_ref()).context("Theme error")?;

    match cli.command {
        Some(Commands::Version) => {
            println!("history-sanitizer version {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::ListRules) => {
            let registry = commands::load_registry(cli.rules.as_deref(), &cli.disable);
            let stdout = io::stdout();
            let enable_colors = stdout.is_terminal();
            list_rules::run_list_rules(&registry, &mut stdout.lock(), &theme_map, enable_colors)?;
        }
        None => {
            let registry = commands::load_registry(cli.rules.as_deref(), &cli.disable);
            let engine = RegexEngine::new(registry);
            let opts = sanitize::SanitizeOptions {
                file: cli
                    .sanitize
                    .file
                    .unwrap_or_else(sanitize::default_history_file),
                output: cli.sanitize.output,
                dry_run: cli.sanitize.dry_run,
                verbose: cli.sanitize.verbose,
                in_place: cli.sanitize.in_place,
            };
            sanitize::run_sanitize(&engine, &opts, &theme_map)?;
        }
    }

    Ok(())
}
