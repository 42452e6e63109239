// history-sanitizer/src/logger.rs
//! Logger setup for the command-line binary.
//!
//! Log lines go to stderr as `[LEVEL target] message`, so they never mix
//! with the report on stdout. `RUST_LOG` is honored; without it only
//! warnings and errors are shown.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// `level_override` replaces whatever `RUST_LOG` asked for; the CLI passes
/// `Off` for `--quiet` and `Debug` for `--debug`. Calling this more than
/// once is harmless: later calls are ignored.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = match level_override {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}
