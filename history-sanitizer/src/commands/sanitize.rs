//! The default command: scan a history file, report what was found, and
//! write a sanitized copy.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use history_sanitizer_core::{decode_text, redact, summarize, SanitizationEngine};

use crate::ui::output_format;
use crate::ui::theme::{ThemeEntry, ThemeMap};
use crate::ui::{findings_report, redaction_summary};

/// Options for a sanitize run, resolved from the command line.
#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    pub file: PathBuf,
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
    pub in_place: bool,
}

/// Where the sanitized text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    DryRun,
    File(PathBuf),
    InPlace { backup: PathBuf },
}

impl SanitizeOptions {
    pub fn output_mode(&self) -> OutputMode {
        if self.dry_run {
            OutputMode::DryRun
        } else if self.in_place {
            OutputMode::InPlace {
                backup: with_suffix(&self.file, ".backup"),
            }
        } else {
            OutputMode::File(
                self.output
                    .clone()
                    .unwrap_or_else(|| with_suffix(&self.file, ".sanitized")),
            )
        }
    }
}

/// The history file used when neither `--file` nor `$HISTFILE` is given.
pub fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".zsh_history")
}

/// Appends `suffix` to the full file name, so `h.txt` becomes `h.txt.backup`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes `contents` to `path`, readable and writable by the owner only.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?;
        // mode() only applies when the file is created
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents)?;
    }

    Ok(())
}

/// The main operation runner for the default command.
pub fn run_sanitize(
    engine: &dyn SanitizationEngine,
    opts: &SanitizeOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting sanitize operation on {}", opts.file.display());

    if !opts.file.exists() {
        bail!("history file not found: {}", opts.file.display());
    }

    let stdout = io::stdout();
    let enable_colors = stdout.is_terminal();
    let mut out = stdout.lock();

    output_format::print_message(
        &mut out,
        &format!("Scanning history file: {}", opts.file.display()),
        ThemeEntry::Info,
        theme_map,
        enable_colors,
    )?;

    let bytes = fs::read(&opts.file)
        .with_context(|| format!("failed to read history file: {}", opts.file.display()))?;
    let content = decode_text(&bytes).context("failed to scan content")?;

    let findings = engine.scan(content);
    debug!("Scan produced {} finding(s).", findings.len());

    if findings.is_empty() {
        output_format::print_success_message(&mut out, "No sensitive information found!", theme_map, enable_colors)?;
        return Ok(());
    }

    writeln!(out)?;
    output_format::print_message(
        &mut out,
        &format!("Found {} sensitive pattern(s)", findings.len()),
        ThemeEntry::Warn,
        theme_map,
        enable_colors,
    )?;
    writeln!(out)?;
    findings_report::print_findings(&mut out, content, &findings, opts.verbose, theme_map, enable_colors)?;
    redaction_summary::print_summary(&summarize(&findings), &mut out, theme_map, enable_colors)?;

    let mode = opts.output_mode();
    if mode == OutputMode::DryRun {
        output_format::print_message(
            &mut out,
            "Dry run mode - no files were modified",
            ThemeEntry::Warn,
            theme_map,
            enable_colors,
        )?;
        return Ok(());
    }

    let sanitized = redact(content, &findings);

    match mode {
        OutputMode::InPlace { backup } => {
            write_private(&backup, &bytes)
                .with_context(|| format!("failed to create backup file: {}", backup.display()))?;
            output_format::print_success_message(
                &mut out,
                &format!("Backup created: {}", backup.display()),
                theme_map,
                enable_colors,
            )?;
            write_private(&opts.file, sanitized.as_bytes())
                .with_context(|| format!("failed to write sanitized file: {}", opts.file.display()))?;
            output_format::print_success_message(
                &mut out,
                &format!("History file sanitized: {}", opts.file.display()),
                theme_map,
                enable_colors,
            )?;
        }
        OutputMode::File(path) => {
            write_private(&path, sanitized.as_bytes())
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            output_format::print_success_message(
                &mut out,
                &format!("Sanitized history saved to: {}", path.display()),
                theme_map,
                enable_colors,
            )?;
            output_format::print_info_message(
                &mut out,
                &format!(
                    "Original file preserved at: {}\nTo replace your history file instead, run:\n  history-sanitizer -f {} -i",
                    opts.file.display(),
                    opts.file.display()
                ),
                theme_map,
                enable_colors,
            )?;
        }
        OutputMode::DryRun => {}
    }

    info!("Sanitize operation completed.");
    Ok(())
}
