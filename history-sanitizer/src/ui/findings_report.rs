//! Per-finding report printed before any file is written.
//!
//! Raw matched values never reach the terminal unless the user asks for
//! verbose output: the `Command` field shows the offending line with the
//! match swapped for its masked preview.

use std::io::{self, Write};

use history_sanitizer_core::{preview, Finding};

use crate::ui::output_format::styled;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Rebuilds `line` with the span of `finding` replaced by its preview.
///
/// Offsets that do not land on character boundaries of `line` yield the
/// preview alone.
pub fn command_with_preview(line: &str, finding: &Finding) -> String {
    let shown = preview(&finding.matched_text, &finding.rule_name);
    match (line.get(..finding.start), line.get(finding.end..)) {
        (Some(head), Some(tail)) if finding.start <= finding.end => {
            format!("{}{}{}", head, shown, tail)
        }
        _ => shown,
    }
}

pub fn print_findings<W: Write + ?Sized>(
    writer: &mut W,
    content: &str,
    findings: &[Finding],
    verbose: bool,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let lines: Vec<&str> = content.split('\n').collect();
    let label = |text: &str| styled(text, ThemeEntry::FindingLabel, theme, enable_colors);

    for (index, finding) in findings.iter().enumerate() {
        let line = lines.get(finding.line.wrapping_sub(1)).copied().unwrap_or("");
        writeln!(writer, "{}", label(&format!("Finding #{}", index + 1)))?;
        writeln!(writer, "  {} {}", label("Type:   "), finding.rule_name)?;
        writeln!(writer, "  {} {}", label("Line:   "), finding.line)?;
        writeln!(
            writer,
            "  {} {}",
            label("Command:"),
            styled(&command_with_preview(line, finding), ThemeEntry::RedactedText, theme, enable_colors)
        )?;
        if verbose {
            writeln!(
                writer,
                "  {} {}",
                label("Secret: "),
                styled(&finding.matched_text, ThemeEntry::SecretText, theme, enable_colors)
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
