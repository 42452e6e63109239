//! redactor.rs - Position-safe rewriting of findings into placeholders.
//!
//! Each line is patched right to left using the offsets stored in its
//! findings, so a replacement never shifts the offsets of a match that is
//! still waiting to be processed. The matched text itself is never searched
//! for.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::finding::{log_redaction_action_debug, Finding};
use crate::sanitizers::obfuscation::placeholder;

/// Replaces every finding's span with its placeholder.
///
/// Findings may arrive in any order. Lines without findings are copied
/// verbatim, and the result has exactly as many `\n`-separated lines as
/// `content`. A finding that reaches into a span already replaced on its
/// line, or whose offsets no longer fit the line, is skipped; text outside
/// the replaced spans is never touched.
pub fn redact(content: &str, findings: &[Finding]) -> String {
    if findings.is_empty() {
        return content.to_string();
    }

    let mut by_line: BTreeMap<usize, Vec<&Finding>> = BTreeMap::new();
    for finding in findings {
        by_line.entry(finding.line).or_default().push(finding);
    }

    let mut lines: Vec<Cow<'_, str>> = content.split('\n').map(Cow::Borrowed).collect();

    for (line_number, mut line_findings) in by_line {
        if line_number == 0 || line_number > lines.len() {
            debug!(
                "Ignoring {} finding(s) for out-of-range line {} (content has {} lines).",
                line_findings.len(),
                line_number,
                lines.len()
            );
            continue;
        }

        // Stable: equal start offsets keep the order they were given in.
        line_findings.sort_by(|a, b| b.start.cmp(&a.start));

        let index = line_number - 1;
        let mut current = lines[index].to_string();
        // Everything from here to the end of the line has been rewritten.
        let mut spliced_from = current.len();
        for finding in line_findings {
            if finding.end > spliced_from || !fits(&current, finding) {
                trace!(
                    "Skipping stale span [{}..{}] for rule '{}' on line {}.",
                    finding.start,
                    finding.end,
                    finding.rule_name,
                    line_number
                );
                continue;
            }
            let replacement = placeholder(&finding.matched_text, &finding.rule_name);
            log_redaction_action_debug(
                module_path!(),
                &finding.matched_text,
                &replacement,
                &finding.rule_name,
            );
            current.replace_range(finding.start..finding.end, &replacement);
            spliced_from = finding.start;
        }
        lines[index] = Cow::Owned(current);
    }

    lines.join("\n")
}

/// Whether `finding`'s span can be spliced into `line` as it currently stands.
fn fits(line: &str, finding: &Finding) -> bool {
    finding.start < line.len()
        && finding.end <= line.len()
        && finding.start <= finding.end
        && line.is_char_boundary(finding.start)
        && line.is_char_boundary(finding.end)
}
