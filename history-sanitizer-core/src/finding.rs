// history-sanitizer-core/src/finding.rs
//! Data structures for located matches and the PII-safe debug logging
//! helpers shared by the scanner and the redactor.

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    /// Whether raw matched values may appear in debug logs. Read once per process.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("HISTORY_SANITIZER_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One located match of one rule against one line of input.
///
/// Offsets are UTF-8 byte positions relative to the start of `line`, and
/// `end == start + matched_text.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Name of the rule that produced the match.
    pub rule_name: String,
    pub matched_text: String,
    /// 1-based line number.
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl Finding {
    pub fn new(rule_name: &str, matched_text: &str, line: usize, start: usize) -> Self {
        Self {
            rule_name: rule_name.to_string(),
            matched_text: matched_text.to_string(),
            line,
            start,
            end: start + matched_text.len(),
        }
    }
}

/// Per-rule tally of findings, in the order rules first produced a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
    /// Distinct line numbers, ascending.
    pub lines: Vec<usize>,
}

/// Groups findings by rule name.
pub fn summarize(findings: &[Finding]) -> Vec<RedactionSummaryItem> {
    let mut summary: Vec<RedactionSummaryItem> = Vec::new();
    for finding in findings {
        let existing = summary.iter().position(|s| s.rule_name == finding.rule_name);
        let index = existing.unwrap_or_else(|| {
            summary.push(RedactionSummaryItem {
                rule_name: finding.rule_name.clone(),
                occurrences: 0,
                lines: Vec::new(),
            });
            summary.len() - 1
        });
        let item = &mut summary[index];
        item.occurrences += 1;
        if let Err(pos) = item.lines.binary_search(&finding.line) {
            item.lines.insert(pos, finding.line);
        }
    }
    summary
}

/// Masks a sensitive value for log output.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let char_count = s.chars().count();
    if char_count <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", char_count)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_captured_match_debug(module_path: &str, finding: &Finding) {
    debug!(
        "{} Captured match for rule '{}' at line {} [{}..{}]: '{}'",
        module_path,
        finding.rule_name,
        finding.line,
        finding.start,
        finding.end,
        get_loggable_content(&finding.matched_text)
    );
}

pub fn log_redaction_action_debug(
    module_path: &str,
    original_sensitive_content: &str,
    sanitized_replacement: &str,
    rule_name: &str,
) {
    debug!(
        "{} Redaction action: Original='{}', Redacted='{}' for rule '{}'",
        module_path,
        get_loggable_content(original_sensitive_content),
        sanitized_replacement,
        rule_name
    );
}
