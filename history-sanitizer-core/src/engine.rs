// history-sanitizer-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait decouples callers (the CLI, tests) from the concrete scanner so
//! that an engine can be built over any injected `RuleRegistry`. Scanning is
//! the only method an engine must supply; redaction is a pure function of
//! the content and the findings and is shared by every engine.
//!
//! License: MIT OR APACHE 2.0

use crate::errors::SanitizerError;
use crate::finding::{summarize, Finding, RedactionSummaryItem};
use crate::registry::RuleRegistry;
use crate::sanitizers::redactor::redact;

/// Decodes raw input as UTF-8 text, the only encoding the scanner accepts.
pub fn decode_text(bytes: &[u8]) -> Result<&str, SanitizerError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// The core functionality of a sanitization engine.
///
/// Implementations must be pure with respect to their inputs: every call
/// allocates fresh results and no shared state is mutated, so one engine can
/// serve concurrent callers.
pub trait SanitizationEngine: Send + Sync {
    /// Finds every match of every active rule in `content`, line by line.
    fn scan(&self, content: &str) -> Vec<Finding>;

    /// Returns the registry the engine scans with.
    fn registry(&self) -> &RuleRegistry;

    /// Decodes `content` and scans it. Fails only if the bytes are not UTF-8.
    fn scan_bytes(&self, content: &[u8]) -> Result<Vec<Finding>, SanitizerError> {
        let text = decode_text(content)?;
        Ok(self.scan(text))
    }

    /// Scans and redacts in one pass, returning the sanitized text and the findings.
    fn sanitize(&self, content: &str) -> (String, Vec<Finding>) {
        let findings = self.scan(content);
        let sanitized = redact(content, &findings);
        (sanitized, findings)
    }

    /// Scans without redacting and tallies findings per rule.
    fn analyze_for_stats(&self, content: &str) -> Vec<RedactionSummaryItem> {
        summarize(&self.scan(content))
    }
}
