//! compiler.rs - Compiles rule entries into ready-to-run regular expressions.
//!
//! Compilation is lenient: a rule whose pattern is too long or fails to
//! compile is logged and dropped, and every other rule still compiles.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{RuleEntry, MAX_PATTERN_LENGTH};
use crate::errors::SanitizerError;

/// Upper bound on the size of a single compiled regex program.
const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// A single compiled detection rule.
///
/// Immutable once built; its identity is `name`.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    /// The unique name of the rule. Becomes the `rule_name` of every finding it produces.
    pub name: String,
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// Human-readable description, used only by listing surfaces.
    pub description: String,
}

impl CompiledRule {
    /// Returns every non-overlapping, non-empty match of this rule in `line`,
    /// leftmost-first, as `(start, end)` byte offsets.
    pub fn find_spans<'a>(&'a self, line: &'a str) -> impl Iterator<Item = (usize, usize)> + 'a {
        self.regex
            .find_iter(line)
            .filter(|m| !m.is_empty())
            .map(|m| (m.start(), m.end()))
    }
}

/// Compiles one rule entry.
pub fn compile_rule(entry: &RuleEntry) -> Result<CompiledRule, SanitizerError> {
    if entry.regex.len() > MAX_PATTERN_LENGTH {
        return Err(SanitizerError::PatternLengthExceeded(
            entry.name.clone(),
            entry.regex.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(&entry.regex)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| SanitizerError::PatternCompileError(entry.name.clone(), e))?;

    log::debug!(
        target: "history_sanitizer_core::sanitizer",
        "Rule '{}' compiled successfully.",
        &entry.name
    );

    Ok(CompiledRule {
        name: entry.name.clone(),
        regex,
        description: entry.description.clone(),
    })
}

/// Compiles a list of rule entries, skipping any entry that fails.
///
/// The returned rules keep the order of `entries`.
pub fn compile_rules(entries: &[RuleEntry]) -> Vec<CompiledRule> {
    debug!("Starting compilation of {} rules.", entries.len());

    let mut compiled = Vec::with_capacity(entries.len());
    for entry in entries {
        match compile_rule(entry) {
            Ok(rule) => compiled.push(rule),
            Err(e) => warn!("Skipping rule: {}", e),
        }
    }

    debug!(
        "Finished compiling rules. Total compiled: {} of {}.",
        compiled.len(),
        entries.len()
    );
    compiled
}
