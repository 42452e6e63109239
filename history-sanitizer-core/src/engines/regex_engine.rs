//! A `SanitizationEngine` implementation that applies every compiled rule
//! to every line of the input.
//! License: MIT OR APACHE 2.0

use log::debug;
use std::sync::Arc;

use crate::engine::SanitizationEngine;
use crate::finding::{log_captured_match_debug, Finding};
use crate::registry::{default_registry, RuleRegistry};

#[derive(Debug, Clone)]
pub struct RegexEngine {
    registry: Arc<RuleRegistry>,
}

impl RegexEngine {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    /// An engine over the shared registry built from the embedded rules.
    pub fn with_default_rules() -> Self {
        Self::new(default_registry())
    }

    fn scan_line(&self, line_number: usize, line: &str, out: &mut Vec<Finding>) {
        for rule in self.registry.rules() {
            for (start, end) in rule.find_spans(line) {
                let finding = Finding::new(&rule.name, &line[start..end], line_number, start);
                log_captured_match_debug(module_path!(), &finding);
                out.push(finding);
            }
        }
    }
}

impl SanitizationEngine for RegexEngine {
    fn scan(&self, content: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut line_count = 0usize;
        for (index, line) in content.split('\n').enumerate() {
            self.scan_line(index + 1, line, &mut findings);
            line_count = index + 1;
        }
        debug!(
            "Scanned {} lines with {} rules: {} finding(s).",
            line_count,
            self.registry.len(),
            findings.len()
        );
        findings
    }

    fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}
