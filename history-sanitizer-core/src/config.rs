//! Configuration management for `history-sanitizer-core`.
//!
//! This module defines the declarative rule source: a YAML document with a
//! `title`, a `description` and an ordered list of `patterns`, each carrying
//! a `name`, a `regex` and a `description`. Entries are validated one by one
//! so that a single malformed entry is dropped without discarding the rest
//! of the document.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::SanitizerError;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 1000;

/// Name used in error messages for the rule source compiled into the binary.
pub const EMBEDDED_SOURCE_NAME: &str = "<embedded default_rules.yaml>";

/// One entry of the rule source, before compilation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleEntry {
    /// Unique identifier for the rule (e.g., "aws-access-token").
    pub name: String,
    /// The regex pattern string.
    pub regex: String,
    /// Human-readable description of what the rule targets.
    #[serde(default)]
    pub description: String,
}

/// Top-level shape of the rule source as it appears on disk.
///
/// Entries are kept as raw YAML values so each one can be validated on its own.
#[derive(Debug, Default, Deserialize)]
struct RawRuleSet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    patterns: Vec<serde_yml::Value>,
}

/// A parsed rule source: metadata plus the well-formed entries, in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSetConfig {
    pub title: String,
    pub description: String,
    pub patterns: Vec<RuleEntry>,
}

impl RuleSetConfig {
    /// Parses a rule source from YAML text.
    ///
    /// Fails with `ConfigError` only when the document itself cannot be parsed.
    /// Individual entries that are not mappings, have wrongly-typed fields, or
    /// lack a `name` or `regex` are skipped with a warning.
    pub fn from_yaml_str(text: &str, source_name: &str) -> Result<Self, SanitizerError> {
        let raw: RawRuleSet = serde_yml::from_str(text)
            .map_err(|e| SanitizerError::ConfigError(source_name.to_string(), e.to_string()))?;

        let total = raw.patterns.len();
        let mut patterns = Vec::with_capacity(total);
        for (index, value) in raw.patterns.into_iter().enumerate() {
            match serde_yml::from_value::<RuleEntry>(value) {
                Ok(entry) if entry.name.trim().is_empty() => {
                    warn!("Skipping rule #{} in {}: empty `name` field.", index + 1, source_name);
                }
                Ok(entry) if entry.regex.is_empty() => {
                    warn!("Skipping rule '{}' in {}: empty `regex` field.", entry.name, source_name);
                }
                Ok(entry) => patterns.push(entry),
                Err(e) => {
                    warn!("Skipping malformed rule #{} in {}: {}", index + 1, source_name, e);
                }
            }
        }

        debug!(
            "Parsed {} of {} rule entries from {}.",
            patterns.len(),
            total,
            source_name
        );

        Ok(Self {
            title: raw.title,
            description: raw.description,
            patterns,
        })
    }

    /// Loads a rule source from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SanitizerError> {
        let path = path.as_ref();
        info!("Loading rules from: {}", path.display());
        let source_name = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SanitizerError::ConfigError(source_name.clone(), format!("failed to read file: {}", e))
        })?;
        let config = Self::from_yaml_str(&text, &source_name)?;
        info!("Loaded {} rules from file {}.", config.patterns.len(), path.display());
        Ok(config)
    }

    /// Loads the rule source embedded in the binary.
    pub fn load_default_rules() -> Result<Self, SanitizerError> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        Self::from_yaml_str(default_yaml, EMBEDDED_SOURCE_NAME)
    }

    /// Removes the named rules. Names that match no rule are reported at warn level.
    pub fn set_active_rules(&mut self, disable_rules: &[String]) {
        if disable_rules.is_empty() {
            return;
        }
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();
        let all_rule_names: HashSet<&str> = self.patterns.iter().map(|r| r.name.as_str()).collect();

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable` list does not exist.", rule_name);
        }

        debug!("Rules count before filtering: {}", self.patterns.len());
        self.patterns.retain(|rule| !disable_set.contains(rule.name.as_str()));
        debug!("Active rules count after filtering: {}", self.patterns.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_description_and_entries_in_order() {
        let yaml = r#"
title: "test rules"
description: "rules for tests"
patterns:
  - name: first
    regex: 'abc'
    description: "first rule"
  - name: second
    regex: 'def'
"#;
        let config = RuleSetConfig::from_yaml_str(yaml, "inline").unwrap();
        assert_eq!(config.title, "test rules");
        assert_eq!(config.description, "rules for tests");
        let names: Vec<&str> = config.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(config.patterns[1].description, "");
    }

    #[test]
    fn malformed_entries_are_skipped_individually() {
        let yaml = r#"
title: "mixed"
patterns:
  - name: good
    regex: 'ok'
  - "just a string"
  - name: no-regex
  - regex: 'no-name'
  - name: wrong-type
    regex: [1, 2]
  - name: ""
    regex: 'blank-name'
  - name: also-good
    regex: 'fine'
"#;
        let config = RuleSetConfig::from_yaml_str(yaml, "inline").unwrap();
        let names: Vec<&str> = config.patterns.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["good", "also-good"]);
    }

    #[test]
    fn unparseable_document_is_a_config_error() {
        let err = RuleSetConfig::from_yaml_str("patterns: [unclosed", "broken").unwrap_err();
        assert!(matches!(err, SanitizerError::ConfigError(ref name, _) if name == "broken"));
    }

    #[test]
    fn missing_patterns_key_yields_empty_set() {
        let config = RuleSetConfig::from_yaml_str("title: empty\n", "inline").unwrap();
        assert!(config.patterns.is_empty());
    }

    #[test]
    fn embedded_rules_parse() {
        let config = RuleSetConfig::load_default_rules().unwrap();
        assert!(!config.title.is_empty());
        assert!(config.patterns.len() >= 15);
    }

    #[test]
    fn set_active_rules_removes_disabled_names() {
        let mut config = RuleSetConfig {
            title: String::new(),
            description: String::new(),
            patterns: vec![
                RuleEntry { name: "a".into(), regex: "a".into(), description: String::new() },
                RuleEntry { name: "b".into(), regex: "b".into(), description: String::new() },
            ],
        };
        config.set_active_rules(&["a".to_string(), "missing".to_string()]);
        assert_eq!(config.patterns.len(), 1);
        assert_eq!(config.patterns[0].name, "b");
    }
}
