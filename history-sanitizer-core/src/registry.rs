//! registry.rs - The process-wide, read-only set of active detection rules.
//!
//! A `RuleRegistry` is built once from a declarative rule source and then
//! shared behind an `Arc`. Loading never leaves the scanner without rules:
//! when the source is unreadable, malformed, or compiles to nothing, the
//! registry falls back to a small built-in set.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::{debug, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::config::{RuleEntry, RuleSetConfig};
use crate::errors::SanitizerError;
use crate::sanitizers::compiler::{compile_rules, CompiledRule};

/// Built-in rules used when no rule source yields a usable rule.
const FALLBACK_RULES: &[(&str, &str, &str)] = &[
    (
        "aws-access-token",
        r"(AKIA|ASIA)[A-Z0-9]{16}",
        "AWS Access Token",
    ),
    (
        "github-pat",
        r"ghp_[0-9a-zA-Z]{36}",
        "GitHub Personal Access Token",
    ),
    (
        "jwt",
        r"eyJ[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}",
        "JSON Web Token",
    ),
];

const FALLBACK_TITLE: &str = "built-in fallback rules";

lazy_static! {
    /// The registry built from the embedded rule source, compiled on first use.
    static ref DEFAULT_REGISTRY: Arc<RuleRegistry> = Arc::new(RuleRegistry::load_default());
}

/// Returns the shared registry built from the embedded default rules.
///
/// The first call compiles the rules; every later call returns the same instance.
pub fn default_registry() -> Arc<RuleRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// A name and description pair, as shown by listing surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    pub name: String,
    pub description: String,
}

/// An ordered, immutable collection of compiled rules.
#[derive(Debug)]
pub struct RuleRegistry {
    title: String,
    description: String,
    rules: Vec<CompiledRule>,
    fallback: bool,
}

impl RuleRegistry {
    /// Compiles a parsed rule source.
    ///
    /// Fails with `ConfigError` when no entry compiles. Entries that fail to
    /// compile are skipped with a warning.
    pub fn compile(config: &RuleSetConfig, source_name: &str) -> Result<Self, SanitizerError> {
        let rules = compile_rules(&config.patterns);
        if rules.is_empty() {
            return Err(SanitizerError::ConfigError(
                source_name.to_string(),
                "no usable rules".to_string(),
            ));
        }
        info!("Registry '{}' ready with {} rules.", config.title, rules.len());
        Ok(Self {
            title: config.title.clone(),
            description: config.description.clone(),
            rules,
            fallback: false,
        })
    }

    /// Parses and compiles a YAML rule source.
    pub fn load(source: &str, source_name: &str) -> Result<Self, SanitizerError> {
        let config = RuleSetConfig::from_yaml_str(source, source_name)?;
        Self::compile(&config, source_name)
    }

    /// Like [`RuleRegistry::load`], but degrades to the fallback rules on any failure.
    pub fn load_or_fallback(source: &str, source_name: &str) -> Self {
        Self::load(source, source_name).unwrap_or_else(Self::fallback_after)
    }

    /// Loads and compiles a YAML rule file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SanitizerError> {
        let path = path.as_ref();
        let config = RuleSetConfig::load_from_file(path)?;
        Self::compile(&config, &path.display().to_string())
    }

    /// Like [`RuleRegistry::from_file`], but degrades to the fallback rules on any failure.
    pub fn from_file_or_fallback<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_else(Self::fallback_after)
    }

    /// Builds the registry from the embedded rule source, falling back on failure.
    pub fn load_default() -> Self {
        RuleSetConfig::load_default_rules()
            .and_then(|config| Self::compile(&config, crate::config::EMBEDDED_SOURCE_NAME))
            .unwrap_or_else(Self::fallback_after)
    }

    /// The minimal built-in rule set.
    pub fn fallback() -> Self {
        let entries: Vec<RuleEntry> = FALLBACK_RULES
            .iter()
            .map(|(name, regex, description)| RuleEntry {
                name: (*name).to_string(),
                regex: (*regex).to_string(),
                description: (*description).to_string(),
            })
            .collect();
        Self {
            title: FALLBACK_TITLE.to_string(),
            description: String::new(),
            rules: compile_rules(&entries),
            fallback: true,
        }
    }

    fn fallback_after(err: SanitizerError) -> Self {
        warn!("{}; using built-in fallback rules.", err);
        Self::fallback()
    }

    /// Builds a registry directly from compiled rules, keeping their order.
    pub fn from_rules(title: &str, rules: Vec<CompiledRule>) -> Self {
        debug!("Registry '{}' built from {} injected rules.", title, rules.len());
        Self {
            title: title.to_string(),
            description: String::new(),
            rules,
            fallback: false,
        }
    }

    /// The active rules in registration order.
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// Finds a rule by name. With duplicate names the last registered rule wins.
    pub fn lookup(&self, name: &str) -> Option<&CompiledRule> {
        self.rules.iter().rev().find(|rule| rule.name == name)
    }

    /// Names and descriptions of every active rule, in registration order.
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo {
                name: rule.name.clone(),
                description: rule.description.clone(),
            })
            .collect()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when the built-in fallback rules are active.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}
