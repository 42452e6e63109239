// history-sanitizer/src/commands/mod.rs
pub mod list_rules;
pub mod sanitize;

use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

use history_sanitizer_core::config::EMBEDDED_SOURCE_NAME;
use history_sanitizer_core::{default_registry, RuleRegistry, RuleSetConfig};

/// Builds the rule registry for this run.
///
/// With no rule file and nothing disabled the shared default registry is
/// reused. Any failure to load or compile the requested rules degrades to
/// the built-in fallback set with a warning.
pub fn load_registry(rules_file: Option<&Path>, disable: &[String]) -> Arc<RuleRegistry> {
    if rules_file.is_none() && disable.is_empty() {
        return default_registry();
    }

    let loaded = match rules_file {
        Some(path) => {
            debug!("Loading rules from {}", path.display());
            RuleSetConfig::load_from_file(path).map(|config| (config, path.display().to_string()))
        }
        None => RuleSetConfig::load_default_rules()
            .map(|config| (config, EMBEDDED_SOURCE_NAME.to_string())),
    };

    let registry = loaded
        .and_then(|(mut config, source_name)| {
            config.set_active_rules(disable);
            RuleRegistry::compile(&config, &source_name)
        })
        .unwrap_or_else(|err| {
            warn!("{}; using built-in fallback rules.", err);
            RuleRegistry::fallback()
        });
    Arc::new(registry)
}
