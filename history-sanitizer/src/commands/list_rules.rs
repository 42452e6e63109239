//! `list-rules`: prints every active rule, grouped by the family prefix of
//! its name (`aws-access-token` belongs to `aws`).

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

use history_sanitizer_core::{RuleInfo, RuleRegistry};

use crate::ui::output_format::{self, styled};
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// The family a rule belongs to: the part of its name before the first `-`.
/// Names without a usable prefix go to `other`.
pub fn rule_family(name: &str) -> &str {
    match name.find('-') {
        Some(index) if index > 0 => &name[..index],
        _ => "other",
    }
}

/// Sorts rules by name and buckets them by family. Families come out sorted.
pub fn group_rules(mut rules: Vec<RuleInfo>) -> BTreeMap<String, Vec<RuleInfo>> {
    rules.sort_by(|a, b| a.name.cmp(&b.name));
    let mut groups: BTreeMap<String, Vec<RuleInfo>> = BTreeMap::new();
    for rule in rules {
        groups
            .entry(rule_family(&rule.name).to_string())
            .or_default()
            .push(rule);
    }
    groups
}

pub fn run_list_rules<W: Write + ?Sized>(
    registry: &RuleRegistry,
    writer: &mut W,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> Result<()> {
    output_format::print_message(writer, "Detection Rules", ThemeEntry::Header, theme_map, enable_colors)?;
    if registry.is_fallback() {
        output_format::print_warn_message(
            writer,
            "the configured rules could not be loaded; showing the built-in fallback set",
            theme_map,
            enable_colors,
        )?;
    }
    writeln!(
        writer,
        "Total rules: {}\n",
        styled(&registry.len().to_string(), ThemeEntry::SummaryOccurrences, theme_map, enable_colors)
    )?;

    for (family, rules) in group_rules(registry.list_rules()) {
        writeln!(writer, "{}:", styled(&family, ThemeEntry::RuleGroup, theme_map, enable_colors))?;
        for rule in rules {
            let name = styled(&rule.name, ThemeEntry::SummaryRuleName, theme_map, enable_colors);
            if rule.description.is_empty() {
                writeln!(writer, "  • {}", name)?;
            } else {
                writeln!(writer, "  • {}: {}", name, rule.description)?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
