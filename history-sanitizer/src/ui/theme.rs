//! Module for managing the terminal color theme.
//!
//! Every styled element of the report (headers, finding labels, previews,
//! summary cells) maps to a `ThemeEntry`. Users can recolor any of them with
//! a YAML file passed through `--theme`; entries missing from the file keep
//! their default color.

use anyhow::{Context, Result};
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Type alias for the theme map, providing a consistent type definition.
pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The different logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    /// Section titles such as the summary heading.
    Header,
    /// Successful operation messages.
    Success,
    /// General informational messages.
    Info,
    /// Warning messages.
    Warn,
    /// Error messages.
    Error,
    /// The `Finding #n` line and the field labels under it.
    FindingLabel,
    /// Masked previews and placeholders.
    RedactedText,
    /// Raw matched values, shown only in verbose mode.
    SecretText,
    /// Group headings in `list-rules`.
    RuleGroup,
    /// Rule names in summaries and listings.
    SummaryRuleName,
    /// Occurrence counts in summaries.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 11] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::FindingLabel,
        ThemeEntry::RedactedText,
        ThemeEntry::SecretText,
        ThemeEntry::RuleGroup,
        ThemeEntry::SummaryRuleName,
        ThemeEntry::SummaryOccurrences,
    ];

    fn default_color(self) -> &'static str {
        match self {
            ThemeEntry::Header => "brightcyan",
            ThemeEntry::Success => "green",
            ThemeEntry::Info => "white",
            ThemeEntry::Warn => "yellow",
            ThemeEntry::Error => "red",
            ThemeEntry::FindingLabel => "brightyellow",
            ThemeEntry::RedactedText => "green",
            ThemeEntry::SecretText => "brightred",
            ThemeEntry::RuleGroup => "brightblue",
            ThemeEntry::SummaryRuleName => "magenta",
            ThemeEntry::SummaryOccurrences => "cyan",
        }
    }
}

/// Represents an ANSI color that can be used in the theme.
///
/// Theme files are validated on load: an unknown color name fails parsing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThemeColor {
    /// A named ANSI color (e.g., "red", "brightgreen").
    Named(String),
}

/// Error type for parsing an invalid `ThemeColor` string.
#[derive(Debug, Clone)]
pub struct ParseThemeColorError;

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Invalid theme color; expected one of: black, red, green, yellow, blue, \
            magenta, cyan, white, brightblack, brightred, brightgreen, brightyellow, \
            brightblue, brightmagenta, brightcyan, brightwhite."
        )
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "black" | "red" | "green" | "yellow" | "blue" | "magenta" | "cyan" | "white"
            | "brightblack" | "brightred" | "brightgreen" | "brightyellow" | "brightblue"
            | "brightmagenta" | "brightcyan" | "brightwhite" => Ok(ThemeColor::Named(lower)),
            _ => Err(ParseThemeColorError),
        }
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        match color {
            ThemeColor::Named(name) => name,
        }
    }
}

impl ThemeColor {
    /// Converts the color into its `owo_colors::AnsiColors` counterpart.
    /// Unknown names render as white.
    pub fn to_ansi_color(&self) -> AnsiColors {
        match self {
            ThemeColor::Named(name) => match name.to_lowercase().as_str() {
                "black" => AnsiColors::Black,
                "red" => AnsiColors::Red,
                "green" => AnsiColors::Green,
                "yellow" => AnsiColors::Yellow,
                "blue" => AnsiColors::Blue,
                "magenta" => AnsiColors::Magenta,
                "cyan" => AnsiColors::Cyan,
                "white" => AnsiColors::White,
                "brightblack" => AnsiColors::BrightBlack,
                "brightred" => AnsiColors::BrightRed,
                "brightgreen" => AnsiColors::BrightGreen,
                "brightyellow" => AnsiColors::BrightYellow,
                "brightblue" => AnsiColors::BrightBlue,
                "brightmagenta" => AnsiColors::BrightMagenta,
                "brightcyan" => AnsiColors::BrightCyan,
                "brightwhite" => AnsiColors::BrightWhite,
                _ => AnsiColors::White,
            },
        }
    }
}

/// Represents the style configuration for a specific `ThemeEntry`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeStyle {
    /// An optional `ThemeColor` to apply as the foreground color.
    pub fg: Option<ThemeColor>,
}

/// Loads a theme configuration from a YAML file or returns the default theme.
pub fn build_theme_map(theme_path: Option<&PathBuf>) -> Result<ThemeMap> {
    if let Some(path) = theme_path {
        ThemeStyle::load_from_file(path)
    } else {
        Ok(ThemeStyle::default_theme_map())
    }
}

impl ThemeStyle {
    /// Loads a theme from a YAML file on disk and fills the gaps with default styles.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let custom: ThemeMap = serde_yaml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        let mut theme = Self::default_theme_map();
        theme.extend(custom);
        Ok(theme)
    }

    /// Returns a default theme map with predefined color mappings.
    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .iter()
            .map(|entry| {
                (
                    *entry,
                    ThemeStyle {
                        fg: Some(ThemeColor::Named(entry.default_color().into())),
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert!("BrightGreen".parse::<ThemeColor>().is_ok());
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn to_ansi_color_roundtrip() {
        let tc: ThemeColor = "blue".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::Blue);
        let tc: ThemeColor = "brightmagenta".parse().unwrap();
        assert_eq!(tc.to_ansi_color(), AnsiColors::BrightMagenta);
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(theme.get(&entry).and_then(|s| s.fg.as_ref()).is_some(), "{:?}", entry);
        }
    }

    #[test]
    fn theme_file_overrides_only_named_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "secret_text:\n  fg: blue\nheader:\n  fg: brightwhite").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(theme[&ThemeEntry::SecretText].fg, Some(ThemeColor::Named("blue".into())));
        assert_eq!(theme[&ThemeEntry::Header].fg, Some(ThemeColor::Named("brightwhite".into())));
        assert_eq!(theme[&ThemeEntry::Warn].fg, Some(ThemeColor::Named("yellow".into())));
        assert_eq!(theme.len(), ThemeEntry::ALL.len());
    }

    #[test]
    fn unknown_color_in_theme_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "header:\n  fg: purple").unwrap();
        let err = ThemeStyle::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse theme file"));
        assert!(format!("{:#}", err).contains("Invalid theme color"));
    }

    #[test]
    fn theme_color_names_are_normalized_on_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "warn:\n  fg: BrightYellow").unwrap();
        let theme = ThemeStyle::load_from_file(file.path()).unwrap();
        assert_eq!(theme[&ThemeEntry::Warn].fg, Some(ThemeColor::Named("brightyellow".into())));
    }

    #[test]
    fn unreadable_theme_file_is_an_error() {
        let err = build_theme_map(Some(&PathBuf::from("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read theme file"));
    }
}
