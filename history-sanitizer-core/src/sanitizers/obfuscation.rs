//! obfuscation.rs - Placeholder and preview generation for matched secrets.
//!
//! A placeholder is what gets persisted in place of a secret. It is derived
//! from a SHA-256 fingerprint of the matched value plus a category read off
//! the rule name, so the same secret always maps to the same placeholder and
//! a reviewer can spot repeats without ever seeing the value.
//!
//! A preview is for interactive display only and must never be persisted:
//! for values longer than [`PREVIEW_MIN_LEN`] it shows the first and last two
//! characters.
//!
//! License: MIT OR APACHE 2.0

use sha2::{Digest, Sha256};

/// Values at or below this many characters are previewed as their placeholder.
pub const PREVIEW_MIN_LEN: usize = 8;

/// Number of leading digest bytes kept in a fingerprint (8 hex characters).
const FINGERPRINT_BYTES: usize = 4;

/// Coarse kind of secret, decided from the rule name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretCategory {
    Key,
    Token,
    Secret,
    Url,
    Email,
    CreditCard,
    Generic,
}

/// Keyword table evaluated top to bottom against the lowercased rule name;
/// the first row with a matching keyword wins.
const CATEGORY_TABLE: &[(&[&str], SecretCategory)] = &[
    (&["key", "aws"], SecretCategory::Key),
    (&["token", "pat", "oauth"], SecretCategory::Token),
    (&["password", "secret"], SecretCategory::Secret),
    (&["url", "connection", "webhook"], SecretCategory::Url),
    (&["email"], SecretCategory::Email),
    (&["credit", "card"], SecretCategory::CreditCard),
];

impl SecretCategory {
    /// Classifies a rule name by case-insensitive substring match.
    pub fn classify(rule_name: &str) -> Self {
        let lowered = rule_name.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(SecretCategory::Generic)
    }

    fn label(self) -> Option<&'static str> {
        match self {
            SecretCategory::Key => Some("KEY"),
            SecretCategory::Token => Some("TOKEN"),
            SecretCategory::Secret => Some("SECRET"),
            SecretCategory::Url => Some("URL"),
            SecretCategory::Email => Some("EMAIL"),
            SecretCategory::CreditCard | SecretCategory::Generic => None,
        }
    }
}

/// First four bytes of the SHA-256 of `value`, as 8 lowercase hex characters.
pub fn fingerprint(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

/// The deterministic replacement persisted in place of `matched_text`.
pub fn placeholder(matched_text: &str, rule_name: &str) -> String {
    let category = SecretCategory::classify(rule_name);
    if category == SecretCategory::CreditCard {
        return "[REDACTED_CC]".to_string();
    }
    let fp = fingerprint(matched_text);
    match category.label() {
        Some(label) => format!("[REDACTED_{}_{}]", label, fp),
        None => format!("[REDACTED_{}]", fp),
    }
}

/// A short display form of `matched_text`. Never write this to the sanitized output.
pub fn preview(matched_text: &str, rule_name: &str) -> String {
    let char_count = matched_text.chars().count();
    if char_count <= PREVIEW_MIN_LEN {
        return placeholder(matched_text, rule_name);
    }
    let head: String = matched_text.chars().take(2).collect();
    let tail: String = matched_text.chars().skip(char_count - 2).collect();
    format!("{}***{}", head, tail)
}
