//! errors.rs - Custom error types for the history-sanitizer-core library.
//!
//! This module defines a structured error enum for the library. Only
//! `ScanError` and `IoError` ever reach a caller of the scan path; the rule
//! loading variants are logged and absorbed by the registry, which degrades
//! to the built-in fallback set instead of failing.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised by the `history-sanitizer-core` library.
///
/// Marked `#[non_exhaustive]` so that new variants can be added without
/// breaking downstream `match` expressions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitizerError {
    /// The declarative rule source is missing, unreadable or malformed,
    /// or it produced no usable rule at all.
    #[error("Invalid rule configuration '{0}': {1}")]
    ConfigError(String, String),

    /// A single rule's regular expression failed to compile.
    #[error("Failed to compile pattern for rule '{0}': {1}")]
    PatternCompileError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    /// The input could not be decoded as UTF-8 text.
    #[error("Input is not valid UTF-8 text: {0}")]
    ScanError(#[from] std::str::Utf8Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
