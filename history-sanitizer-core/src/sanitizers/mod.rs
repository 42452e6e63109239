//! Rule compilation and the text transformations applied to matches.
//!
//! * `compiler` turns rule entries into compiled regexes, skipping bad ones.
//! * `redactor` splices placeholders into the content by stored offsets.
//! * `obfuscation` derives placeholders and display previews from matched values.

pub mod compiler;
pub mod obfuscation;
pub mod redactor;
