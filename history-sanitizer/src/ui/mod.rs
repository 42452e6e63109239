// history-sanitizer/src/ui/mod.rs
pub mod findings_report;
pub mod output_format;
pub mod redaction_summary;
pub mod theme;
