// history-sanitizer/src/lib.rs
//! # history-sanitizer CLI Application
//!
//! The terminal front end for `history-sanitizer-core`: argument parsing,
//! file handling, the themed finding report and the summary table.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
