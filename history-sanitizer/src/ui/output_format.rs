//! Themed message helpers shared by every command.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Applies the theme color for `entry` to `text`. Without color support the
/// text is returned unchanged.
pub fn styled(text: &str, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

pub fn print_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    entry: ThemeEntry,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer, "{}", styled(msg, entry, theme, enable_colors))
}

pub fn print_info_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Info, theme, enable_colors)
}

pub fn print_success_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, msg, ThemeEntry::Success, theme, enable_colors)
}

pub fn print_warn_message<W: Write + ?Sized>(
    writer: &mut W,
    msg: &str,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_message(writer, &format!("Warning: {}", msg), ThemeEntry::Warn, theme, enable_colors)
}
