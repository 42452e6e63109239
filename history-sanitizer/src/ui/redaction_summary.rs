//! Renders the per-rule summary table printed after the finding report.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use owo_colors::AnsiColors;
use std::io::{self, Write};

use history_sanitizer_core::RedactionSummaryItem;

use crate::ui::output_format;
use crate::ui::theme::{ThemeEntry, ThemeMap};

fn table_color(theme: &ThemeMap, entry: ThemeEntry) -> Option<Color> {
    let color = theme.get(&entry)?.fg.as_ref()?.to_ansi_color();
    let index = match color {
        AnsiColors::Black => 0,
        AnsiColors::Red => 1,
        AnsiColors::Green => 2,
        AnsiColors::Yellow => 3,
        AnsiColors::Blue => 4,
        AnsiColors::Magenta => 5,
        AnsiColors::Cyan => 6,
        AnsiColors::BrightBlack => 8,
        AnsiColors::BrightRed => 9,
        AnsiColors::BrightGreen => 10,
        AnsiColors::BrightYellow => 11,
        AnsiColors::BrightBlue => 12,
        AnsiColors::BrightMagenta => 13,
        AnsiColors::BrightCyan => 14,
        AnsiColors::BrightWhite => 15,
        _ => 7,
    };
    Some(Color::AnsiValue(index))
}

fn themed_cell(text: String, entry: ThemeEntry, theme: &ThemeMap, enable_colors: bool) -> Cell {
    let cell = Cell::new(text);
    match table_color(theme, entry) {
        Some(color) if enable_colors => cell.fg(color),
        _ => cell,
    }
}

/// Builds the summary table: one row per rule, then a total row.
pub fn build_summary_table(
    summary: &[RedactionSummaryItem],
    theme: &ThemeMap,
    enable_colors: bool,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Occurrences", "Lines"]);
    if !enable_colors {
        table.force_no_tty();
    }

    for item in summary {
        let lines = item
            .lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            themed_cell(item.rule_name.clone(), ThemeEntry::SummaryRuleName, theme, enable_colors),
            themed_cell(item.occurrences.to_string(), ThemeEntry::SummaryOccurrences, theme, enable_colors),
            Cell::new(lines),
        ]);
    }

    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    table.add_row(vec![Cell::new("Total"), Cell::new(total.to_string()), Cell::new("")]);
    table
}

/// Prints the redaction summary under a themed heading.
pub fn print_summary<W: Write + ?Sized>(
    summary: &[RedactionSummaryItem],
    writer: &mut W,
    theme: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(writer)?;
    output_format::print_message(writer, "Redaction Summary", ThemeEntry::Header, theme, enable_colors)?;
    writeln!(writer, "{}", build_summary_table(summary, theme, enable_colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn item(rule: &str, occurrences: usize, lines: Vec<usize>) -> RedactionSummaryItem {
        RedactionSummaryItem {
            rule_name: rule.to_string(),
            occurrences,
            lines,
        }
    }

    #[test]
    fn table_lists_each_rule_and_a_total() {
        let theme = ThemeStyle::default_theme_map();
        let summary = vec![item("aws-access-token", 2, vec![3, 7]), item("jwt", 1, vec![5])];
        let mut buf = Vec::new();
        print_summary(&summary, &mut buf, &theme, false).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Redaction Summary"));
        assert!(text.contains("aws-access-token"));
        assert!(text.contains("3, 7"));
        assert!(text.contains("jwt"));
        assert!(text.contains("Total"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn total_row_sums_occurrences() {
        let theme = ThemeStyle::default_theme_map();
        let summary = vec![item("a", 2, vec![1]), item("b", 3, vec![2])];
        let table = build_summary_table(&summary, &theme, false);
        let rendered = table.to_string();
        let total_line = rendered.lines().find(|l| l.contains("Total")).unwrap();
        assert!(total_line.contains('5'));
    }
}
