//! Report printing for finished commands.
//!
//! Separate from core logic to allow haf-tools to be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary};
use crate::core::LocalizeSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the outcome of a command to stdout.
pub fn print(result: &CommandResult, quiet: bool) {
    if quiet {
        return;
    }
    match &result.summary {
        CommandSummary::Localize(summary) => {
            print_localize_summary_to(summary, &mut io::stdout().lock())
        }
    }
}

/// Print a localize summary to a custom writer.
pub fn print_localize_summary_to<W: Write>(summary: &LocalizeSummary, writer: &mut W) {
    let files = summary.file_count();
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} {} from {} {} to {}",
            summary.entry_count,
            plural(summary.entry_count, "entry", "entries"),
            files,
            plural(files, "file", "files"),
            summary.target_file_path.display()
        )
        .green()
    );

    if summary.duplicate_count > 0 {
        let _ = writeln!(
            writer,
            "  {} {} duplicate {} skipped",
            "note:".bold(),
            summary.duplicate_count,
            plural(summary.duplicate_count, "text", "texts")
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
