//! Report formatting and printing utilities.
//!
//! This module prints diagnostics in cargo-style format. Kept apart from the
//! core so glotgen can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, GenerateSummary, LocaleStats};
use crate::config::CONFIG_FILE_NAME;
use crate::core::parsers::json::LocaleScanWarning;
use crate::diagnostics::{Diagnostic, Render};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print diagnostics in cargo-style format to stdout.
pub fn report(diagnostics: &[Diagnostic]) {
    report_to(diagnostics, &mut io::stdout().lock());
}

/// Print diagnostics to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(diagnostics: &[Diagnostic], writer: &mut W) {
    if diagnostics.is_empty() {
        return;
    }

    for diagnostic in diagnostics {
        print_diagnostic(diagnostic, writer);
    }

    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        diagnostics.len(),
        if diagnostics.len() == 1 {
            "problem"
        } else {
            "problems"
        }
        .red()
    );
}

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: {}  {}",
        "error".bold().red(),
        diagnostic.message(),
        diagnostic.kind().to_string().dimmed().cyan()
    );

    if let Some(note) = diagnostic.note() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note);
    }

    let _ = writeln!(writer);
}

/// Print a success line for a clean run.
pub fn print_success_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let locale_files = format!(
        "{} locale {}",
        result.locale_files_checked,
        if result.locale_files_checked == 1 {
            "file"
        } else {
            "files"
        }
    );

    match &result.summary {
        CommandSummary::Check => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Checked {} - no issues found", locale_files).green()
            );
        }
        CommandSummary::Generate(GenerateSummary { written }) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Generated {} {} from {}:",
                    written.len(),
                    if written.len() == 1 { "file" } else { "files" },
                    locale_files
                )
                .green()
            );
            for path in written {
                let _ = writeln!(writer, "  {}", path.display());
            }
        }
        CommandSummary::Init(summary) => {
            if summary.created {
                let _ = writeln!(
                    writer,
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!("Created {}", CONFIG_FILE_NAME).green()
                );
            }
        }
    }
}

/// Print locale files that could not be used. These fail the command, so
/// nothing was generated.
///
/// Without `verbose`, only a count is shown.
pub fn print_unreadable_to<W: Write>(warnings: &[LocaleScanWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }

    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "error:".bold().red(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} locale file(s) could not be parsed (use {} for details)",
            "error:".bold().red(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

/// Print message counts per locale.
pub fn print_stats_to<W: Write>(stats: &[LocaleStats], writer: &mut W) {
    for stat in stats {
        let _ = writeln!(
            writer,
            "  {} {} {}",
            format!("{}:", stat.locale).bold(),
            stat.message_count,
            if stat.message_count == 1 {
                "message"
            } else {
                "messages"
            }
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stderr = io::stderr().lock();
    print_unreadable_to(&result.warnings, verbose, &mut stderr);
    if verbose {
        print_stats_to(&result.stats, &mut stderr);
    }

    if result.error_count() == 0 {
        print_success_to(result, &mut io::stdout().lock());
    } else {
        report(&result.diagnostics);
    }
}
