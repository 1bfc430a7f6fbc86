//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic to allow hookcheck
//! to be used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::report::AnalysisReport;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the analysis report to stdout: a summary block followed by, per
/// offending file, every hook call with its identifier lists.
pub fn print_report(report: &AnalysisReport) {
    print_report_to(report, &mut io::stdout().lock());
}

/// Print the analysis report to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_report_to<W: Write>(report: &AnalysisReport, writer: &mut W) {
    let summary = &report.summary;
    let _ = writeln!(writer, "Files scanned:        {}", summary.files_scanned);
    let _ = writeln!(writer, "Files with issues:    {}", summary.files_with_issues);
    let _ = writeln!(writer, "Hooks analyzed:       {}", summary.hooks_analyzed);
    let _ = writeln!(
        writer,
        "Missing dependencies: {}",
        summary.total_missing_dependencies
    );

    for file in &report.files {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), file.path.bold());

        for hook in &file.hooks {
            let _ = writeln!(
                writer,
                "  {} {}  {}",
                "line".dimmed(),
                hook.line.to_string().blue(),
                hook.kind.to_string().cyan()
            );
            let _ = writeln!(
                writer,
                "      referenced: {}",
                hook.referenced_identifiers.join(", ")
            );
            let _ = writeln!(
                writer,
                "      declared:   {}",
                if hook.declared_dependencies.is_empty() {
                    "(none)".dimmed().to_string()
                } else {
                    hook.declared_dependencies.join(", ")
                }
            );
            let _ = writeln!(
                writer,
                "      missing:    {}",
                hook.missing_dependencies.join(", ").red()
            );
        }
    }

    if summary.total_missing_dependencies > 0 {
        let _ = writeln!(
            writer,
            "\n{} {} missing {} in {} {}",
            FAILURE_MARK.red(),
            summary.total_missing_dependencies,
            if summary.total_missing_dependencies == 1 {
                "dependency"
            } else {
                "dependencies"
            }
            .red(),
            summary.files_with_issues,
            if summary.files_with_issues == 1 {
                "file"
            } else {
                "files"
            }
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence that
/// the scan actually ran and covered the expected scope.
pub fn print_success(files_scanned: usize) {
    print_success_to(files_scanned, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(files_scanned: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} component {} - no missing dependencies found",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
///
/// This is shown at the end of a run when files were skipped.
pub fn print_parse_warning(parse_error_count: usize, verbose: bool) {
    print_parse_warning_to(parse_error_count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(parse_error_count: usize, verbose: bool, writer: &mut W) {
    if parse_error_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_error_count,
            "-v".cyan()
        );
    }
}
