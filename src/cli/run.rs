use std::path::PathBuf;

use anyhow::Result;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::{
    config::load_config,
    core::report::{scan_directory, write_json_report},
    reporter,
};

/// Main entry point for the hookcheck CLI.
///
/// Loads configuration, scans the target directory, prints the console
/// report, and optionally writes the JSON report.
///
/// # Returns
/// - `Ok(ExitStatus::Failure)` when missing dependencies were found
/// - `Ok(ExitStatus::Success)` when the tree is clean
/// - `Err` on fatal errors (nonexistent scan root, unwritable report)
pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd)?.config;

    let root: PathBuf = args
        .target
        .unwrap_or_else(|| PathBuf::from(&config.source_root));

    let outcome = scan_directory(&root, &config, args.verbose)?;

    reporter::print_report(&outcome.report);
    if outcome.report.files.is_empty() {
        reporter::print_success(outcome.report.summary.files_scanned);
    }
    reporter::print_parse_warning(outcome.parse_error_count, args.verbose);

    if let Some(path) = &args.json {
        write_json_report(&outcome.report, path)?;
    }

    if outcome.report.summary.total_missing_dependencies > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
