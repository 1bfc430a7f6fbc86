//! Per-run aggregation and the machine-readable report.

use std::{
    fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Serialize;

use super::{
    file_scanner::scan_files,
    hooks::{HookCallFinder, HookCallSite},
};
use crate::{config::Config, core::parsers::jsx::parse_source};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Files that parsed successfully, issues or not.
    pub files_scanned: usize,
    pub files_with_issues: usize,
    /// Hook call sites with at least one missing dependency.
    pub hooks_analyzed: usize,
    pub total_missing_dependencies: usize,
}

/// All offending hook calls of one file, path relative to the scan root.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub hooks: Vec<HookCallSite>,
}

/// The full result of one invocation. Not persisted beyond the process:
/// printed to stdout and optionally serialized to a JSON file.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unix timestamp (seconds) of the run.
    pub timestamp: u64,
    pub summary: Summary,
    pub files: Vec<FileReport>,
}

#[derive(Debug)]
pub struct ScanOutcome {
    pub report: AnalysisReport,
    /// Files skipped because they could not be read or parsed.
    pub parse_error_count: usize,
}

/// Scan `root` and aggregate every file's hook analysis into one report.
///
/// A missing or non-directory root is fatal. A single unreadable or
/// unparsable file is not: it is logged and the scan continues.
pub fn scan_directory(root: &Path, config: &Config, verbose: bool) -> Result<ScanOutcome> {
    if !root.is_dir() {
        bail!(
            "scan root '{}' does not exist or is not a directory",
            root.display()
        );
    }

    let files = scan_files(root, &config.ignores, config.ignore_test_files, verbose);

    let mut summary = Summary {
        files_scanned: 0,
        files_with_issues: 0,
        hooks_analyzed: 0,
        total_missing_dependencies: 0,
    };
    let mut reports: Vec<FileReport> = Vec::new();
    let mut parse_error_count = 0;

    for file in &files {
        let display_path = relative_path(file, root);

        let source = match fs::read_to_string(file) {
            Ok(source) => source,
            Err(err) => {
                parse_error_count += 1;
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        display_path,
                        err
                    );
                }
                continue;
            }
        };

        let parsed = match parse_source(source, &display_path) {
            Ok(parsed) => parsed,
            Err(err) => {
                parse_error_count += 1;
                if verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), err);
                }
                continue;
            }
        };

        summary.files_scanned += 1;

        let hooks = HookCallFinder::new(&parsed.source_map).find(&parsed.module);
        if hooks.is_empty() {
            continue;
        }

        summary.files_with_issues += 1;
        summary.hooks_analyzed += hooks.len();
        summary.total_missing_dependencies += hooks
            .iter()
            .map(|h| h.missing_dependencies.len())
            .sum::<usize>();
        reports.push(FileReport {
            path: display_path,
            hooks,
        });
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Ok(ScanOutcome {
        report: AnalysisReport {
            timestamp,
            summary,
            files: reports,
        },
        parse_error_count,
    })
}

/// Write the report as pretty-printed JSON.
pub fn write_json_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(report).context("Failed to serialize analysis report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
    Ok(())
}

fn relative_path(file: &Path, root: &Path) -> String {
    file.strip_prefix(root)
        .unwrap_or(file)
        .to_string_lossy()
        .replace('\\', "/")
}
