use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Directory names that never contain first-party component sources.
pub const EXCLUDED_DIR_NAMES: &[&str] = &[
    "node_modules",
    ".next",
    ".git",
    "dist",
    "build",
    "out",
    "coverage",
    "__tests__",
    "__mocks__",
];

/// Recursively enumerate component source files under `root`.
///
/// Skips any directory whose name is in [`EXCLUDED_DIR_NAMES`], plus paths
/// matching the user's ignore globs and, when `ignore_test_files` is set,
/// the conventional test-file patterns. The result is sorted so repeated
/// scans of an unchanged tree produce identical reports.
pub fn scan_files(
    root: &Path,
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> Vec<PathBuf> {
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        match Pattern::new(p) {
            Ok(pattern) => glob_patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
            }
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let mut files: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        !(entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| EXCLUDED_DIR_NAMES.contains(&name)))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() || !is_component_file(path) {
            continue;
        }
        let path_str = path.to_string_lossy();
        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    files
}

fn is_component_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx")
    )
}
