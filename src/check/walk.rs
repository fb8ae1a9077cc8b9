//! Tree traversal driver.
//!
//! Walks a scripts directory, feeds every recognized script file to the
//! validator, writes diagnostics as they are produced, and folds the
//! per-file error counts into a [`CheckSummary`].

use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Result;

use super::command::ScriptKind;
use super::file::check_file;

/// Path segment marking third-party code, which is exempt from checks.
pub const VENDOR_SEGMENT: &str = "3rdparty";

/// Aggregate result of a whole-tree check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Number of script files validated.
    pub files_checked: usize,
    /// Sum of per-file error counts (warnings included).
    pub errors: usize,
}

impl CheckSummary {
    /// Whether every file passed.
    pub fn passed(&self) -> bool {
        self.errors == 0
    }
}

/// Validate every script under `root`, writing diagnostics to `out`.
///
/// Files are checked sequentially and independently; each file is fully
/// read and closed before the next one is opened. Traversal order is
/// sorted so reruns produce identical output.
pub fn check_tree(root: &Path, out: &mut impl Write) -> Result<CheckSummary> {
    let mut summary = CheckSummary {
        files_checked: 0,
        errors: 0,
    };

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_script(path) || in_vendor_tree(path) {
            continue;
        }

        tracing::debug!("checking {}", path.display());
        let report = check_file(path)?;
        for diagnostic in report.diagnostics() {
            writeln!(out, "{}", diagnostic)?;
        }

        summary.files_checked += 1;
        summary.errors += report.error_count();
    }

    Ok(summary)
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .and_then(ScriptKind::from_extension)
        .is_some()
}

fn in_vendor_tree(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == VENDOR_SEGMENT)
}
