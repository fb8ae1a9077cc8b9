//! Script loading and per-file validation.
//!
//! A [`ScriptFile`] is one script read fully into memory; both rules need
//! the whole line sequence (the first line for the summary check, a scan
//! with begin/end markers for the documentation check), so lines are
//! materialized rather than streamed. [`check_file`] is the entry point
//! the driver calls per path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::command::ScriptKind;
use super::diagnostic::FileReport;
use super::rules;

/// A script file loaded into memory for validation.
#[derive(Debug)]
pub struct ScriptFile {
    path: PathBuf,
    kind: ScriptKind,
    lines: Vec<String>,
}

impl ScriptFile {
    /// Read a script from disk.
    ///
    /// Decoding is deliberately lenient: invalid UTF-8 sequences are
    /// replaced instead of failing the read, so a stray byte in a script
    /// cannot break the whole run. I/O failures still propagate.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let source = String::from_utf8_lossy(&bytes);
        Ok(Self::from_source(path, &source))
    }

    /// Build a script from in-memory source. Used by `load` and by tests.
    pub fn from_source(path: &Path, source: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: ScriptKind::from_path(path),
            lines: source.lines().map(str::to_owned).collect(),
        }
    }

    /// The script's path, as handed to the validator.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The scripting variant, derived from the extension.
    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    /// All lines of the file, in order, without line endings.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The first line, if the file has one.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

/// Validate a single script file on disk.
pub fn check_file(path: &Path) -> Result<FileReport> {
    let script = ScriptFile::load(path)?;
    Ok(check_script(&script))
}

/// Run every rule against an in-memory script.
pub fn check_script(script: &ScriptFile) -> FileReport {
    let mut report = FileReport::new();
    for rule in rules::builtin_rules() {
        report.extend(rule.check(script));
    }
    report
}
