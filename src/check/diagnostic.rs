//! Check diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for issues found while
//! validating a script, and the per-file [`FileReport`] that accumulates
//! them.

use std::fmt;

/// Severity of a diagnostic.
///
/// Note that warnings count toward the error total exactly like errors;
/// the softer wording is cosmetic. A title mismatch still fails CI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Reported with softer wording, but still fails the check.
    Warning,
    /// A violation of the documentation convention.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

/// A single issue found in a script file.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message, without the severity prefix.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Accumulated validation result for a single file.
///
/// Replaces a process-wide mutable counter with an explicit value: each
/// file yields one report, and the driver folds the counts into a total.
#[derive(Debug, Default)]
pub struct FileReport {
    diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic to this report.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add all diagnostics from an iterator.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// All diagnostics, in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The error count for this file. Warnings are counted too.
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the file passed every check.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
