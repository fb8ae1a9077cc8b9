//! Error types for scriptlint operations.
//!
//! This module defines [`ScriptlintError`], the error type for fatal
//! failures, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Validation findings are never errors of this type; they become
//! [`Diagnostic`](crate::check::Diagnostic) values and exit-code counts.
//! Only I/O and traversal failures (unreadable file, missing root) abort
//! the run.

use thiserror::Error;

/// Core error type for scriptlint operations.
#[derive(Debug, Error)]
pub enum ScriptlintError {
    /// Failed to read a script or write diagnostics.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for scriptlint operations.
pub type Result<T> = std::result::Result<T, ScriptlintError>;
