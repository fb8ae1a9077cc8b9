//! Scriptlint - CI checker for script documentation headers.
//!
//! Scriptlint validates that every script in a plugin repository's
//! `scripts` directory carries a short leading summary comment and a
//! documentation block whose title matches the command name derived from
//! the script's path.
//!
//! # Modules
//!
//! - [`check`] - The validation rules, per-file reports, and tree driver
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use scriptlint::check::{check_script, ScriptFile};
//!
//! let source = "# list stockpile contents\n=begin\n\nfoo\n===\nHelp text.\n\n=end\n";
//! let script = ScriptFile::from_source(Path::new("scripts/foo.rb"), source);
//! assert!(check_script(&script).is_clean());
//! ```

pub mod check;
pub mod cli;
pub mod error;

pub use error::{Result, ScriptlintError};
