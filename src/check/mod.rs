//! Script documentation validation.
//!
//! This module contains the whole of the checker:
//!
//! - **Classification** - Expected command names and script kinds
//!   ([`expected_command`], [`ScriptKind`])
//! - **Rules** - The leading-comment and documentation-block checks
//!   ([`CheckRule`] implementations in [`rules`])
//! - **Diagnostics** - Per-file issue reports ([`Diagnostic`], [`FileReport`])
//! - **Driver** - Tree traversal and aggregation ([`check_tree`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use scriptlint::check::{check_script, expected_command, ScriptFile};
//!
//! assert_eq!(expected_command(Path::new("scripts/devel/foo.lua")), "devel/foo");
//!
//! let script = ScriptFile::from_source(Path::new("scripts/foo.rb"), "puts 1\n");
//! let report = check_script(&script);
//! assert_eq!(report.error_count(), 2);
//! ```

pub mod command;
pub mod diagnostic;
pub mod file;
pub mod rule;
pub mod rules;
pub mod walk;

pub use command::{expected_command, ScriptKind, DOC_BEGIN, DOC_END};
pub use diagnostic::{Diagnostic, FileReport, Severity};
pub use file::{check_file, check_script, ScriptFile};
pub use rule::{CheckRule, RuleId};
pub use rules::{DocBlockRule, LeadingCommentRule};
pub use walk::{check_tree, CheckSummary, VENDOR_SEGMENT};
