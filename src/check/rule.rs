//! Check rule definitions.
//!
//! This module provides the core trait and identifier type for validation
//! rules:
//!
//! - [`CheckRule`] - The trait that all rules implement
//! - [`RuleId`] - Unique identifier for a rule

use super::diagnostic::Diagnostic;
use super::file::ScriptFile;

/// Unique identifier for a check rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rule that validates one aspect of a script's documentation.
///
/// Each rule inspects the in-memory script and produces diagnostics for
/// problems it finds. Rules are independent; the validator runs them in
/// order and accumulates their diagnostics into the file's report.
pub trait CheckRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the script and return any diagnostics.
    fn check(&self, script: &ScriptFile) -> Vec<Diagnostic>;
}
