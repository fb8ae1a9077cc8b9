//! Documentation block validation.
//!
//! Every script carries a delimited help-text block opened by `=begin` and
//! closed by `=end`. The first two content lines of the block are a title
//! and an `=` underline; the title must equal the command name derived
//! from the script's path.

use crate::check::command::{expected_command, DOC_BEGIN, DOC_END};
use crate::check::diagnostic::Diagnostic;
use crate::check::file::ScriptFile;
use crate::check::rule::{CheckRule, RuleId};

/// Scan state while looking for the documentation block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeDoc,
    InDoc,
    Done,
}

/// Validates presence and structure of the documentation block.
pub struct DocBlockRule;

impl DocBlockRule {
    /// Collect the block's lines, right-trimmed, from the opening marker
    /// line (inclusive) up to the closing marker line (exclusive).
    fn scan<'a>(script: &'a ScriptFile) -> (Vec<&'a str>, ScanState) {
        let mut state = ScanState::BeforeDoc;
        let mut doc_lines = Vec::new();

        for line in script.lines() {
            match state {
                ScanState::BeforeDoc => {
                    if line.trim().ends_with(DOC_BEGIN) {
                        state = ScanState::InDoc;
                        doc_lines.push(line.trim_end());
                    }
                }
                ScanState::InDoc => {
                    if line.starts_with(DOC_END) {
                        state = ScanState::Done;
                        break;
                    }
                    doc_lines.push(line.trim_end());
                }
                ScanState::Done => unreachable!("scan stops at the closing marker"),
            }
        }

        (doc_lines, state)
    }
}

impl CheckRule for DocBlockRule {
    fn id(&self) -> RuleId {
        RuleId::new("doc-block")
    }

    fn name(&self) -> &str {
        "Documentation Block"
    }

    fn description(&self) -> &str {
        "Scripts contain a titled, underlined documentation block"
    }

    fn check(&self, script: &ScriptFile) -> Vec<Diagnostic> {
        let path = script.path().display();
        let (doc_lines, state) = Self::scan(script);

        match state {
            ScanState::InDoc => {
                return vec![Diagnostic::error(format!("docs start but not end: {}", path))];
            }
            ScanState::BeforeDoc => {
                return vec![Diagnostic::error(format!("no documentation in: {}", path))];
            }
            ScanState::Done => {}
        }

        let mut content = doc_lines
            .iter()
            .filter(|l| !l.is_empty() && !l.contains(DOC_BEGIN));
        let (Some(title), Some(underline)) = (content.next(), content.next()) else {
            return vec![Diagnostic::error(format!(
                "docs missing title/underline: {}",
                path
            ))];
        };

        let mut diagnostics = Vec::new();

        if *underline != "=".repeat(title.chars().count()) {
            diagnostics.push(Diagnostic::error(format!(
                "title/underline mismatch: {} {} {}",
                path, title, underline
            )));
        }

        let expected = expected_command(script.path());
        if *title != expected {
            diagnostics.push(Diagnostic::warning(format!(
                "expected script title {}, got {}",
                expected, title
            )));
        }

        diagnostics
    }
}
