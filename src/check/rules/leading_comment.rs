//! Leading comment validation.
//!
//! Every script must open with a one-line comment: the summary a
//! directory-listing command shows next to the script's name. The summary
//! has a 53-character budget so the listing stays on one terminal line.

use crate::check::command::DOC_BEGIN;
use crate::check::diagnostic::Diagnostic;
use crate::check::file::ScriptFile;
use crate::check::rule::{CheckRule, RuleId};

/// Longest summary that still fits the listing column.
const MAX_SUMMARY_CHARS: usize = 53;

/// Validates the leading "ls" summary comment.
pub struct LeadingCommentRule;

impl CheckRule for LeadingCommentRule {
    fn id(&self) -> RuleId {
        RuleId::new("leading-comment")
    }

    fn name(&self) -> &str {
        "Leading Comment"
    }

    fn description(&self) -> &str {
        "Scripts start with a short one-line summary comment"
    }

    fn check(&self, script: &ScriptFile) -> Vec<Diagnostic> {
        let marker = script.kind().comment_marker();
        let line = script.first_line().unwrap_or("").trim();

        // A first line that already opens the documentation block means the
        // file has no separate summary at all; it must not be misread as a
        // comment just because the marker happens to prefix it.
        if line.ends_with(DOC_BEGIN) || !line.starts_with(marker) {
            return vec![Diagnostic::error(format!(
                "no leading comment in {}",
                script.path().display()
            ))];
        }

        let summary = line.replace(marker, "");
        if summary.trim().chars().count() > MAX_SUMMARY_CHARS {
            return vec![Diagnostic::error(format!(
                "leading comment too long in {}",
                script.path().display()
            ))];
        }

        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn check(name: &str, source: &str) -> Vec<Diagnostic> {
        let script = ScriptFile::from_source(Path::new(name), source);
        LeadingCommentRule.check(&script)
    }

    #[test]
    fn short_ruby_summary_passes() {
        assert!(check("foo.rb", "# designate trees for chopping\nputs 1\n").is_empty());
    }

    #[test]
    fn short_lua_summary_passes() {
        assert!(check("foo.lua", "-- designate trees for chopping\n").is_empty());
    }

    #[test]
    fn wrong_marker_for_kind_fails() {
        let diags = check("foo.lua", "# ruby-style comment in a lua file\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.starts_with("no leading comment in "));
    }

    #[test]
    fn uncommented_first_line_fails() {
        let diags = check("foo.rb", "puts 'hello'\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("no leading comment"));
    }

    #[test]
    fn first_line_opening_the_doc_block_fails() {
        // "#=begin" starts with the marker, but it is the doc block
        // opener, not a summary.
        let diags = check("foo.rb", "#=begin\nfoo\n===\n#=end\n");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("no leading comment"));
    }

    #[test]
    fn empty_file_fails() {
        let diags = check("foo.rb", "");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("no leading comment"));
    }

    #[test]
    fn summary_at_the_budget_passes() {
        let summary = "x".repeat(MAX_SUMMARY_CHARS);
        assert!(check("foo.rb", &format!("# {}\n", summary)).is_empty());
    }

    #[test]
    fn summary_over_the_budget_fails() {
        let summary = "x".repeat(MAX_SUMMARY_CHARS + 1);
        let diags = check("foo.rb", &format!("# {}\n", summary));
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.starts_with("leading comment too long in "));
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        // 53 multibyte characters are still within budget.
        let summary = "é".repeat(MAX_SUMMARY_CHARS);
        assert!(check("foo.rb", &format!("# {}\n", summary)).is_empty());
    }

    #[test]
    fn all_marker_occurrences_are_stripped_before_measuring() {
        // Repeated markers inside the line do not count toward the budget.
        let line = format!("# {} #\n", "x".repeat(MAX_SUMMARY_CHARS - 1));
        assert!(check("foo.rb", &line).is_empty());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(check("foo.rb", "   # padded summary   \n").is_empty());
    }
}
