//! Built-in validation rules.

mod doc_block;
mod leading_comment;

pub use doc_block::DocBlockRule;
pub use leading_comment::LeadingCommentRule;

use super::rule::CheckRule;

/// All built-in rules, in the order they run against a script.
pub fn builtin_rules() -> Vec<Box<dyn CheckRule>> {
    vec![Box::new(LeadingCommentRule), Box::new(DocBlockRule)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::RuleId;

    #[test]
    fn builtins_run_leading_comment_first() {
        let rules = builtin_rules();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id(), RuleId::new("leading-comment"));
        assert_eq!(rules[1].id(), RuleId::new("doc-block"));
    }
}
