//! Check command implementation.
//!
//! The `scriptlint check` command (also the default invocation) walks the
//! scripts tree, prints diagnostics, and fails if any script violates the
//! documentation convention.

use std::io;

use crate::check::check_tree;
use crate::cli::args::CheckArgs;
use crate::error::Result;

use super::CommandResult;

/// Execute the check command.
pub fn execute(args: &CheckArgs) -> Result<CommandResult> {
    let mut stdout = io::stdout();
    let summary = check_tree(&args.root, &mut stdout)?;

    tracing::info!(
        "checked {} script(s), {} error(s)",
        summary.files_checked,
        summary.errors
    );

    if summary.passed() {
        Ok(CommandResult::success())
    } else {
        Ok(CommandResult::failure(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args_for(root: PathBuf) -> CheckArgs {
        CheckArgs { root }
    }

    #[test]
    fn clean_tree_succeeds() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(
            scripts.join("foo.rb"),
            "# summary\n=begin\n\nfoo\n===\nHelp.\n\n=end\n",
        )
        .unwrap();

        let result = execute(&args_for(scripts)).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn failing_tree_exits_nonzero() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        fs::write(scripts.join("foo.rb"), "puts 1\n").unwrap();

        let result = execute(&args_for(scripts)).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(execute(&args_for(temp.path().join("missing"))).is_err());
    }
}
