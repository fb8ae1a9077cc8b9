//! Shell completions generation.
//!
//! The `scriptlint completions` command generates shell completion scripts.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;

use super::CommandResult;

/// Execute the completions command.
pub fn execute(args: &CompletionsArgs) -> Result<CommandResult> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "scriptlint", &mut std::io::stdout());
    Ok(CommandResult::success())
}
