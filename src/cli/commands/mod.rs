//! Command dispatching.
//!
//! This module provides the command infrastructure:
//! - [`CommandResult`] for uniform result reporting
//! - [`dispatch`] for routing CLI subcommands

pub mod check;
pub mod completions;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatch and execute a command.
///
/// Invoking the binary with no subcommand runs `check` on the default
/// scripts root.
pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
    match &cli.command {
        Some(Commands::Check(args)) => check::execute(args),
        Some(Commands::Completions(args)) => completions::execute(args),
        None => check::execute(&CheckArgs::default()),
    }
}
