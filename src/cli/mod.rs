//! Command-line interface and argument parsing.

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs};
pub use commands::{dispatch, CommandResult};
