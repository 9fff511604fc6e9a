use std::path::Path;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, init::init},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` describing what the command did
/// - `Err` if the command fails (e.g., invalid config, unknown encoding)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => Ok(CommandResult::Check(check(cmd)?)),
        Some(Command::Init) => Ok(CommandResult::Init(init(Path::new("."))?)),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
