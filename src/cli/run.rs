use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, localize::localize},
};

/// Dispatch the parsed arguments to their command handler.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Localize(cmd)) => localize(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
