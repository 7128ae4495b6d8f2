use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult,
        init::init,
        rewrite::{revert, translate},
    },
};

/// Dispatch to the handler for the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Revert(cmd)) => revert(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
