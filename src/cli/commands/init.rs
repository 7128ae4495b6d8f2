use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, InitSummary};
use crate::cli::exit_status::ExitStatus;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write a default `.glossrc.json` into the current directory. An existing
/// file is never overwritten.
pub fn init() -> Result<CommandResult> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Ok(CommandResult {
            summary: CommandSummary::Init(InitSummary { created: false }),
            exit_status: ExitStatus::Failure,
        });
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    Ok(CommandResult {
        summary: CommandSummary::Init(InitSummary { created: true }),
        exit_status: ExitStatus::Success,
    })
}
