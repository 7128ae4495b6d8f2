//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Rewrite English comments and log messages into Korean
//! - `revert`: Rewrite Korean comments and log messages back into English
//! - `init`: Initialize gloss configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::MatchOrder;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (overrides config file)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Order in which partial phrase replacements are tried (overrides config file)
    #[arg(long, value_enum)]
    pub match_order: Option<MatchOrder>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub args: RewriteArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate English comments and log messages into Korean
    Translate(RewriteCommand),
    /// Revert Korean comments and log messages back into English
    Revert(RewriteCommand),
    /// Initialize a new .glossrc.json configuration file
    Init,
}
