use crate::cli::exit_status::ExitStatus;
use crate::core::{BatchSummary, Direction};

#[derive(Debug)]
pub enum CommandSummary {
    Rewrite(RewriteSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct RewriteSummary {
    pub direction: Direction,
    pub is_dry_run: bool,
    /// Entries the file scan could not read.
    pub skipped_count: usize,
    pub batch: BatchSummary,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running gloss commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub exit_status: ExitStatus,
}
