use anyhow::Result;

use super::{CommandResult, CommandSummary, RewriteSummary};
use crate::cli::{args::RewriteCommand, exit_status::ExitStatus, report};
use crate::core::{Direction, DryRunSink, FileRewriteResult, FsSink, RunContext, process_files};

/// `gloss translate`: English → Korean.
pub fn translate(cmd: RewriteCommand) -> Result<CommandResult> {
    rewrite_sources(cmd, Direction::Forward)
}

/// `gloss revert`: Korean → English.
pub fn revert(cmd: RewriteCommand) -> Result<CommandResult> {
    rewrite_sources(cmd, Direction::Reverse)
}

/// Rewrite every discovered source file in `direction`.
///
/// Fatal setup problems are returned as errors before any file is touched.
/// Once processing starts, a failing file is reported in its status line and
/// the run still succeeds.
fn rewrite_sources(cmd: RewriteCommand, direction: Direction) -> Result<CommandResult> {
    let args = cmd.args;
    let ctx = RunContext::new(&args.common, direction)?;

    let on_file =
        |result: &FileRewriteResult| report::print_file_status(result, &ctx.root_dir, ctx.verbose);
    let batch = if args.dry_run {
        process_files(&ctx.files, &ctx.rewriter, &mut DryRunSink::default(), on_file)
    } else {
        process_files(&ctx.files, &ctx.rewriter, &mut FsSink, on_file)
    };

    Ok(CommandResult {
        summary: CommandSummary::Rewrite(RewriteSummary {
            direction,
            is_dry_run: args.dry_run,
            skipped_count: ctx.skipped_count,
            batch,
        }),
        exit_status: ExitStatus::Success,
    })
}
