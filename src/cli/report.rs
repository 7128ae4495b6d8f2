//! Report formatting and printing utilities.
//!
//! Separate from core logic so gloss can be used as a library. Every
//! printer has a `_to` variant taking a writer for tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, RewriteSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FileOutcome, FileRewriteResult};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Rewrite(summary) => {
            print_rewrite_summary_to(summary, &mut io::stdout().lock());
            print_failure_warning_to(summary, &mut io::stderr().lock());
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Print one file's status line to stdout.
pub fn print_file_status(result: &FileRewriteResult, root: &Path, verbose: bool) {
    print_file_status_to(result, root, verbose, &mut io::stdout().lock());
}

/// Print one file's status line to a custom writer.
///
/// Paths are shown relative to `root`. With `verbose`, changed files also
/// show how many comments and messages were translated.
pub fn print_file_status_to<W: Write>(
    result: &FileRewriteResult,
    root: &Path,
    verbose: bool,
    writer: &mut W,
) {
    let path = result.path.strip_prefix(root).unwrap_or(&result.path);
    let path = path.display();

    let _ = match &result.outcome {
        FileOutcome::Changed if verbose => writeln!(
            writer,
            "{} {:<10} {} {}",
            SUCCESS_MARK.green(),
            "changed".green(),
            path,
            format!(
                "({}, {})",
                plural(result.comments, "comment", "comments"),
                plural(result.messages, "message", "messages")
            )
            .dimmed()
        ),
        FileOutcome::Changed => writeln!(
            writer,
            "{} {:<10} {}",
            SUCCESS_MARK.green(),
            "changed".green(),
            path
        ),
        FileOutcome::Unchanged => writeln!(writer, "- {:<10} {}", "unchanged".dimmed(), path),
        FileOutcome::Failed(cause) => writeln!(
            writer,
            "{} {:<10} {}: {}",
            FAILURE_MARK.red(),
            "failed".red(),
            path,
            cause
        ),
    };
}

/// Print the final tally of a translate or revert run.
pub fn print_rewrite_summary_to<W: Write>(summary: &RewriteSummary, writer: &mut W) {
    let batch = &summary.batch;
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{}: {} processed, {} changed, {} unchanged",
            summary.direction,
            plural(batch.total(), "file", "files"),
            batch.changed_count(),
            batch.unchanged_count()
        )
        .green()
    );

    if summary.is_dry_run {
        let _ = writeln!(
            writer,
            "Dry run: no files were written (run without {} to apply)",
            "--dry-run".cyan()
        );
    }
}

/// Print warnings about paths that were skipped or could not be processed.
pub fn print_failure_warning_to<W: Write>(summary: &RewriteSummary, writer: &mut W) {
    let skipped = summary.skipped_count;
    if skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} could not be read and {} skipped",
            "warning:".bold().yellow(),
            plural(skipped, "path", "paths"),
            if skipped == 1 { "was" } else { "were" }
        );
    }

    let failed = summary.batch.failed_count();
    if failed > 0 {
        let _ = writeln!(
            writer,
            "{} {} could not be processed and {} left unchanged",
            "warning:".bold().yellow(),
            plural(failed, "file", "files"),
            if failed == 1 { "was" } else { "were" }
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        print_init_to(summary, &mut io::stdout().lock());
    } else {
        print_init_to(summary, &mut io::stderr().lock());
    }
}

pub fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = if summary.created {
        writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        )
    } else {
        writeln!(writer, "Error: {} already exists", CONFIG_FILE_NAME)
    };
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
