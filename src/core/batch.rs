//! Applying a [`FileRewriter`] to many files.
//!
//! Each file is read, rewritten, and handed to a [`ContentSink`] only when
//! its content changed. A failure on one file is recorded in its result and
//! never stops the batch.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::extract::SpanKind;
use super::rewrite::FileRewriter;

/// Destination for rewritten file content.
pub trait ContentSink {
    fn persist(&mut self, path: &Path, content: &str) -> Result<()>;
}

/// Writes content back to the file it was read from.
#[derive(Debug, Default)]
pub struct FsSink;

impl ContentSink for FsSink {
    fn persist(&mut self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Records which files would be written and leaves the disk alone.
#[derive(Debug, Default)]
pub struct DryRunSink {
    pub pending: Vec<PathBuf>,
}

impl ContentSink for DryRunSink {
    fn persist(&mut self, path: &Path, _content: &str) -> Result<()> {
        self.pending.push(path.to_path_buf());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Changed,
    Unchanged,
    /// The file could not be read, decoded or persisted. Its content on disk
    /// is whatever it was before the batch.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewriteResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Translated comment spans.
    pub comments: usize,
    /// Translated call-argument spans, template literals included.
    pub messages: usize,
}

impl FileRewriteResult {
    fn failed(path: &Path, err: anyhow::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome: FileOutcome::Failed(format!("{:#}", err)),
            comments: 0,
            messages: 0,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.outcome == FileOutcome::Changed
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, FileOutcome::Failed(_))
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<FileRewriteResult>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn changed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_changed()).count()
    }

    /// Files left as they were, failures included.
    pub fn unchanged_count(&self) -> usize {
        self.total() - self.changed_count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failed()).count()
    }
}

/// Rewrite every file in `paths`, in order. `observer` sees each result as
/// soon as its file is finished.
pub fn process_files<S, F>(
    paths: &[PathBuf],
    rewriter: &FileRewriter,
    sink: &mut S,
    mut observer: F,
) -> BatchSummary
where
    S: ContentSink,
    F: FnMut(&FileRewriteResult),
{
    let results = paths
        .iter()
        .map(|path| {
            let result = process_file(path, rewriter, sink)
                .unwrap_or_else(|err| FileRewriteResult::failed(path, err));
            observer(&result);
            result
        })
        .collect();

    BatchSummary { results }
}

fn process_file<S: ContentSink>(
    path: &Path,
    rewriter: &FileRewriter,
    sink: &mut S,
) -> Result<FileRewriteResult> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let rewrite = rewriter.rewrite(&content);
    if rewrite.changed {
        sink.persist(path, &rewrite.content)?;
    }

    Ok(FileRewriteResult {
        path: path.to_path_buf(),
        outcome: if rewrite.changed {
            FileOutcome::Changed
        } else {
            FileOutcome::Unchanged
        },
        comments: rewrite.count(SpanKind::LineComment) + rewrite.count(SpanKind::BlockComment),
        messages: rewrite.count(SpanKind::CallArgument)
            + rewrite.count(SpanKind::TemplateArgument),
    })
}
