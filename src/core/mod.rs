//! Translation engine.
//!
//! A run turns a [`Dictionary`] and a set of diagnostic call names into a
//! [`FileRewriter`], then applies it to every discovered source file:
//!
//! 1. **Extraction**: find comment bodies and diagnostic call arguments
//!    written in the source language ([`SpanExtractor`])
//! 2. **Translation**: exact lookup, then ordered partial replacement, with
//!    `${...}` expressions masked ([`translate`], `placeholder`)
//! 3. **Whole-file pass**: replace remaining dictionary phrases anywhere in
//!    the file ([`FileRewriter::rewrite`])
//! 4. **Batch**: persist changed files and collect per-file outcomes
//!    ([`process_files`])
//!
//! ## Module Structure
//!
//! - `batch`: Per-file processing, content sinks, and run summaries
//! - `context`: Config loading, file discovery, and dictionary setup for a run
//! - `dictionary`: Phrase tables, match order, and inversion
//! - `extract`: Lexical span recognition
//! - `file_scanner`: Source file discovery
//! - `placeholder`: Masking of template expressions
//! - `rewrite`: Span splicing and the whole-file pass
//! - `script`: Hangul/Latin classification and translation direction
//! - `translate`: Text translation against a dictionary

pub mod batch;
pub mod context;
pub mod dictionary;
pub mod extract;
pub mod file_scanner;
pub mod placeholder;
pub mod rewrite;
pub mod script;
pub mod translate;

pub use batch::{
    BatchSummary, ContentSink, DryRunSink, FileOutcome, FileRewriteResult, FsSink, process_files,
};
pub use context::RunContext;
pub use dictionary::{Dictionary, MatchOrder, TermEntry, TermGroup, read_user_dictionary};
pub use extract::{Span, SpanExtractor, SpanKind};
pub use rewrite::{FileRewriter, Rewrite};
pub use script::{Direction, Script};
pub use translate::translate;
