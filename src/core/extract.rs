//! Lexical extraction of translatable spans.
//!
//! No syntax tree is built. A single regex recognizes four shapes:
//!
//! - the first string-literal argument of a diagnostic call
//!   (`debugLog('...')`, `console.error("...", err)`)
//! - the first template-literal argument of a diagnostic call
//! - a single-body-line block comment (`/** ... */` or `/* ... */`)
//! - a line comment (`// ...`)
//!
//! All shapes live in one alternation, so the leftmost match wins and a `//`
//! inside a call's string literal is never read as a comment. Code that uses
//! a call name or comment shape outside a genuine diagnostic context can
//! still be picked up.

use anyhow::{Result, bail};
use regex::{Captures, Regex};

use super::placeholder::strip_expressions;
use super::script::Direction;

/// Syntactic context a span was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Quoted string argument of a diagnostic call.
    CallArgument,
    /// Template literal argument of a diagnostic call.
    TemplateArgument,
    /// Body of a `//` comment.
    LineComment,
    /// Body of a single-line block or doc comment.
    BlockComment,
    /// The whole file, for the direct phrase pass.
    WholeFile,
}

impl SpanKind {
    pub fn is_comment(self) -> bool {
        matches!(self, SpanKind::LineComment | SpanKind::BlockComment)
    }
}

/// A translatable range of file content. Offsets are byte offsets and never
/// include the whitespace around the literal or comment body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

impl Span {
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Span over `raw` (found at `offset`) with surrounding whitespace
    /// removed. None if nothing is left.
    fn trimmed(offset: usize, raw: &str, kind: SpanKind) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let start = offset + (raw.len() - raw.trim_start().len());
        Some(Self {
            start,
            end: start + trimmed.len(),
            kind,
        })
    }
}

/// Capture group names and the span kind each one yields.
const SHAPES: &[(&str, SpanKind)] = &[
    ("single", SpanKind::CallArgument),
    ("double", SpanKind::CallArgument),
    ("template", SpanKind::TemplateArgument),
    ("doc", SpanKind::BlockComment),
    ("inline", SpanKind::BlockComment),
    ("line", SpanKind::LineComment),
];

pub struct SpanExtractor {
    pattern: Regex,
    direction: Direction,
}

impl SpanExtractor {
    /// Compile the span pattern for the given diagnostic call names
    /// (`debugLog`, `console.log`, ...). Names are matched literally.
    pub fn new(call_names: &[String], direction: Direction) -> Result<Self> {
        let names: Vec<String> = call_names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(regex::escape)
            .collect();
        if names.is_empty() {
            bail!("At least one diagnostic call name is required");
        }

        let pattern = [
            // call argument: the name must not continue an identifier or member chain
            format!(
                r#"(?:^|[^\w$.])(?:{})\(\s*(?:'(?P<single>[^'\n]*)'|"(?P<double>[^"\n]*)"|`(?P<template>[^`]*)`)"#,
                names.join("|")
            ),
            r"/\*\*?[ \t]*\r?\n[ \t]*\*[ \t]*(?P<doc>[^\n]*?)[ \t]*\r?\n[ \t]*\*/".to_string(),
            r"/\*\*?[ \t]*(?P<inline>[^*\n]+?)[ \t]*\*/".to_string(),
            r"(?:^|[ \t])//(?P<line>[^\r\n]*)".to_string(),
        ]
        .join("|");

        Ok(Self {
            pattern: Regex::new(&format!("(?m){}", pattern))?,
            direction,
        })
    }

    /// Lazily yield the spans of `content` that should be translated, in
    /// ascending, non-overlapping order.
    pub fn find_spans<'a>(&'a self, content: &'a str) -> impl Iterator<Item = Span> + 'a {
        self.pattern
            .captures_iter(content)
            .filter_map(move |caps| self.select(&caps))
    }

    fn select(&self, caps: &Captures) -> Option<Span> {
        let (m, kind) = SHAPES
            .iter()
            .find_map(|(name, kind)| caps.name(name).map(|m| (m, *kind)))?;
        let span = Span::trimmed(m.start(), m.as_str(), kind)?;
        let body = m.as_str().trim();

        let source = self.direction.source();
        let target = self.direction.target();

        let prose = strip_expressions(body);
        if target.contains(&prose) || !source.contains(&prose) {
            return None;
        }
        if kind.is_comment() && !body.chars().next().is_some_and(|c| source.is_letter(c)) {
            return None;
        }

        Some(span)
    }
}
