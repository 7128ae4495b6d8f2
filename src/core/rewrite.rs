//! Whole-file rewriting.
//!
//! Pass 1 translates every extracted span under placeholder protection and
//! splices the result back. Pass 2 replaces dictionary phrases anywhere in
//! the file, which catches text outside the recognized shapes (for example
//! `throw new Error('...')`). Pass 2 runs under the same protection, so
//! interpolation expressions are never touched.

use super::dictionary::Dictionary;
use super::extract::{Span, SpanExtractor, SpanKind};
use super::placeholder::with_masked;
use super::translate::translate;

/// Result of rewriting one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    /// True iff `content` differs from the input.
    pub changed: bool,
    /// Spans of the input whose text changed in pass 1, plus one
    /// [`SpanKind::WholeFile`] span when pass 2 replaced anything.
    pub translated: Vec<Span>,
}

impl Rewrite {
    pub fn count(&self, kind: SpanKind) -> usize {
        self.translated.iter().filter(|s| s.kind == kind).count()
    }
}

pub struct FileRewriter {
    dictionary: Dictionary,
    extractor: SpanExtractor,
}

impl FileRewriter {
    pub fn new(dictionary: Dictionary, extractor: SpanExtractor) -> Self {
        Self {
            dictionary,
            extractor,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn rewrite(&self, content: &str) -> Rewrite {
        let mut translated = Vec::new();
        let mut output = String::with_capacity(content.len());
        let mut cursor = 0;

        // Spans arrive in ascending order, so rebuilding left to right keeps
        // every later offset valid.
        for span in self.extractor.find_spans(content) {
            let original = span.text(content);
            let replacement = with_masked(original, |masked| translate(masked, &self.dictionary));

            output.push_str(&content[cursor..span.start]);
            output.push_str(&replacement);
            cursor = span.end;

            if replacement != original {
                translated.push(span);
            }
        }
        output.push_str(&content[cursor..]);

        let replaced = self.replace_phrases(&output);
        if replaced != output {
            translated.push(Span {
                start: 0,
                end: content.len(),
                kind: SpanKind::WholeFile,
            });
        }

        Rewrite {
            changed: replaced != content,
            content: replaced,
            translated,
        }
    }

    fn replace_phrases(&self, content: &str) -> String {
        with_masked(content, |masked| {
            let mut working = masked.to_string();
            for entry in self.dictionary.whole_file_entries() {
                if working.contains(entry.source.as_str()) {
                    working = working.replace(entry.source.as_str(), &entry.target);
                }
            }
            working
        })
    }
}
