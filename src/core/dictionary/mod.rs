//! Ordered phrase dictionary.
//!
//! A [`Dictionary`] maps source phrases to target phrases for one direction.
//! Entries keep their declaration order: partial substitution walks them in
//! that order (or longest-first, see [`MatchOrder`]), so overlapping phrases
//! resolve the same way on every run.
//!
//! The reverse dictionary is never written by hand. It is derived with
//! [`Dictionary::inverse`], which also checks that the mapping is bijective.

mod builtin;

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::script::Direction;
use builtin::BUILTIN_TERMS;

/// Conceptual group of a term. Grouping is informational only; lookup treats
/// the dictionary as one flat sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermGroup {
    /// Structural comments (module and function descriptions).
    Comment,
    /// Debug and status log messages.
    Log,
    /// Error messages.
    Error,
    /// Single status words, consulted after every phrase.
    Vocabulary,
    /// Entries added from a user dictionary file.
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermEntry {
    pub group: TermGroup,
    pub source: String,
    pub target: String,
}

impl TermEntry {
    pub fn new(group: TermGroup, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            group,
            source: source.into(),
            target: target.into(),
        }
    }

    /// True if the source phrase is a single identifier-like ASCII word
    /// (`Setup`, `Error`). Such phrases also occur as code identifiers.
    fn is_identifier_like(&self) -> bool {
        let mut chars = self.source.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        (first.is_ascii_alphabetic() || first == '_' || first == '$')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    }
}

/// Order in which partial substitution consults the entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum MatchOrder {
    /// Declaration order of the dictionary.
    #[default]
    Declaration,
    /// Longer source phrases first; equal lengths keep declaration order.
    LongestFirst,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<TermEntry>,
    index: HashMap<String, usize>,
    match_order: MatchOrder,
}

impl Dictionary {
    /// Build a dictionary, rejecting empty phrases and duplicate sources.
    pub fn new(entries: Vec<TermEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.source.trim().is_empty() || entry.target.trim().is_empty() {
                bail!("Dictionary entry #{} has an empty phrase", i + 1);
            }
            if index.insert(entry.source.clone(), i).is_some() {
                bail!("Duplicate source phrase in dictionary: \"{}\"", entry.source);
            }
        }

        Ok(Self {
            entries,
            index,
            match_order: MatchOrder::default(),
        })
    }

    /// The built-in English → Korean dictionary.
    pub fn builtin() -> Result<Self> {
        let entries = BUILTIN_TERMS
            .iter()
            .map(|(group, source, target)| TermEntry::new(*group, *source, *target))
            .collect();
        Self::new(entries).context("Built-in dictionary is invalid")
    }

    pub fn with_match_order(mut self, match_order: MatchOrder) -> Self {
        self.match_order = match_order;
        self
    }

    pub fn match_order(&self) -> MatchOrder {
        self.match_order
    }

    /// Merge user phrases over this dictionary.
    ///
    /// A phrase that already exists gets the new target in place; new phrases
    /// are appended in the order given.
    pub fn with_overrides<I>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let match_order = self.match_order;
        let mut entries = self.entries;
        let mut index = self.index;

        for (source, target) in overrides {
            match index.get(&source) {
                Some(&i) => entries[i].target = target,
                None => {
                    index.insert(source.clone(), entries.len());
                    entries.push(TermEntry::new(TermGroup::Custom, source, target));
                }
            }
        }

        Ok(Self::new(entries)?.with_match_order(match_order))
    }

    /// Exact lookup of a whole phrase.
    pub fn lookup_exact(&self, phrase: &str) -> Option<&str> {
        self.index
            .get(phrase)
            .map(|&i| self.entries[i].target.as_str())
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[TermEntry] {
        &self.entries
    }

    /// Entries in the order partial substitution consults them.
    pub fn partial_entries(&self) -> Vec<&TermEntry> {
        let mut entries: Vec<&TermEntry> = self.entries.iter().collect();
        if self.match_order == MatchOrder::LongestFirst {
            // stable sort keeps declaration order among equal lengths
            entries.sort_by_key(|e| std::cmp::Reverse(e.source.chars().count()));
        }
        entries
    }

    /// Entries applied by the whole-file pass: every partial entry except
    /// identifier-like single words.
    pub fn whole_file_entries(&self) -> Vec<&TermEntry> {
        self.partial_entries()
            .into_iter()
            .filter(|e| !e.is_identifier_like())
            .collect()
    }

    /// The exact inverse mapping. Fails if two entries share a target phrase.
    pub fn inverse(&self) -> Result<Self> {
        let mut seen: HashMap<&str, &str> = HashMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let Some(previous) = seen.insert(entry.target.as_str(), entry.source.as_str()) {
                bail!(
                    "Dictionary is not invertible: \"{}\" is the translation of both \"{}\" and \"{}\"",
                    entry.target,
                    previous,
                    entry.source
                );
            }
        }

        let entries = self
            .entries
            .iter()
            .map(|e| TermEntry::new(e.group, e.target.clone(), e.source.clone()))
            .collect();
        Ok(Self::new(entries)?.with_match_order(self.match_order))
    }

    /// Dictionary for a run in `direction`, assuming `self` is English → Korean.
    ///
    /// Bijectivity is checked in both directions.
    pub fn for_direction(self, direction: Direction) -> Result<Self> {
        let inverse = self.inverse()?;
        Ok(match direction {
            Direction::Forward => self,
            Direction::Reverse => inverse,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read a user dictionary: a JSON object of English → Korean phrases.
/// Key order in the file is kept.
pub fn read_user_dictionary(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse dictionary file: {}", path.display()))?;

    let Value::Object(map) = value else {
        bail!(
            "Dictionary file must contain a JSON object: {}",
            path.display()
        );
    };

    map.into_iter()
        .map(|(source, target)| match target {
            Value::String(target) => Ok((source, target)),
            other => bail!(
                "Dictionary value for \"{}\" must be a string, found {}",
                source,
                other
            ),
        })
        .collect()
}
