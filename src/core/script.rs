//! Writing-script classification.
//!
//! A span counts as "already translated" when it contains characters of the
//! target script. The ranges are fixed: Hangul syllables for Korean and ASCII
//! letters for English.

use std::fmt;

/// Writing script of one side of the language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// English text, ASCII letters.
    Latin,
    /// Korean text, precomposed Hangul syllables (U+AC00..=U+D7A3).
    Hangul,
}

impl Script {
    /// Returns true if `c` is a letter of this script.
    pub fn is_letter(self, c: char) -> bool {
        match self {
            Script::Latin => c.is_ascii_alphabetic(),
            Script::Hangul => ('\u{AC00}'..='\u{D7A3}').contains(&c),
        }
    }

    /// Returns true if `text` contains at least one letter of this script.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss::core::Script;
    ///
    /// assert!(Script::Hangul.contains("트레이 초기화"));
    /// assert!(Script::Hangul.contains("IPC 핸들러"));
    /// assert!(!Script::Hangul.contains("Tray icon clicked"));
    /// assert!(Script::Latin.contains("IPC 핸들러"));
    /// assert!(!Script::Latin.contains("123 - ..."));
    /// ```
    pub fn contains(self, text: &str) -> bool {
        text.chars().any(|c| self.is_letter(c))
    }
}

/// Translation direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// English to Korean (`gloss translate`).
    Forward,
    /// Korean to English (`gloss revert`).
    Reverse,
}

impl Direction {
    pub fn source(self) -> Script {
        match self {
            Direction::Forward => Script::Latin,
            Direction::Reverse => Script::Hangul,
        }
    }

    pub fn target(self) -> Script {
        match self {
            Direction::Forward => Script::Hangul,
            Direction::Reverse => Script::Latin,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "English → Korean"),
            Direction::Reverse => write!(f, "Korean → English"),
        }
    }
}
