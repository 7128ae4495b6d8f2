//! Protection of `${...}` interpolation expressions.
//!
//! Before a span is translated every expression is swapped for an opaque
//! token, and after translation each token is swapped back for the exact
//! original text. Tokens are built from private-use characters and digits,
//! so no dictionary phrase and no script classifier ever matches them.
//!
//! Expressions are assumed not to nest: `${a ? {b} : c}` ends at the first
//! `}`. The round trip is still exact in that case, only the protection
//! covers less text.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

static EXPRESSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]+\}").unwrap());

const TOKEN_OPEN: char = '\u{E000}';
const TOKEN_CLOSE: char = '\u{E001}';

/// Text with its expressions replaced by tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masked {
    pub text: String,
    /// `(token, original expression)` pairs in order of appearance.
    pub tokens: Vec<(String, String)>,
}

/// Replace every interpolation expression in `text` with a unique token.
pub fn mask(text: &str) -> Masked {
    if !EXPRESSION_REGEX.is_match(text) {
        return Masked {
            text: text.to_string(),
            tokens: Vec::new(),
        };
    }

    // Pick a nonce whose token prefix does not already occur in the input.
    let mut nonce: u32 = 0;
    while text.contains(&token_prefix(nonce)) {
        nonce += 1;
    }

    let mut tokens = Vec::new();
    let masked = EXPRESSION_REGEX.replace_all(text, |caps: &Captures| {
        let token = format!("{}{}{}", token_prefix(nonce), tokens.len(), TOKEN_CLOSE);
        tokens.push((token.clone(), caps[0].to_string()));
        token
    });

    Masked {
        text: masked.into_owned(),
        tokens,
    }
}

/// Put the recorded expressions back. Text that only looks like a token is
/// left alone.
pub fn unmask(text: &str, tokens: &[(String, String)]) -> String {
    tokens
        .iter()
        .fold(text.to_string(), |acc, (token, original)| {
            acc.replace(token.as_str(), original)
        })
}

/// Run `f` on the masked form of `text` and restore the expressions in its
/// output.
pub fn with_masked(text: &str, f: impl FnOnce(&str) -> String) -> String {
    let masked = mask(text);
    let output = f(&masked.text);
    unmask(&output, &masked.tokens)
}

/// `text` with every expression removed. Used for script classification, so
/// identifiers inside `${...}` do not count as natural-language text.
pub fn strip_expressions(text: &str) -> Cow<'_, str> {
    EXPRESSION_REGEX.replace_all(text, "")
}

fn token_prefix(nonce: u32) -> String {
    format!("{}{}:", TOKEN_OPEN, nonce)
}
