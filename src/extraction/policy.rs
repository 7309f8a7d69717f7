//! Match policies
//!
//! A policy decides where the value of a `name=` token ends. Both policies
//! accept `'` or `"` as the opening delimiter and only ever close on the same
//! character; they differ in which occurrence of that character counts.
//!
//!     Lookahead: the closing quote must be followed by whitespace and another
//!     `key=` token, or by the end of the line (trailing whitespace allowed).
//!     Values may therefore contain their own delimiter, as in
//!     `name='O'Brien' id=7`.
//!
//!     Symmetric: the first repeat of the opening quote closes the value.
//!     `name='O'Brien'` yields `O`.
//!
//! Lookahead is the default. A caller picks one policy per run; it is never
//! inferred from the input.

use crate::error::NamexError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What may follow a closing quote under [`MatchPolicy::Lookahead`]:
/// whitespace plus a `key=` token, or nothing but whitespace up to end of line.
static TERMINATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\s+[A-Za-z_][A-Za-z0-9_.\-]*=|\s*$)").expect("valid terminator pattern")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Close on a quote followed by the next `key=` token or end of line.
    #[default]
    Lookahead,
    /// Close on the next occurrence of the opening quote.
    Symmetric,
}

impl MatchPolicy {
    pub const ALL: [MatchPolicy; 2] = [MatchPolicy::Lookahead, MatchPolicy::Symmetric];

    pub fn as_str(self) -> &'static str {
        match self {
            MatchPolicy::Lookahead => "lookahead",
            MatchPolicy::Symmetric => "symmetric",
        }
    }

    /// Find the byte offset of the quote that closes a value starting at
    /// `start` in `line`.
    ///
    /// `quote` must be `'` or `"`. Returns `None` when no acceptable closing
    /// quote exists on this line.
    pub fn closing_quote(self, line: &str, start: usize, quote: char) -> Option<usize> {
        let mut from = start;
        while let Some(offset) = line[from..].find(quote) {
            let at = from + offset;
            // quotes are single-byte, so at + 1 is always a char boundary
            let rest = &line[at + 1..];
            match self {
                MatchPolicy::Symmetric => return Some(at),
                MatchPolicy::Lookahead if TERMINATOR.is_match(rest) => return Some(at),
                MatchPolicy::Lookahead => from = at + 1,
            }
        }
        None
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchPolicy {
    type Err = NamexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lookahead" => Ok(MatchPolicy::Lookahead),
            "symmetric" => Ok(MatchPolicy::Symmetric),
            _ => Err(NamexError::UnknownPolicy(s.to_string())),
        }
    }
}
