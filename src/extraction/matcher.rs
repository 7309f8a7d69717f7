//! Line Scanning
//!
//! Finds `name=` tokens in a single line and yields their values left to right.
//!
//! Every scan owns its cursor. [`NameMatches`] starts at byte 0 of the line it
//! was created for and only moves forward; two scans over the same line, or
//! over different lines on different threads, never observe each other.
//!
//! After a match the cursor sits just past the closing quote, so the key that
//! satisfied the lookahead (often another `name=`) is still available to the
//! next match. When an opening `name='` cannot be closed, the cursor moves past
//! the `name=` literal and scanning continues on the same line.
//!
//! A failed close for one quote character also rules out every later opener
//! using that character: its candidate closing quotes are a subset of the ones
//! already rejected. The scan remembers this per quote, so each line is walked
//! a bounded number of times.

use super::policy::MatchPolicy;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

const NAME_KEY: &str = "name=";

/// `name=` immediately followed by an opening quote.
static OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"name=['"]"#).expect("valid opener pattern"));

/// One value found in a line, borrowed from that line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch<'a> {
    pub value: &'a str,
    /// Byte range of `value` within the scanned line (quotes excluded).
    pub span: Range<usize>,
}

/// A [`RawMatch`] tagged with its 1-based line number in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedMatch<'a> {
    pub line: usize,
    pub value: &'a str,
    pub span: Range<usize>,
}

/// Lazy iterator over the values in one line.
#[derive(Debug, Clone)]
pub struct NameMatches<'a> {
    line: &'a str,
    cursor: usize,
    policy: MatchPolicy,
    /// Quotes (`'`, `"`) with no acceptable closing position left on the line.
    exhausted: [bool; 2],
}

impl<'a> NameMatches<'a> {
    pub fn new(line: &'a str, policy: MatchPolicy) -> Self {
        NameMatches {
            line,
            cursor: 0,
            policy,
            exhausted: [false; 2],
        }
    }
}

fn quote_slot(quote: char) -> usize {
    if quote == '"' {
        1
    } else {
        0
    }
}

impl<'a> Iterator for NameMatches<'a> {
    type Item = RawMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.line.len() {
            let opener = OPENER.find_at(self.line, self.cursor)?;
            let value_start = opener.end();
            // the opener ends in a single-byte quote
            let quote = if self.line.as_bytes()[value_start - 1] == b'"' {
                '"'
            } else {
                '\''
            };

            let slot = quote_slot(quote);
            if self.exhausted[slot] {
                self.cursor = opener.start() + NAME_KEY.len();
                continue;
            }

            match self.policy.closing_quote(self.line, value_start, quote) {
                Some(close) => {
                    self.cursor = close + 1;
                    return Some(RawMatch {
                        value: &self.line[value_start..close],
                        span: value_start..close,
                    });
                }
                None => {
                    self.exhausted[slot] = true;
                    self.cursor = opener.start() + NAME_KEY.len();
                }
            }
        }
        None
    }
}

/// Scan a single line (no line breaks expected) with the given policy.
pub fn scan_line(line: &str, policy: MatchPolicy) -> NameMatches<'_> {
    NameMatches::new(line, policy)
}

/// Scan every line of `text` in order.
///
/// Lines are split on `\n`, with a trailing `\r` stripped, so `\r\n` input
/// behaves the same as `\n` input. Blank and whitespace-only lines are skipped.
pub fn scan_text(text: &str, policy: MatchPolicy) -> impl Iterator<Item = LocatedMatch<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .flat_map(move |(index, line)| {
            scan_line(line, policy).map(move |m| LocatedMatch {
                line: index + 1,
                value: m.value,
                span: m.span,
            })
        })
}
