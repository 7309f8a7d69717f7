//! Extraction
//!
//! Pulls `name` attribute values out of log text.
//!
//! Structure:
//!     [`matcher`] finds tokens in one line at a time and yields values lazily.
//!     [`postprocess`] deduplicates and sorts the concatenated matches.
//!     [`collation`] defines the ordering used by the sort.
//!     [`policy`] defines where a quoted value ends.
//!
//! Matching policy
//!
//!     A token is `name=` followed by `'` or `"`. Under the default
//!     [`MatchPolicy::Lookahead`] the value runs to the first matching quote
//!     that is followed by whitespace and another `key=` token, or by the end
//!     of the line:
//!
//!         ts=12 name='O'Brien' level=info   -> O'Brien
//!         name="alice" name="bob"           -> alice, bob
//!         name='' age=5                     -> (empty string)
//!         name='dangling                    -> nothing
//!
//!     [`MatchPolicy::Symmetric`] closes on the first repeat of the opening
//!     quote instead, and is only useful for logs that never embed quotes.
//!
//! Nothing here keeps state between calls. Logging reports counts and options
//! only; extracted values and input text are never logged.

pub mod collation;
pub mod matcher;
pub mod options;
pub mod policy;
pub mod postprocess;
pub mod result;

pub use matcher::{scan_line, scan_text, LocatedMatch, NameMatches, RawMatch};
pub use options::ExtractionOptions;
pub use policy::MatchPolicy;
pub use result::ExtractionResult;

use log::debug;

/// Extract every `name` value from `text` and apply `options`.
///
/// Total over all inputs: text with no tokens yields an empty result.
pub fn extract(text: &str, options: &ExtractionOptions) -> ExtractionResult {
    let raw: Vec<String> = scan_text(text, options.policy)
        .map(|m| m.value.to_owned())
        .collect();
    debug!(
        "found {} raw matches (policy={}, unique={}, sorted={})",
        raw.len(),
        options.policy,
        options.unique,
        options.sorted
    );

    let result = postprocess::finish(raw, options);
    debug!("{} values after post-processing", result.count());
    result
}
