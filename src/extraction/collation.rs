//! Collation
//!
//! The ordering used when sorting is enabled. It does not depend on the
//! platform locale. Two strings compare by their collation keys, where the key
//! of a string is:
//!
//! 1. its canonical decomposition (NFD),
//! 2. with every combining mark removed,
//! 3. lowercased with the full Unicode lowercase mapping,
//!
//! compared code point by code point. So `"Émile"`, `"emile"` and `"EMILE"` all
//! share the key `"emile"` and compare equal; a stable sort keeps their input
//! order.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Case-folded, diacritic-stripped key for `s`.
pub fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Stable in-place sort of `values` by [`collation_key`].
pub fn sort(values: &mut [String]) {
    // sort_by_cached_key keeps equal keys in their original order
    values.sort_by_cached_key(|value| collation_key(value));
}
