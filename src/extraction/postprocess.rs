//! Post-processing
//!
//! Turns the raw matches of a whole text into the final value list. The steps
//! always run in this order:
//!
//! 1. keep matches in reading order (lines top to bottom, left to right),
//! 2. drop exact duplicates if `unique` is set (first occurrence wins),
//! 3. stable-sort by [`collation`](super::collation) if `sorted` is set.
//!
//! Deduplication compares strings exactly, so `"Bob"` and `"bob"` both survive
//! even though they collate as equal.

use super::collation;
use super::options::ExtractionOptions;
use super::result::ExtractionResult;
use std::collections::HashSet;

/// Remove exact duplicates, keeping the first occurrence of each value.
pub fn dedup_exact(values: &mut Vec<String>) {
    let mut seen: HashSet<String> = HashSet::with_capacity(values.len());
    values.retain(|value| seen.insert(value.clone()));
}

/// Apply `options` to matches already in reading order.
pub fn finish(mut values: Vec<String>, options: &ExtractionOptions) -> ExtractionResult {
    if options.unique {
        dedup_exact(&mut values);
    }
    if options.sorted {
        collation::sort(&mut values);
    }
    ExtractionResult::new(values)
}
