//! # namex
//!
//! Extracts the values of `name='...'` / `name="..."` attributes from
//! semi-structured log text.
//!
//! The library is split into two stages that always run in order:
//!
//! 1. [`extraction::matcher`] scans the text line by line and lazily yields
//!    every raw value found, in reading order.
//! 2. [`extraction::postprocess`] applies the optional exact-match
//!    deduplication and the optional collated sort.
//!
//! [`extract`] runs both stages for one input and returns an
//! [`ExtractionResult`]. Nothing is cached or persisted between calls.
//!
//! Configuration for the command-line front end lives in [`config`]; errors
//! that only the surrounding layers can produce live in [`error`].

pub mod config;
pub mod error;
pub mod extraction;

pub use error::{NamexError, Result};
pub use extraction::{
    extract, ExtractionOptions, ExtractionResult, MatchPolicy, NameMatches, RawMatch,
};
