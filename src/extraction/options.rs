use super::policy::MatchPolicy;
use serde::{Deserialize, Serialize};

/// Per-call configuration for [`extract`](super::extract).
///
/// Built fresh for each run and never mutated by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionOptions {
    /// Drop exact duplicates, keeping first occurrences.
    pub unique: bool,
    /// Sort by case- and diacritic-insensitive collation.
    pub sorted: bool,
    #[serde(default)]
    pub policy: MatchPolicy,
}

impl ExtractionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }
}
