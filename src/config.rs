//! Configuration for the namex front end.
//!
//! Precedence, lowest first: `defaults/namex.default.toml` (compiled in), an
//! optional `./namex.toml`, the `--config` file, then command-line flags as
//! [`Overrides`]. [`Loader`] stacks these layers and deserializes the result
//! into [`NamexConfig`].

use crate::extraction::{ExtractionOptions, MatchPolicy};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/namex.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct NamexConfig {
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

/// Mirrors [`ExtractionOptions`].
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    pub unique: bool,
    pub sort: bool,
    pub policy: MatchPolicy,
}

impl From<&ExtractionConfig> for ExtractionOptions {
    fn from(config: &ExtractionConfig) -> Self {
        ExtractionOptions::new()
            .unique(config.unique)
            .sorted(config.sort)
            .policy(config.policy)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub summary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl NamexConfig {
    pub fn extraction_options(&self) -> ExtractionOptions {
        ExtractionOptions::from(&self.extraction)
    }
}

/// Command-line settings. Flags left off (`false` / `None`) keep whatever
/// the defaults and config files say; flags that are set win.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub unique: bool,
    pub sort: bool,
    pub policy: Option<MatchPolicy>,
    pub format: Option<OutputFormat>,
    pub quiet: bool,
}

/// Layers config files and [`Overrides`] over the embedded defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist (`--config`).
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists (`./namex.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply every flag set in `overrides` on top of the file layers.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if overrides.unique {
            self = self.set_override("extraction.unique", true)?;
        }
        if overrides.sort {
            self = self.set_override("extraction.sort", true)?;
        }
        if let Some(policy) = overrides.policy {
            self = self.set_override("extraction.policy", policy.as_str())?;
        }
        if let Some(format) = overrides.format {
            self = self.set_override("output.format", format.as_str())?;
        }
        if overrides.quiet {
            self = self.set_override("output.summary", false)?;
        }
        Ok(self)
    }

    fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<NamexConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
