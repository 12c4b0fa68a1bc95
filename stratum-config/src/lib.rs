//! Shared configuration loader for the stratum toolchain.
//!
//! `defaults/stratum.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`StratumConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use stratum_babel::common::import::ImportOptions;
use stratum_babel::formats::outline::parser::ParseOptions;
use stratum_babel::formats::TreevizOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/stratum.default.toml");

/// Top-level configuration consumed by stratum applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StratumConfig {
    pub outline: OutlineConfig,
    pub import: ImportConfig,
    pub inspect: InspectConfig,
}

/// Reading and writing outline text.
#[derive(Debug, Clone, Deserialize)]
pub struct OutlineConfig {
    pub indent_unit: usize,
    pub strict_dedent: bool,
}

impl From<&OutlineConfig> for ParseOptions {
    fn from(config: &OutlineConfig) -> Self {
        ParseOptions {
            strict_dedent: config.strict_dedent,
        }
    }
}

/// Mirrors the knobs exposed by the XML/HTML importer.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    pub include_attributes: bool,
    pub attribute_prefix: String,
    pub text_key: String,
    pub max_depth: usize,
}

impl From<ImportConfig> for ImportOptions {
    fn from(config: ImportConfig) -> Self {
        ImportOptions {
            include_attributes: config.include_attributes,
            attribute_prefix: config.attribute_prefix,
            text_key: config.text_key,
            max_depth: config.max_depth,
        }
    }
}

impl From<&ImportConfig> for ImportOptions {
    fn from(config: &ImportConfig) -> Self {
        ImportOptions::from(config.clone())
    }
}

/// Controls the tree view printed by `inspect`.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_scalars: bool,
    #[serde(default)]
    pub max_depth: Option<usize>,
}

impl From<&InspectConfig> for TreevizOptions {
    fn from(config: &InspectConfig) -> Self {
        TreevizOptions {
            show_scalars: config.show_scalars,
            max_depth: config.max_depth,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StratumConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StratumConfig, ConfigError> {
    Loader::new().build()
}
