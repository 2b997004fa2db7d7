//! Shared configuration loader for the study guide compiler.
//!
//! `defaults/guide.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior never drift. Callers layer their own files and
//! overrides on top of it via [`Loader`] before deserializing into [`GuideConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/guide.default.toml");

/// Top-level configuration consumed by the compiler pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct GuideConfig {
    pub lexing: LexingConfig,
    pub building: BuildingConfig,
    pub qa: QaConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexingConfig {
    pub error_mode: ErrorModeSetting,
}

/// How line-level errors are collected by the lexer and preparser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorModeSetting {
    Accumulate,
    FailFast,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildingConfig {
    /// Context type name, as written in serialized trees (e.g. `Colleges`).
    pub default_context: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QaConfig {
    pub checks: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
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

    /// Layer an optional configuration file, skipped when absent.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an in-memory TOML document, e.g. one embedded by a host application.
    pub fn with_toml_str(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GuideConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GuideConfig, ConfigError> {
    Loader::new().build()
}
