//! Configuration loader
//!
//! `defaults/focus.default.toml` is embedded into the crate so that the documented defaults
//! and runtime behavior stay in sync. Callers layer user files, `FOCUS__`-prefixed
//! environment variables and explicit overrides on top of those defaults via [`Loader`]
//! before deserializing into [`FocusConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/focus.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FocusConfig {
    pub indentation: IndentationConfig,
    pub output: OutputConfig,
}

/// Knobs of the indentation assists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IndentationConfig {
    pub style: IndentStyle,
    pub width: usize,
    pub auto_outdent: bool,
}

impl IndentationConfig {
    /// The string one indentation level adds.
    pub fn unit(&self) -> String {
        match self.style {
            IndentStyle::Spaces => " ".repeat(self.width),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

impl Default for IndentationConfig {
    fn default() -> Self {
        Self {
            style: IndentStyle::Spaces,
            width: 4,
            auto_outdent: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentStyle {
    Spaces,
    Tabs,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
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

    /// Layer `FOCUS__SECTION__KEY` environment variables.
    pub fn with_environment(self) -> Self {
        self.with_environment_source(None)
    }

    /// Layer environment-style variables taken from `vars` instead of the process
    /// environment when given.
    pub fn with_environment_source(mut self, vars: Option<config::Map<String, String>>) -> Self {
        let source = Environment::with_prefix("FOCUS")
            .separator("__")
            .try_parsing(true)
            .source(vars);
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
    pub fn build(self) -> Result<FocusConfig, ConfigError> {
        let config: FocusConfig = self.builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<FocusConfig, ConfigError> {
    Loader::new().build()
}
