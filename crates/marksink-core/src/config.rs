//! Configuration types for marksink.
//!
//! [`SinkConfig::load`] reads a TOML document layered on top of the built-in
//! defaults. [`SinkConfig::from_toml_str`] does the same from an in-memory
//! string (useful in tests). Turning a config into a live sink is
//! [`FileSink::from_config`](crate::sink::FileSink::from_config).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::types::Level;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
failure_policy = "ignore"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// What `append` does with a failure inside the write sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Swallow the error; logging stays best-effort.
    #[default]
    Ignore,
    /// Return the error to the caller of `append`.
    Propagate,
}

/// Sink settings as they appear in a config document.
///
/// Every field is optional at this level. A missing `name` is reported as
/// [`ConfigError::MissingName`] when the sink is built, not while parsing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub name: Option<String>,
    /// Target file. Defaults to [`DEFAULT_LOG_FILE`](crate::sink::DEFAULT_LOG_FILE).
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Literal substring that triggers a marker line.
    #[serde(default)]
    pub search_string: Option<String>,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    /// Layout conversion pattern. Defaults to `%m%n`.
    #[serde(default)]
    pub pattern: Option<String>,
    /// Minimum level accepted by the upstream filter.
    #[serde(default)]
    pub threshold: Option<Level>,
}

impl SinkConfig {
    /// Load from a TOML file, layered on top of the built-in defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML document, layered on top of the built-in defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
