//! Error types for the sink and its collaborators.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for sink operations.
pub type Result<T> = std::result::Result<T, SinkError>;

/// Invalid or incomplete sink configuration. Construction aborts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The sink name is absent or blank.
    #[error("no name provided for file sink")]
    MissingName,

    /// The layout pattern could not be parsed.
    #[error("invalid layout pattern '{pattern}': {reason}")]
    InvalidLayout {
        /// The offending pattern
        pattern: String,
        /// What is wrong with it
        reason: String,
    },

    /// The escaped search string could not be compiled.
    #[error("cannot compile search string: {0}")]
    InvalidSearchString(#[from] regex::Error),

    /// The configuration document could not be read or deserialized.
    #[error("failed to load sink config: {0}")]
    Load(#[from] config::ConfigError),
}

/// The output file is unavailable.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Opening the file in append mode failed at construction.
    #[error("failed to open log file '{path}': {source}")]
    Open {
        /// Path of the log file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// The sink was used after `close`.
    #[error("file sink '{name}' is closed")]
    Closed {
        /// Name of the sink
        name: String,
    },

    /// Flushing the file on close failed. The sink is closed regardless.
    #[error("failed to flush log file of sink '{name}' on close: {source}")]
    Close {
        /// Name of the sink
        name: String,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

/// A formatter could not render an event.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A timestamp format string produced no output.
    #[error("cannot render timestamp with format '{format}'")]
    Timestamp {
        /// The strftime-style format
        format: String,
    },

    /// Any other formatter-specific failure.
    #[error("{0}")]
    Other(String),
}

/// A failure inside the format, write, scan and marker sequence.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("failed to format event: {0}")]
    Format(#[from] FormatError),

    #[error("failed to write event: {0}")]
    Write(#[source] io::Error),

    #[error("failed to write search marker: {0}")]
    Marker(#[source] io::Error),
}

/// Any error surfaced by a [`FileSink`](crate::sink::FileSink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Append(#[from] AppendError),
}

impl SinkError {
    /// True if the sink was used after it was closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, SinkError::Resource(ResourceError::Closed { .. }))
    }
}
