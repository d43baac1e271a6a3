//! Core types for marksink-core.
//!
//! This module defines the event handed to a sink by its producers: the
//! [`LogEvent`] and its [`Level`].

use serde::Deserialize;

/// A single log call, already formatted by the producer.
///
/// The sink treats everything except `message` as opaque data for the
/// [`Formatter`](crate::layout::Formatter); only the message is scanned for
/// the search string.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Time the event was created (UTC).
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Severity of the event.
    pub level: Level,
    /// Logger name the event was emitted through.
    pub target: String,
    /// Name of the producing thread, if it has one.
    pub thread: Option<String>,
    /// The formatted message text.
    pub message: String,
}

impl LogEvent {
    /// Create an event stamped with the current time and the calling
    /// thread's name, emitted through the `root` target.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            level,
            target: "root".to_string(),
            thread: std::thread::current().name().map(str::to_string),
            message: message.into(),
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: chrono::DateTime<chrono::Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = Some(thread.into());
        self
    }
}

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Level {
    /// Upper-case name as rendered by `%p`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}
