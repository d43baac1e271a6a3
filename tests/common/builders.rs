//! Test builders — ergonomic constructors for `LogEvent` and `FileSink`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use marksink_core::{FailurePolicy, FileSink, FileSinkBuilder, Level, LogEvent};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// LogEventBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`LogEvent`] test fixtures.
///
/// # Example
///
/// ```rust
/// let event = LogEventBuilder::new("timeout connecting to db")
///     .level(Level::Error)
///     .target("db")
///     .thread("worker-3")
///     .build();
/// ```
pub struct LogEventBuilder {
    event: LogEvent,
}

impl LogEventBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: LogEvent::new(Level::Info, message).with_target("test"),
        }
    }

    pub fn level(mut self, level: Level) -> Self {
        self.event.level = level;
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.event.target = target.into();
        self
    }

    pub fn thread(mut self, thread: impl Into<String>) -> Self {
        self.event.thread = Some(thread.into());
        self
    }

    pub fn ts(mut self, ts: chrono::DateTime<chrono::Utc>) -> Self {
        self.event.timestamp = ts;
        self
    }

    pub fn build(self) -> LogEvent {
        self.event
    }
}

/// Build an INFO event.
pub fn info_event(message: &str) -> LogEvent {
    LogEventBuilder::new(message).level(Level::Info).build()
}

/// Build an ERROR event.
pub fn error_event(message: &str) -> LogEvent {
    LogEventBuilder::new(message).level(Level::Error).build()
}

// ---------------------------------------------------------------------------
// Sink fixtures
// ---------------------------------------------------------------------------

/// A sink writing into its own temporary directory.
///
/// Field order matters: the sink drops (and closes) before the directory is
/// removed.
pub struct TestSink {
    pub sink: FileSink,
    pub path: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestSink {
    /// Everything written to the log file so far.
    pub fn contents(&self) -> String {
        read_log(&self.path)
    }

    /// The log file split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

/// Build a sink named `name` over `test.log` in a fresh temp dir, letting
/// `configure` add search string, layout, filter or policy.
pub fn test_sink_with(
    name: &str,
    configure: impl FnOnce(FileSinkBuilder) -> FileSinkBuilder,
) -> TestSink {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("test.log");
    let sink = configure(FileSink::builder(name).log_file(&path))
        .build()
        .expect("build test sink");
    TestSink {
        sink,
        path,
        _dir: dir,
    }
}

/// A default sink: `%m%n` layout, no search string, ignore policy.
pub fn test_sink() -> TestSink {
    test_sink_with("test", |b| b)
}

/// A sink flagging [`SEARCH_STRING`](super::SEARCH_STRING).
pub fn search_sink() -> TestSink {
    test_sink_with("search", |b| b.search_string(super::SEARCH_STRING))
}

/// A sink that returns append failures to the caller.
pub fn strict_sink_with(
    configure: impl FnOnce(FileSinkBuilder) -> FileSinkBuilder,
) -> TestSink {
    test_sink_with("strict", |b| {
        configure(b.failure_policy(FailurePolicy::Propagate))
    })
}

pub fn read_log(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read log file")
}
