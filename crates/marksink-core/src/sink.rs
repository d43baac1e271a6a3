//! FileSink — append-mode file sink with search-string markers.
//!
//! The sink owns one file handle, opened in append mode when the sink is
//! built. Every [`append`](FileSink::append) runs the whole sequence below
//! under a single lock, so one event's line and its marker are never split
//! by another producer's bytes:
//!
//! ```text
//! lock ──► format ──► write line ──► scan message ──► write marker? ──► unlock
//! ```
//!
//! # Lifecycle
//!
//! `Open` is entered during construction; [`close`](FileSink::close) moves
//! the sink to `Closed`, which is terminal. Closing twice is a no-op, and
//! appending to a closed sink fails with [`ResourceError::Closed`]. Dropping
//! the sink closes it.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::{FailurePolicy, SinkConfig};
use crate::error::{AppendError, ConfigError, ResourceError, Result};
use crate::filter::{Filter, ThresholdFilter};
use crate::layout::{Formatter, PatternLayout};
use crate::pattern::SearchPattern;
use crate::types::LogEvent;

/// File used when no `log_file` is configured.
pub const DEFAULT_LOG_FILE: &str = "FileSink.log";

/// Lifecycle state of a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkState {
    Open,
    Closed,
}

/// A named destination for log events.
///
/// [`dispatch`](Appender::dispatch) is the entry point for producers: it
/// applies the upstream filter and hands accepted events to `append`.
pub trait Appender: Send + Sync {
    fn name(&self) -> &str;

    /// Upstream filter, if one was configured.
    fn filter(&self) -> Option<&dyn Filter> {
        None
    }

    fn append(&self, event: &LogEvent) -> Result<()>;

    fn close(&self) -> Result<()>;

    /// Filter `event`, then append it.
    fn dispatch(&self, event: &LogEvent) -> Result<()> {
        if let Some(filter) = self.filter() {
            if !filter.accepts(event) {
                return Ok(());
            }
        }
        self.append(event)
    }
}

/// Handle an open sink writes through.
trait Output: Write + Send {
    /// Push written bytes down to the device.
    fn sync(&mut self) -> io::Result<()>;
}

impl Output for File {
    fn sync(&mut self) -> io::Result<()> {
        match self.sync_all() {
            // Character devices, pipes and FIFOs reject fsync with EINVAL.
            Err(err) if err.kind() == io::ErrorKind::InvalidInput => Ok(()),
            other => other,
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Collects sink settings; [`build`](FileSinkBuilder::build) validates them
/// and opens the file.
#[derive(Default)]
pub struct FileSinkBuilder {
    name: Option<String>,
    log_file: Option<PathBuf>,
    search_string: Option<String>,
    filter: Option<Box<dyn Filter>>,
    formatter: Option<Box<dyn Formatter>>,
    failure_policy: FailurePolicy,
}

impl FileSinkBuilder {
    pub fn log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn search_string(mut self, search: impl Into<String>) -> Self {
        self.search_string = Some(search.into());
        self
    }

    pub fn filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Validate the settings and open the log file in append mode.
    ///
    /// Fails with [`ConfigError::MissingName`] for a blank name and with
    /// [`ResourceError::Open`] if the file cannot be opened. Nothing is
    /// created on disk when validation fails.
    pub fn build(self) -> Result<FileSink> {
        self.build_with(|path| {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(file) as Box<dyn Output>)
        })
    }

    fn build_with<F>(self, open: F) -> Result<FileSink>
    where
        F: FnOnce(&Path) -> io::Result<Box<dyn Output>>,
    {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or(ConfigError::MissingName)?;
        let pattern = SearchPattern::compile(self.search_string.as_deref())?;
        let formatter: Box<dyn Formatter> = match self.formatter {
            Some(formatter) => formatter,
            None => Box::new(PatternLayout::default()),
        };
        let path = self
            .log_file
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        let out = open(&path).map_err(|source| ResourceError::Open {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(
            sink = %name,
            path = %path.display(),
            search = ?pattern.search_string(),
            "file sink opened"
        );

        Ok(FileSink {
            name,
            path,
            pattern,
            filter: self.filter,
            formatter,
            failure_policy: self.failure_policy,
            out: Mutex::new(Some(out)),
        })
    }
}

// ---------------------------------------------------------------------------
// FileSink
// ---------------------------------------------------------------------------

/// Thread-safe append-only file sink.
///
/// Share it between producer threads behind an `Arc`.
pub struct FileSink {
    name: String,
    path: PathBuf,
    pattern: SearchPattern,
    filter: Option<Box<dyn Filter>>,
    formatter: Box<dyn Formatter>,
    failure_policy: FailurePolicy,
    /// `None` once closed.
    out: Mutex<Option<Box<dyn Output>>>,
}

impl std::fmt::Debug for FileSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSink")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("search_string", &self.pattern.search_string())
            .field("failure_policy", &self.failure_policy)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl FileSink {
    pub fn builder(name: impl Into<String>) -> FileSinkBuilder {
        FileSinkBuilder {
            name: Some(name.into()),
            ..FileSinkBuilder::default()
        }
    }

    /// A sink with the default layout, no search string and no filter.
    pub fn new(name: impl Into<String>, log_file: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(name).log_file(log_file).build()
    }

    /// Build a sink from a parsed config document.
    pub fn from_config(config: SinkConfig) -> Result<Self> {
        let mut builder = FileSinkBuilder {
            name: config.name,
            log_file: config.log_file,
            search_string: config.search_string,
            failure_policy: config.failure_policy,
            ..FileSinkBuilder::default()
        };
        if let Some(pattern) = config.pattern {
            builder = builder.formatter(PatternLayout::new(&pattern)?);
        }
        if let Some(min) = config.threshold {
            builder = builder.filter(ThresholdFilter::new(min));
        }
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn search_string(&self) -> Option<&str> {
        self.pattern.search_string()
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    pub fn state(&self) -> SinkState {
        if self.lock().is_some() {
            SinkState::Open
        } else {
            SinkState::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state() == SinkState::Open
    }

    /// Write `event` and, if its message contains the search string, a
    /// marker line straight after it.
    ///
    /// Blocks until both writes finish. Under [`FailurePolicy::Ignore`] a
    /// format or write failure is logged and swallowed; under
    /// [`FailurePolicy::Propagate`] it is returned as an
    /// [`AppendError`]. Appending to a closed sink always fails with
    /// [`ResourceError::Closed`], whatever the policy.
    pub fn append(&self, event: &LogEvent) -> Result<()> {
        let mut out = self.lock();
        let Some(output) = out.as_mut() else {
            return Err(ResourceError::Closed {
                name: self.name.clone(),
            }
            .into());
        };

        match self.write_event(output.as_mut(), event) {
            Ok(()) => Ok(()),
            Err(err) => match self.failure_policy {
                FailurePolicy::Ignore => {
                    tracing::warn!(sink = %self.name, error = %err, "append failed, event dropped");
                    Ok(())
                }
                FailurePolicy::Propagate => Err(err.into()),
            },
        }
    }

    /// Flush, sync and release the file. Idempotent.
    ///
    /// Targets that cannot be synced (`/dev/null`, pipes, terminals) close
    /// cleanly. The handle is released even if the flush fails, so the sink
    /// is `Closed` afterwards in every case.
    pub fn close(&self) -> Result<()> {
        let mut out = self.lock();
        let Some(output) = out.take() else {
            return Ok(());
        };
        let flushed = flush(output);
        drop(out);

        tracing::debug!(sink = %self.name, path = %self.path.display(), "file sink closed");
        flushed.map_err(|source| {
            ResourceError::Close {
                name: self.name.clone(),
                source,
            }
            .into()
        })
    }

    fn write_event(
        &self,
        out: &mut dyn Output,
        event: &LogEvent,
    ) -> std::result::Result<(), AppendError> {
        let bytes = self.formatter.to_bytes(event)?;
        out.write_all(&bytes).map_err(AppendError::Write)?;
        if let Some(marker) = self.pattern.marker_for(&event.message) {
            out.write_all(marker.as_bytes()).map_err(AppendError::Marker)?;
        }
        Ok(())
    }

    /// Poisoning is ignored; the handle itself is never left mid-write.
    fn lock(&self) -> MutexGuard<'_, Option<Box<dyn Output>>> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn flush(mut out: Box<dyn Output>) -> io::Result<()> {
    out.flush()?;
    out.sync()
}

impl Appender for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn filter(&self) -> Option<&dyn Filter> {
        self.filter.as_deref()
    }

    fn append(&self, event: &LogEvent) -> Result<()> {
        FileSink::append(self, event)
    }

    fn close(&self) -> Result<()> {
        FileSink::close(self)
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::warn!(sink = %self.name, error = %err, "failed to close file sink");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
