//! marksink-core — append-only file sink with search-string markers.
//!
//! This crate exposes the sink and its collaborators as public modules so
//! that the binary, the integration harnesses and the benchmarks can import
//! them directly.
//!
//! # Architecture
//!
//! ```text
//! Logger ──► Filter ──► FileSink::append ──► Formatter ──► file
//!                              │
//!                              └──► SearchPattern ──► marker line
//! ```
//!
//! Every append runs synchronously on the caller's thread under the sink's
//! single lock. There is no queue and no background flusher.

pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod logger;
pub mod pattern;
pub mod sink;
pub mod types;

pub use config::{FailurePolicy, SinkConfig};
pub use error::{AppendError, ConfigError, FormatError, ResourceError, Result, SinkError};
pub use filter::{Filter, ThresholdFilter};
pub use layout::{Formatter, PatternLayout};
pub use logger::Logger;
pub use pattern::SearchPattern;
pub use sink::{Appender, FileSink, FileSinkBuilder, SinkState};
pub use types::{Level, LogEvent};
