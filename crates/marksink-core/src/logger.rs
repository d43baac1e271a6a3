//! Producer-side facade.
//!
//! A [`Logger`] stamps each call with a level, the current time and the
//! calling thread's name, then hands the event to its appender through
//! [`Appender::dispatch`]. Loggers are cheap to clone and share one sink.

use std::sync::Arc;

use crate::error::Result;
use crate::sink::Appender;
use crate::types::{Level, LogEvent};

#[derive(Clone)]
pub struct Logger {
    target: String,
    appender: Arc<dyn Appender>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("target", &self.target)
            .field("appender", &self.appender.name())
            .finish()
    }
}

impl Logger {
    pub fn new(target: impl Into<String>, appender: Arc<dyn Appender>) -> Self {
        Self {
            target: target.into(),
            appender,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn log(&self, level: Level, message: impl Into<String>) -> Result<()> {
        let event = LogEvent::new(level, message).with_target(self.target.as_str());
        self.appender.dispatch(&event)
    }

    pub fn trace(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Trace, message)
    }

    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Debug, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Info, message)
    }

    pub fn warn(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Warn, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Error, message)
    }

    pub fn fatal(&self, message: impl Into<String>) -> Result<()> {
        self.log(Level::Fatal, message)
    }
}
