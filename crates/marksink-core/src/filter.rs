//! Upstream event filters.
//!
//! A filter is consulted by [`Appender::dispatch`](crate::sink::Appender::dispatch)
//! before an event reaches `append`. The sink itself never filters.

use crate::types::{Level, LogEvent};

/// Decides whether an event is passed on to the sink.
pub trait Filter: Send + Sync {
    fn accepts(&self, event: &LogEvent) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&LogEvent) -> bool + Send + Sync,
{
    fn accepts(&self, event: &LogEvent) -> bool {
        self(event)
    }
}

/// Accepts events at or above a minimum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdFilter {
    pub min: Level,
}

impl ThresholdFilter {
    pub fn new(min: Level) -> Self {
        Self { min }
    }
}

impl Filter for ThresholdFilter {
    fn accepts(&self, event: &LogEvent) -> bool {
        event.level >= self.min
    }
}
