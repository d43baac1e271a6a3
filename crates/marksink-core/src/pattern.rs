//! Compiled search pattern and the marker line written on a match.
//!
//! The configured search string is always treated as a literal: every
//! character is escaped before compilation, so `a.c` matches only `a.c` and
//! never `abc`. Matching is a contains test over the whole message,
//! including messages that span several lines.

use regex::{Regex, RegexBuilder};

use crate::error::ConfigError;

/// Text written after `>>> ` on a marker line.
pub const SEARCH_STRING_FOUND_MESSAGE: &str = "Search string found";

/// The search string compiled once at sink construction.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    compiled: Option<Compiled>,
}

#[derive(Debug, Clone)]
struct Compiled {
    search: String,
    regex: Regex,
    marker: String,
}

impl SearchPattern {
    /// Compile `search`. `None` yields a pattern that never matches.
    ///
    /// The compiled-size limit is lifted: an escaped literal grows linearly
    /// with its length, so search strings of any length are accepted.
    pub fn compile(search: Option<&str>) -> Result<Self, ConfigError> {
        let compiled = match search {
            Some(s) => Some(Compiled {
                search: s.to_string(),
                regex: RegexBuilder::new(&regex::escape(s))
                    .size_limit(usize::MAX)
                    .build()?,
                marker: format!(">>> {SEARCH_STRING_FOUND_MESSAGE}: {s}\n"),
            }),
            None => None,
        };
        Ok(Self { compiled })
    }

    /// The configured search string, if any.
    pub fn search_string(&self) -> Option<&str> {
        self.compiled.as_ref().map(|c| c.search.as_str())
    }

    /// True if `message` contains the search string anywhere.
    ///
    /// An empty search string matches every message.
    pub fn matches(&self, message: &str) -> bool {
        match &self.compiled {
            Some(c) => c.regex.is_match(message),
            None => false,
        }
    }

    /// The full marker line, `>>> Search string found: <search>\n`.
    /// `None` when no search string is configured.
    pub fn marker_line(&self) -> Option<&str> {
        self.compiled.as_ref().map(|c| c.marker.as_str())
    }

    /// The marker line to write after `message`, if it contains the search
    /// string.
    pub fn marker_for(&self, message: &str) -> Option<&str> {
        self.marker_line().filter(|_| self.matches(message))
    }
}
