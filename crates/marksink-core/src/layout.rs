//! Event formatting.
//!
//! A [`Formatter`] turns a [`LogEvent`] into the bytes the sink appends.
//! [`PatternLayout`] is the default: a small conversion-pattern language
//! parsed once at construction.
//!
//! # Conversions
//!
//! | Pattern       | Output                                              |
//! |---------------|-----------------------------------------------------|
//! | `%d`          | timestamp, `%Y-%m-%d %H:%M:%S%.3f`                  |
//! | `%d{FORMAT}`  | timestamp rendered with a chrono strftime `FORMAT`  |
//! | `%p`          | level (`INFO`, `WARN`, ...)                         |
//! | `%c`          | target (logger name)                                |
//! | `%t`          | thread name, `unnamed` if the thread has none       |
//! | `%m`          | message                                             |
//! | `%n`          | newline                                             |
//! | `%%`          | a literal `%`                                       |

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};

use crate::error::{ConfigError, FormatError};
use crate::types::LogEvent;

/// Pattern used when no layout is configured: the bare message and a newline.
pub const DEFAULT_PATTERN: &str = "%m%n";

/// Timestamp format used by a bare `%d`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders an event into the bytes written to the sink.
pub trait Formatter: Send + Sync {
    fn to_bytes(&self, event: &LogEvent) -> Result<Vec<u8>, FormatError>;
}

impl<F> Formatter for F
where
    F: Fn(&LogEvent) -> Result<Vec<u8>, FormatError> + Send + Sync,
{
    fn to_bytes(&self, event: &LogEvent) -> Result<Vec<u8>, FormatError> {
        self(event)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Date(String),
    Level,
    Target,
    Thread,
    Message,
}

/// Conversion-pattern formatter.
#[derive(Debug, Clone)]
pub struct PatternLayout {
    pattern: String,
    segments: Vec<Segment>,
}

impl Default for PatternLayout {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            segments: vec![Segment::Message, Segment::Literal("\n".to_string())],
        }
    }
}

impl PatternLayout {
    /// Parse `pattern`. Unknown conversions and malformed date formats are
    /// rejected here, not at render time.
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            pattern: pattern.to_string(),
            segments: parse(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Formatter for PatternLayout {
    fn to_bytes(&self, event: &LogEvent) -> Result<Vec<u8>, FormatError> {
        let mut out = String::with_capacity(event.message.len() + 48);
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Date(format) => write!(out, "{}", event.timestamp.format(format))
                    .map_err(|_| FormatError::Timestamp {
                        format: format.clone(),
                    })?,
                Segment::Level => out.push_str(event.level.as_str()),
                Segment::Target => out.push_str(&event.target),
                Segment::Thread => out.push_str(event.thread.as_deref().unwrap_or("unnamed")),
                Segment::Message => out.push_str(&event.message),
            }
        }
        Ok(out.into_bytes())
    }
}

// ---------------------------------------------------------------------------
// Pattern parsing
// ---------------------------------------------------------------------------

fn parse(pattern: &str) -> Result<Vec<Segment>, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidLayout {
        pattern: pattern.to_string(),
        reason,
    };

    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            literal.push(c);
            continue;
        }
        let segment = match chars.next() {
            Some('%') => {
                literal.push('%');
                continue;
            }
            Some('n') => {
                literal.push('\n');
                continue;
            }
            Some('d') if chars.next_if_eq(&'{').is_some() => {
                let mut format = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => format.push(c),
                        None => return Err(invalid("unterminated '%d{' format".to_string())),
                    }
                }
                if format.is_empty()
                    || StrftimeItems::new(&format).any(|item| matches!(item, Item::Error))
                {
                    return Err(invalid(format!("invalid date format '{format}'")));
                }
                Segment::Date(format)
            }
            Some('d') => Segment::Date(DEFAULT_DATE_FORMAT.to_string()),
            Some('p') => Segment::Level,
            Some('c') => Segment::Target,
            Some('t') => Segment::Thread,
            Some('m') => Segment::Message,
            Some(other) => return Err(invalid(format!("unknown conversion '%{other}'"))),
            None => return Err(invalid("dangling '%' at end of pattern".to_string())),
        };
        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(segment);
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
