//! Domain-specific assertion macros for marksink harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* sink invariant was violated.

use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Line assertions
// ---------------------------------------------------------------------------

/// Assert that at least one line of a log file contains `needle`.
///
/// ```rust
/// assert_log_contains!(fixture.contents(), "test msg");
/// ```
#[macro_export]
macro_rules! assert_log_contains {
    ($contents:expr, $needle:expr) => {{
        let contents: &str = &$contents;
        let needle: &str = $needle;
        if !contents.lines().any(|line| line.contains(needle)) {
            panic!(
                "assert_log_contains! failed: no line contains {:?}.\n  log:\n{}",
                needle, contents
            );
        }
    }};
}

/// Assert that no line of a log file contains `needle`.
#[macro_export]
macro_rules! assert_log_lacks {
    ($contents:expr, $needle:expr) => {{
        let contents: &str = &$contents;
        let needle: &str = $needle;
        let hits: Vec<&str> = contents
            .lines()
            .filter(|line| line.contains(needle))
            .collect();
        if !hits.is_empty() {
            panic!(
                "assert_log_lacks! failed: {} line(s) contain {:?}: {:?}",
                hits.len(),
                needle,
                hits
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Marker assertions
// ---------------------------------------------------------------------------

/// Assert that every marker line directly follows a line containing the
/// search string, and every such line is directly followed by a marker.
///
/// This is the adjacency invariant: one event's line and its marker are never
/// separated by another writer.
pub fn assert_markers_adjacent(lines: &[String], search: &str, marker: &str) {
    for (i, line) in lines.iter().enumerate() {
        if line == marker {
            assert!(
                i > 0 && lines[i - 1].contains(search) && lines[i - 1] != marker,
                "marker at line {i} does not follow a matching line: {:?}",
                lines.get(i.wrapping_sub(1))
            );
        } else if line.contains(search) {
            assert_eq!(
                lines.get(i + 1).map(String::as_str),
                Some(marker),
                "matching line {i} is not followed by its marker: {line:?}"
            );
        }
    }
}

/// Count marker lines in a log file.
pub fn count_markers(lines: &[String], marker: &str) -> usize {
    lines.iter().filter(|line| *line == marker).count()
}
