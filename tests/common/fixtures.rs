//! Static corpora and constants used across harnesses.

/// Search string configured on [`search_sink`](super::search_sink).
pub const SEARCH_STRING: &str = "abcdef";

/// Marker line written after a message containing [`SEARCH_STRING`].
pub const SEARCH_MARKER: &str = ">>> Search string found: abcdef";

/// Messages that contain [`SEARCH_STRING`] somewhere.
pub const CORPUS_MATCHING: &[&str] = &[
    "prefixabcdefsuffix",
    "abcdef",
    "abcdef at the start",
    "at the end abcdef",
    "twice: abcdef and abcdef",
    "multi-line message\nwith abcdef on the second line",
];

/// Messages that do not contain [`SEARCH_STRING`].
pub const CORPUS_NON_MATCHING: &[&str] = &[
    "",
    "abcde",
    "bcdef",
    "ABCDEF",
    "abc def",
    "a.b.c.d.e.f",
    "Server started on port 8080",
];

/// Search strings made of regex metacharacters, paired with a message that
/// would match if the string were interpreted as a pattern but does not
/// contain it literally.
pub const CORPUS_METACHAR: &[(&str, &str)] = &[
    ("a.c", "abc"),
    ("1+1", "11"),
    ("x*", "y"),
    ("^start", "start here"),
    ("end$", "the end"),
    ("[abc]", "b"),
    ("(group)", "group"),
    ("a|b", "a"),
    ("\\d", "7"),
    ("{2}", "2"),
    ("a?", "b"),
];

/// Generate `n` synthetic messages, one in ten containing [`SEARCH_STRING`].
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            if i % 10 == 0 {
                format!("request {i} hit abcdef in payload")
            } else {
                format!("request {i} completed in {}ms", i % 97)
            }
        })
        .collect()
}
