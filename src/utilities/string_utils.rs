//! String utility functions shared by the trope normalizer, the segmenter
//! and the remix engine.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static MULTI_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Marker appended to text cut by [`truncate_with_ellipsis`].
pub const ELLIPSIS: &str = "...";

/// Collapse every run of two or more whitespace characters into one space.
///
/// A single whitespace character (including a lone tab or newline) is left
/// untouched.
pub fn collapse_whitespace(value: &str) -> String {
    MULTI_WHITESPACE.replace_all(value, " ").into_owned()
}

/// Uppercase the first character, leaving the rest as is.
///
/// Empty input yields an empty string.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize the first letter of every whitespace-delimited word.
///
/// Whitespace runs between words become a single space.
///
/// # Arguments
/// * `value` - Text to title-case.
pub fn title_case(value: &str) -> String {
    WHITESPACE_RUN
        .split(value)
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cap `value` at `max_chars` characters.
///
/// Longer text is cut to `max_chars - 3` characters and suffixed with
/// [`ELLIPSIS`], so the result is exactly `max_chars` long.
pub fn truncate_with_ellipsis(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = value.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Keep the first occurrence of every case-insensitively distinct entry,
/// preserving input order and the first-seen spelling.
pub fn dedupe_case_insensitive<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for entry in entries {
        let entry = entry.into();
        if seen.insert(entry.to_lowercase()) {
            kept.push(entry);
        }
    }
    kept
}
