//! Raw-text segmentation of a prompt catalogue.
//!
//! The heuristic treats every bulleted or numbered line as the start of a
//! new prompt. The `regex` crate has no lookaround, so the "newline followed
//! by a marker" boundary is found by scanning newline positions and matching
//! an anchored marker pattern at each one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utilities::string_utils::{collapse_whitespace, dedupe_case_insensitive};

/// Fragments shorter than this (in characters) are not prompts.
pub const MIN_PROMPT_CHARS: usize = 6;

static LINE_ENDINGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());
static TAB_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\t+").unwrap());
static EXCESS_BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static LINE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-–—•0-9]+\s").unwrap());
static EMBEDDED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\n)(?:[0-9]+\.|[-–—•])").unwrap());
static LEADING_MARKERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-–—•0-9.\s]+").unwrap());

/// Split raw extracted text into an ordered, deduplicated list of prompts.
///
/// Never fails: text without any bullet or numbering comes back as a single
/// prompt, and text with nothing long enough comes back empty. Callers decide
/// how to surface an empty result.
///
/// # Example
/// ```
/// use dna_lab::split_text_into_prompts;
///
/// let prompts = split_text_into_prompts("- A hero flies\n- A villain lurks\n- A hero flies");
/// assert_eq!(prompts, vec!["A hero flies", "A villain lurks"]);
/// ```
pub fn split_text_into_prompts(source: &str) -> Vec<String> {
    let normalized = normalize(source);
    let condensed = EXCESS_BLANK_LINES.replace_all(&normalized, "\n\n");

    let fragments = split_before_markers(&condensed)
        .into_iter()
        .flat_map(|chunk| {
            let joined = PARAGRAPH_BREAK.replace_all(chunk, "\n");
            EMBEDDED_MARKER
                .split(&joined)
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .map(|fragment| clean_fragment(&fragment))
        .filter(|fragment| fragment.chars().count() >= MIN_PROMPT_CHARS);

    let prompts = dedupe_case_insensitive(fragments);
    log::debug!("Segmented {} prompts from {} bytes of text", prompts.len(), source.len());
    prompts
}

/// Unify line endings, bullet glyphs and tabs, then trim.
fn normalize(source: &str) -> String {
    let unified = LINE_ENDINGS.replace_all(source, "\n");
    let dashed = unified.replace(['\u{2022}', '\u{00b7}'], "-");
    TAB_RUN.replace_all(&dashed, " ").trim().to_string()
}

/// Split at every newline whose following text opens with a list marker.
/// The boundary newline itself is dropped.
fn split_before_markers(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    for (index, _) in text.match_indices('\n') {
        if LINE_MARKER.is_match(&text[index + 1..]) {
            chunks.push(&text[start..index]);
            start = index + 1;
        }
    }
    chunks.push(&text[start..]);
    chunks
}

fn clean_fragment(fragment: &str) -> String {
    let stripped = LEADING_MARKERS.replace(fragment, "");
    collapse_whitespace(&stripped).trim().to_string()
}
