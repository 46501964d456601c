//! Trope normalization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dna::vocabulary::DEFAULT_TROPES;
use crate::utilities::string_utils::{collapse_whitespace, dedupe_case_insensitive};

static TROPE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n;]+").unwrap());
static BULLET_GLYPHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-*•–—]").unwrap());

/// Turn free-form trope text into an ordered, case-insensitively unique list.
///
/// Input is split on commas, semicolons and newlines. Bullet and dash glyphs
/// become spaces, whitespace runs collapse, and empty tokens are dropped.
/// The first spelling of a trope wins. Blank input yields a copy of
/// [`DEFAULT_TROPES`], so the result is never empty.
///
/// # Example
/// ```
/// use dna_lab::derive_tropes;
///
/// assert_eq!(derive_tropes("Laser, laser, MECHA"), vec!["Laser", "MECHA"]);
/// ```
pub fn derive_tropes(raw_input: &str) -> Vec<String> {
    let tokens = TROPE_SEPARATORS
        .split(raw_input)
        .map(|token| BULLET_GLYPHS.replace_all(token, " "))
        .map(|token| collapse_whitespace(&token))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    let tropes = dedupe_case_insensitive(tokens);
    if tropes.is_empty() {
        log::debug!("No tropes supplied, falling back to the default set");
        return default_tropes();
    }
    tropes
}

/// An owned copy of the built-in trope set.
pub fn default_tropes() -> Vec<String> {
    DEFAULT_TROPES.iter().map(|trope| trope.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_and_deduplicates() {
        let input =
            "laser grid skylines, Laser Grid Skylines\nretro mecha - transformations; •cereal mascots";
        let result = derive_tropes(input);
        assert_eq!(
            result,
            vec![
                "laser grid skylines".to_string(),
                "retro mecha transformations".to_string(),
                "cereal mascots".to_string(),
            ]
        );
    }

    #[test]
    fn test_casing_duplicates_keep_first_form() {
        assert_eq!(derive_tropes("Laser, laser, MECHA"), vec!["Laser", "MECHA"]);
    }

    #[test]
    fn test_blank_input_returns_defaults() {
        assert_eq!(derive_tropes(""), default_tropes());
        assert_eq!(derive_tropes("\n \t  ").len(), 10);
        assert_eq!(derive_tropes(",;\n- * •"), default_tropes());
    }

    #[test]
    fn test_dashes_become_spaces() {
        assert_eq!(derive_tropes("neon-lit rain"), vec!["neon lit rain"]);
        assert_eq!(derive_tropes("mall — chases"), vec!["mall chases"]);
        assert_eq!(derive_tropes("* arcade bosses"), vec!["arcade bosses"]);
    }

    #[test]
    fn test_separator_runs_yield_no_empty_tropes() {
        assert_eq!(
            derive_tropes("idols,,;\n\nmecha"),
            vec!["idols".to_string(), "mecha".to_string()]
        );
    }
}
