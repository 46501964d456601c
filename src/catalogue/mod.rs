//! Prompt catalogues: the ordered prompt list a lab run remixes.

pub mod segmenter;

use serde::{Deserialize, Serialize};

use crate::dna::vocabulary::SAMPLE_PROMPTS;
use crate::error::{DnaError, Result};
use crate::utilities::string_utils::dedupe_case_insensitive;

pub use segmenter::{split_text_into_prompts, MIN_PROMPT_CHARS};

/// Label shown for the built-in sample deck.
pub const SAMPLE_SOURCE_LABEL: &str = "Sample prompt deck loaded";

/// An ordered, deduplicated list of prompts plus a label describing where
/// they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCatalogue {
    prompts: Vec<String>,
    source_label: String,
}

impl Default for PromptCatalogue {
    fn default() -> Self {
        Self::sample()
    }
}

impl PromptCatalogue {
    /// The built-in sample deck.
    pub fn sample() -> Self {
        Self {
            prompts: SAMPLE_PROMPTS.iter().map(|p| p.to_string()).collect(),
            source_label: SAMPLE_SOURCE_LABEL.to_string(),
        }
    }

    /// Segment extracted text into a catalogue.
    ///
    /// # Arguments
    /// * `source_name` - Name of the source document, used in the label.
    /// * `raw_text` - Plain text already extracted from the source.
    ///
    /// # Errors
    /// Returns [`DnaError::NoPromptsFound`] when segmentation finds nothing.
    pub fn from_text(source_name: &str, raw_text: &str) -> Result<Self> {
        let prompts = split_text_into_prompts(raw_text);
        if prompts.is_empty() {
            log::warn!("No prompts found in {}", source_name);
            return Err(DnaError::NoPromptsFound);
        }
        let source_label = format!("{} • {} prompts extracted", source_name, prompts.len());
        Ok(Self {
            prompts,
            source_label,
        })
    }

    /// Build a catalogue from prompts that are already separated.
    ///
    /// Entries are trimmed, entries shorter than [`MIN_PROMPT_CHARS`] are
    /// dropped and case-insensitive repeats are removed. The result may be
    /// empty.
    pub fn from_prompts<I, S>(source_label: impl Into<String>, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned = prompts
            .into_iter()
            .map(|prompt| prompt.as_ref().trim().to_string())
            .filter(|prompt| prompt.chars().count() >= MIN_PROMPT_CHARS);
        Self {
            prompts: dedupe_case_insensitive(cleaned),
            source_label: source_label.into(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// The first `limit` prompts, in catalogue order.
    pub fn head(&self, limit: usize) -> &[String] {
        &self.prompts[..limit.min(self.prompts.len())]
    }
}
