//! Lab session: the state behind one "feed prompts, pick tropes, generate"
//! workflow.
//!
//! A session owns the current prompt catalogue, the trope text and the last
//! generation run. Loading a new catalogue discards the last run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalogue::PromptCatalogue;
use crate::config::LabConfig;
use crate::dna::{
    create_blueprint, derive_tropes, remix_prompt, summarize_blueprint, BlueprintEntry,
    DnaBlueprint, DnaContext, RandomSource, RemixResult,
};
use crate::error::{DnaError, Result};

/// The outcome of one generation: a blueprint and the prompts remixed
/// against it, in catalogue order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRun {
    pub id: Uuid,
    pub blueprint: DnaBlueprint,
    pub tropes: Vec<String>,
    pub results: Vec<RemixResult>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationRun {
    /// Labelled blueprint attributes for display.
    pub fn summary(&self) -> Vec<BlueprintEntry> {
        summarize_blueprint(&self.blueprint)
    }
}

/// Run one generation over `prompts` with a fresh blueprint.
///
/// The blueprint consumes its draws first, then each prompt consumes four
/// draws in order.
pub fn generate_run<R>(
    prompts: &[String],
    tropes: Vec<String>,
    rng: &mut R,
) -> Result<GenerationRun>
where
    R: RandomSource + ?Sized,
{
    let blueprint = create_blueprint(&tropes, rng)?;
    let context = DnaContext::new(&blueprint, &tropes);
    let results = prompts
        .iter()
        .map(|prompt| remix_prompt(prompt, &context, rng))
        .collect::<Result<Vec<_>>>()?;

    Ok(GenerationRun {
        id: Uuid::new_v4(),
        blueprint,
        tropes,
        results,
        generated_at: Utc::now(),
    })
}

/// A lab session.
#[derive(Debug, Clone)]
pub struct DnaLab {
    config: LabConfig,
    tropes_text: String,
    catalogue: PromptCatalogue,
    last_run: Option<GenerationRun>,
}

impl Default for DnaLab {
    fn default() -> Self {
        Self::new(LabConfig::default())
    }
}

impl DnaLab {
    /// Start a session with the sample deck and the configured trope text.
    pub fn new(config: LabConfig) -> Self {
        Self {
            tropes_text: config.tropes_text.clone(),
            config,
            catalogue: PromptCatalogue::sample(),
            last_run: None,
        }
    }

    /// Replace the catalogue, discarding the last run.
    pub fn with_catalogue(mut self, catalogue: PromptCatalogue) -> Self {
        self.catalogue = catalogue;
        self.last_run = None;
        self
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn catalogue(&self) -> &PromptCatalogue {
        &self.catalogue
    }

    pub fn tropes_text(&self) -> &str {
        &self.tropes_text
    }

    /// Replace the raw trope text. The last run is kept.
    pub fn set_tropes_text(&mut self, text: impl Into<String>) {
        self.tropes_text = text.into();
    }

    /// The normalized tropes of the current text.
    pub fn tropes(&self) -> Vec<String> {
        derive_tropes(&self.tropes_text)
    }

    /// The first `tag_cloud_limit` tropes.
    pub fn tag_cloud(&self) -> Vec<String> {
        let mut tropes = self.tropes();
        tropes.truncate(self.config.tag_cloud_limit);
        tropes
    }

    /// Load extracted text as the new catalogue.
    ///
    /// # Arguments
    /// * `source_name` - Name of the source document.
    /// * `raw_text` - Plain text extracted from it.
    ///
    /// # Returns
    /// The number of prompts found.
    ///
    /// # Errors
    /// Returns [`DnaError::NoPromptsFound`] and keeps the current catalogue
    /// when the text holds no prompts.
    pub fn load_catalogue(&mut self, source_name: &str, raw_text: &str) -> Result<usize> {
        let catalogue = PromptCatalogue::from_text(source_name, raw_text)?;
        let count = catalogue.len();
        log::info!("{}", catalogue.source_label());
        self.catalogue = catalogue;
        self.last_run = None;
        Ok(count)
    }

    /// Generate a blueprint and remix up to `max_prompts_per_run` prompts.
    ///
    /// # Errors
    /// Returns [`DnaError::EmptyCatalogue`] when there is nothing to remix.
    pub fn generate<R>(&mut self, rng: &mut R) -> Result<&GenerationRun>
    where
        R: RandomSource + ?Sized,
    {
        if self.catalogue.is_empty() {
            return Err(DnaError::EmptyCatalogue);
        }
        let prompts = self.catalogue.head(self.config.max_prompts_per_run);
        let run = generate_run(prompts, self.tropes(), rng)?;
        log::info!(
            "Generation {} remixed {} of {} prompts ({})",
            run.id,
            run.results.len(),
            self.catalogue.len(),
            run.blueprint.slogan
        );
        Ok(&*self.last_run.insert(run))
    }

    /// The most recent generation, if any.
    pub fn last_run(&self) -> Option<&GenerationRun> {
        self.last_run.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::SAMPLE_SOURCE_LABEL;
    use crate::dna::{lab_rng, ScriptedDraws, MAX_PROMPT_LENGTH};

    #[test]
    fn test_new_session_uses_sample_deck() {
        let lab = DnaLab::default();
        assert_eq!(lab.catalogue().len(), 4);
        assert_eq!(lab.catalogue().source_label(), SAMPLE_SOURCE_LABEL);
        assert_eq!(lab.tropes().len(), 5);
        assert!(lab.last_run().is_none());
    }

    #[test]
    fn test_tag_cloud_is_limited() {
        let config = LabConfig {
            tag_cloud_limit: 2,
            ..LabConfig::default()
        };
        let lab = DnaLab::new(config);
        assert_eq!(lab.tag_cloud(), vec!["laser grid skylines", "synthwave hero poses"]);
    }

    #[test]
    fn test_generate_remixes_catalogue_in_order() {
        let mut lab = DnaLab::default();
        let run = lab.generate(&mut lab_rng(Some(1))).unwrap().clone();
        assert_eq!(run.results.len(), 4);
        assert_eq!(run.summary().len(), 10);
        for (result, prompt) in run.results.iter().zip(lab.catalogue().prompts()) {
            assert_eq!(&result.original, prompt);
            assert!(result.adapted.chars().count() <= MAX_PROMPT_LENGTH);
            assert!(result.injected_tropes.contains(&run.blueprint.signature_trope));
        }
        assert_eq!(lab.last_run(), Some(&run));
    }

    #[test]
    fn test_generate_respects_prompt_limit() {
        let config = LabConfig {
            max_prompts_per_run: 2,
            ..LabConfig::default()
        };
        let mut lab = DnaLab::new(config);
        let run = lab.generate(&mut lab_rng(Some(2))).unwrap();
        assert_eq!(run.results.len(), 2);
    }

    #[test]
    fn test_same_seed_same_run_content() {
        let mut a = DnaLab::default();
        let mut b = DnaLab::default();
        let run_a = a.generate(&mut lab_rng(Some(99))).unwrap().clone();
        let run_b = b.generate(&mut lab_rng(Some(99))).unwrap().clone();
        assert_eq!(run_a.blueprint, run_b.blueprint);
        assert_eq!(run_a.results, run_b.results);
        assert_ne!(run_a.id, run_b.id);
    }

    #[test]
    fn test_load_catalogue_resets_last_run() {
        let mut lab = DnaLab::default();
        lab.generate(&mut ScriptedDraws::new(vec![0.1, 0.6])).unwrap();
        let count = lab
            .load_catalogue("deck.pdf", "1. A hero flies\n2. A villain lurks")
            .unwrap();
        assert_eq!(count, 2);
        assert!(lab.last_run().is_none());
        assert_eq!(lab.catalogue().source_label(), "deck.pdf • 2 prompts extracted");
    }

    #[test]
    fn test_failed_load_keeps_catalogue() {
        let mut lab = DnaLab::default();
        lab.generate(&mut lab_rng(Some(4))).unwrap();
        let err = lab.load_catalogue("blank.pdf", "  - ok ").unwrap_err();
        assert!(matches!(err, DnaError::NoPromptsFound));
        assert_eq!(lab.catalogue().len(), 4);
        assert!(lab.last_run().is_some());
    }

    #[test]
    fn test_empty_catalogue_cannot_generate() {
        let mut lab = DnaLab::default()
            .with_catalogue(PromptCatalogue::from_prompts("manual", ["tiny"]));
        let err = lab.generate(&mut lab_rng(Some(5))).unwrap_err();
        assert!(matches!(err, DnaError::EmptyCatalogue));
    }

    #[test]
    fn test_blank_tropes_fall_back_to_defaults() {
        let mut lab = DnaLab::default();
        lab.set_tropes_text("   ");
        let run = lab.generate(&mut lab_rng(Some(8))).unwrap();
        assert_eq!(run.tropes.len(), 10);
    }

    #[test]
    fn test_run_serializes() {
        let mut lab = DnaLab::default();
        let run = lab.generate(&mut lab_rng(Some(6))).unwrap();
        let json = serde_json::to_value(run).unwrap();
        assert_eq!(json["results"].as_array().map(Vec::len), Some(4));
        assert!(json["blueprint"]["signature_trope"].is_string());
    }
}
