//! # DNA Lab
//!
//! Remix a catalogue of image-generation prompts into a shared 1980s
//! animation "genome". A run normalizes the user's tropes, draws one
//! [`DnaBlueprint`] of ten stylistic attributes from fixed vocabularies, and
//! rewrites every prompt against that blueprint with one freshly injected
//! trope.
//!
//! The core is synchronous and pure apart from the injected
//! [`RandomSource`]: pass a seeded generator or [`ScriptedDraws`] for
//! reproducible output.
//!
//! ```
//! use dna_lab::{create_blueprint, derive_tropes, remix_prompt, lab_rng, DnaContext};
//!
//! let tropes = derive_tropes("laser grid skylines, retro mecha");
//! let mut rng = lab_rng(Some(7));
//! let blueprint = create_blueprint(&tropes, &mut rng).unwrap();
//! let context = DnaContext::new(&blueprint, &tropes);
//! let result = remix_prompt("a pilot on a rooftop", &context, &mut rng).unwrap();
//! assert!(result.adapted.starts_with("A pilot on a rooftop is reborn"));
//! ```

pub mod catalogue;
pub mod config;
pub mod dna;
pub mod error;
pub mod lab;
pub mod report;
pub mod utilities;

pub use catalogue::{split_text_into_prompts, PromptCatalogue};
pub use config::LabConfig;
pub use dna::{
    create_blueprint, derive_tropes, lab_rng, pick_uniform, remix_prompt, summarize_blueprint,
    BlueprintEntry, BlueprintField, DnaBlueprint, DnaContext, RandomSource, RemixResult,
    ScriptedDraws,
};
pub use error::{DnaError, Result};
pub use lab::{DnaLab, GenerationRun};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
