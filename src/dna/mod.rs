//! The prompt-transformation core.
//!
//! Control flow of a run: derive the tropes, draw one blueprint, then remix
//! every prompt against that blueprint with fresh draws per prompt.

pub mod blueprint;
pub mod random;
pub mod remix;
pub mod summary;
pub mod tropes;
pub mod vocabulary;

pub use blueprint::{create_blueprint, DnaBlueprint};
pub use random::{lab_rng, pick_index, pick_uniform, RandomSource, ScriptedDraws};
pub use remix::{remix_prompt, DnaContext, RemixResult, MAX_PROMPT_LENGTH};
pub use summary::{summarize_blueprint, BlueprintEntry, BlueprintField};
pub use tropes::{default_tropes, derive_tropes};
