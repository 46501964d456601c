//! Per-prompt remix synthesis.

use serde::{Deserialize, Serialize};

use crate::dna::blueprint::DnaBlueprint;
use crate::dna::random::{pick_uniform, RandomSource};
use crate::dna::vocabulary::{ADJECTIVES, ENDING_TAGS, STRUCTURE_FRAGMENTS};
use crate::error::{DnaError, Result};
use crate::utilities::string_utils::{capitalize_first, title_case, truncate_with_ellipsis};

/// Longest adapted prompt, in characters.
pub const MAX_PROMPT_LENGTH: usize = 360;

/// The shared inputs of every remix in a run.
#[derive(Debug, Clone, Copy)]
pub struct DnaContext<'a> {
    pub blueprint: &'a DnaBlueprint,
    pub tropes: &'a [String],
}

impl<'a> DnaContext<'a> {
    pub fn new(blueprint: &'a DnaBlueprint, tropes: &'a [String]) -> Self {
        Self { blueprint, tropes }
    }
}

/// One adapted prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemixResult {
    /// The input prompt, trimmed.
    pub original: String,
    /// The synthesized prompt, at most [`MAX_PROMPT_LENGTH`] characters.
    pub adapted: String,
    /// Signature, support and injected tropes, duplicates removed.
    pub injected_tropes: Vec<String>,
}

/// Remix `base_prompt` against the run's blueprint.
///
/// Consumes four draws, in order: injected trope, structure fragment,
/// adjective, ending tag. The same inputs and draws always give the same
/// result.
///
/// # Arguments
/// * `base_prompt` - Prompt to adapt; surrounding whitespace is ignored.
/// * `context` - Blueprint and active trope list of the run.
/// * `rng` - Source of the four draws.
///
/// # Errors
/// Returns [`DnaError::InvalidArgument`] when the context has no tropes.
pub fn remix_prompt<R>(
    base_prompt: &str,
    context: &DnaContext<'_>,
    rng: &mut R,
) -> Result<RemixResult>
where
    R: RandomSource + ?Sized,
{
    let DnaContext { blueprint, tropes } = *context;
    if tropes.is_empty() {
        return Err(DnaError::invalid_argument("a remix needs at least one trope"));
    }

    let injected_trope = pick_uniform(tropes, rng)?;
    let fragment = pick_uniform(STRUCTURE_FRAGMENTS, rng)?;
    let adjective = pick_uniform(ADJECTIVES, rng)?;
    let ending = pick_uniform(ENDING_TAGS, rng)?;

    let original = base_prompt.trim().to_string();

    let adapted = format!(
        "{prompt} is reborn as a {adjective} {signature} showcase, staged with {lighting} \
         across a {palette} palette. {fragment} collides with {injected} while {texture} \
         wraps every cel. {cinematography} tracks the action against {soundtrack} pulses, \
         channeling {energy}. Effects shimmer with {fx}, {ending}.",
        prompt = capitalize_first(&original),
        signature = title_case(&blueprint.signature_trope),
        lighting = blueprint.lighting,
        palette = blueprint.palette,
        injected = title_case(injected_trope),
        texture = blueprint.texture,
        cinematography = blueprint.cinematography,
        soundtrack = blueprint.soundtrack,
        energy = blueprint.energy,
        fx = blueprint.fx,
    );

    Ok(RemixResult {
        original,
        adapted: truncate_with_ellipsis(&adapted, MAX_PROMPT_LENGTH),
        injected_tropes: unique_in_order([
            blueprint.signature_trope.as_str(),
            blueprint.support_trope.as_str(),
            injected_trope.as_str(),
        ]),
    })
}

/// Exact-match dedup; tropes differing only in case are distinct here.
fn unique_in_order(tropes: [&str; 3]) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tropes.len());
    for trope in tropes {
        if !kept.iter().any(|k| k == trope) {
            kept.push(trope.to_string());
        }
    }
    kept
}
