//! DNA blueprint generation.
//!
//! A blueprint is the shared tonal bible of one generation run: two tropes
//! drawn from the active list plus eight attributes drawn from the fixed
//! vocabularies. It is created once per run and never mutated.

use serde::{Deserialize, Serialize};

use crate::dna::random::{pick_index, pick_uniform, RandomSource};
use crate::dna::vocabulary::{
    CINEMATOGRAPHY, ENERGIES, FX, LIGHTING_MOODS, PALETTES, SLOGANS, SOUNDTRACKS, TEXTURES,
};
use crate::error::{DnaError, Result};

/// Redraws allowed while looking for a support trope that differs from the
/// signature trope.
pub const MAX_SUPPORT_REDRAWS: usize = 1024;

/// The ten attributes shared by every prompt of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DnaBlueprint {
    /// Headline trope of the run.
    pub signature_trope: String,
    /// Secondary trope; differs from the signature whenever the trope list
    /// offers an alternative.
    pub support_trope: String,
    pub palette: String,
    pub lighting: String,
    pub texture: String,
    pub cinematography: String,
    pub soundtrack: String,
    pub energy: String,
    pub fx: String,
    pub slogan: String,
}

/// Draw a blueprint from `tropes` and the fixed vocabularies.
///
/// Draw order is fixed: signature trope, support trope (redrawn until it
/// differs from the signature when the list holds another trope), then one
/// draw each for palette, lighting, texture, cinematography, soundtrack,
/// energy, fx and slogan. The same tropes and the same draws always yield
/// the same blueprint.
///
/// # Errors
/// * [`DnaError::InvalidArgument`] if `tropes` is empty.
/// * [`DnaError::RandomSourceStalled`] if the source returns the signature
///   trope [`MAX_SUPPORT_REDRAWS`] times in a row.
pub fn create_blueprint<S, R>(tropes: &[S], rng: &mut R) -> Result<DnaBlueprint>
where
    S: AsRef<str>,
    R: RandomSource + ?Sized,
{
    if tropes.is_empty() {
        return Err(DnaError::invalid_argument(
            "a blueprint needs at least one trope",
        ));
    }

    let signature_trope = tropes[pick_index(tropes.len(), rng)?].as_ref();
    let mut support_trope = tropes[pick_index(tropes.len(), rng)?].as_ref();

    let has_alternative = tropes.iter().any(|t| t.as_ref() != signature_trope);
    if has_alternative {
        let mut attempts = 0;
        while support_trope == signature_trope {
            if attempts == MAX_SUPPORT_REDRAWS {
                return Err(DnaError::RandomSourceStalled { attempts });
            }
            support_trope = tropes[pick_index(tropes.len(), rng)?].as_ref();
            attempts += 1;
        }
    }

    let blueprint = DnaBlueprint {
        signature_trope: signature_trope.to_string(),
        support_trope: support_trope.to_string(),
        palette: pick_uniform(PALETTES, rng)?.to_string(),
        lighting: pick_uniform(LIGHTING_MOODS, rng)?.to_string(),
        texture: pick_uniform(TEXTURES, rng)?.to_string(),
        cinematography: pick_uniform(CINEMATOGRAPHY, rng)?.to_string(),
        soundtrack: pick_uniform(SOUNDTRACKS, rng)?.to_string(),
        energy: pick_uniform(ENERGIES, rng)?.to_string(),
        fx: pick_uniform(FX, rng)?.to_string(),
        slogan: pick_uniform(SLOGANS, rng)?.to_string(),
    };

    log::debug!(
        "Blueprint drawn: signature={:?} support={:?}",
        blueprint.signature_trope,
        blueprint.support_trope
    );
    Ok(blueprint)
}
