//! Fixed vocabularies the blueprint and remix engine draw from.
//!
//! Every pool is non-empty; the generators index into them with
//! [`pick_uniform`](super::random::pick_uniform).

/// Tropes used when the user supplies none.
pub const DEFAULT_TROPES: &[&str] = &[
    "laser grid skylines",
    "synthwave hero poses",
    "VHS tracking static",
    "retro mecha transformations",
    "bubblegum pop idol teams",
    "villains with neon capes",
    "arcade boss battles",
    "chromed hover vehicles",
    "midnight mall chases",
    "neon-lit rain storms",
];

/// Trope text a fresh lab session starts with.
pub const DEFAULT_TROPE_COPY: &str = "laser grid skylines, synthwave hero poses, VHS tracking static,
retro mecha transformations, bubblegum pop idol teams";

/// Prompt deck loaded before any source is supplied.
pub const SAMPLE_PROMPTS: &[&str] = &[
    "A confident explorer standing before a portal to another neon dimension, holding an analog camera",
    "Two rival pilots racing hover bikes through a rain-bathed synth cityscape",
    "A ragtag idol squad rehearsing choreography atop a skyscraper helipad",
    "A shapeshifting guardian emerging from a cosmic arcade cabinet",
];

pub const PALETTES: &[&str] = &[
    "chrome cyan vs magenta clash",
    "pulsing ultraviolet spectra",
    "teal horizon with magenta sun",
    "sunset sherbet gradients",
    "emerald gridlines over midnight navy",
    "tangerine flare streaks",
];

pub const LIGHTING_MOODS: &[&str] = &[
    "backlit by endless neon signage",
    "punchy rim lights carved by moonlit skylines",
    "flooded with laser-sliced volumetrics",
    "drenched in sodium-vapor glow",
    "fractured by kaleidoscopic spotlight rigs",
];

pub const TEXTURES: &[&str] = &[
    "grainy VHS bleed",
    "cel-shaded airbrush gradients",
    "anisotropic chrome reflections",
    "hand-painted ozone streaks",
    "inked speedlines and halftones",
];

pub const CINEMATOGRAPHY: &[&str] = &[
    "low-angle hero glide cam",
    "hyper-zoomed dolly crash",
    "parallax skyline pan",
    "rotoscope spin reveal",
    "freeze-frame title card smash",
];

pub const SOUNDTRACKS: &[&str] = &[
    "FM synth arpeggios",
    "arena rock power chords",
    "electro-funk drum machine",
    "neo-noir saxophone riffs",
    "hyperpop vocoder chants",
];

pub const ENERGIES: &[&str] = &[
    "sugar rush rebellion",
    "heavy metal mythos",
    "buddy-cop bravado",
    "youthquake insurgence",
    "high-gloss mecha opera",
];

pub const FX: &[&str] = &[
    "lightning bolt overlays",
    "spectral lens flares",
    "rotoscoped energy halos",
    "side-scrolling speed trails",
    "prismatic particle bursts",
];

pub const SLOGANS: &[&str] = &[
    "Power up the nostalgia core",
    "Roll the tape, rewrite the genome",
    "Synth the ink, ignite the frame",
    "From storyboard to time warp",
    "Neon genes, infinite scenes",
];

/// Adjectives qualifying the signature trope showcase.
pub const ADJECTIVES: &[&str] = &[
    "radical",
    "turbo-charged",
    "laser-forged",
    "hypercolor",
    "retro-futurist",
    "storm-chasing",
];

/// Scene fragments that open the second sentence of a remix.
pub const STRUCTURE_FRAGMENTS: &[&str] = &[
    "frame-filling vaporwave haze",
    "hero anthem crescendo",
    "freeze-frame slogan punch",
    "galactic arena showdown",
    "montage of rebellious camaraderie",
    "gravity-defying transformation sequence",
];

/// Closing tags appended after the effects clause.
pub const ENDING_TAGS: &[&str] = &[
    "rendered in golden-hour grain",
    "sealed with synth brass flourish",
    "looped on midnight broadcast",
    "forged on an arcade cabinet marquee",
    "broadcast in pan-and-scan glory",
];
