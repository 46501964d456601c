//! Label/value summary of a blueprint, in display order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dna::blueprint::DnaBlueprint;

/// Blueprint attributes in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintField {
    SignatureTrope,
    SupportTrope,
    Palette,
    Lighting,
    Texture,
    Cinematography,
    Soundtrack,
    Energy,
    Fx,
    Slogan,
}

impl BlueprintField {
    /// Every field, in display order.
    pub const ALL: [BlueprintField; 10] = [
        Self::SignatureTrope,
        Self::SupportTrope,
        Self::Palette,
        Self::Lighting,
        Self::Texture,
        Self::Cinematography,
        Self::Soundtrack,
        Self::Energy,
        Self::Fx,
        Self::Slogan,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SignatureTrope => "Signature Trope",
            Self::SupportTrope => "Secondary Trope",
            Self::Palette => "Palette",
            Self::Lighting => "Lighting",
            Self::Texture => "Texture",
            Self::Cinematography => "Cinematography",
            Self::Soundtrack => "Soundtrack",
            Self::Energy => "Energy",
            Self::Fx => "FX",
            Self::Slogan => "Slogan",
        }
    }
}

impl fmt::Display for BlueprintField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl DnaBlueprint {
    /// Value of one attribute.
    pub fn field(&self, field: BlueprintField) -> &str {
        match field {
            BlueprintField::SignatureTrope => &self.signature_trope,
            BlueprintField::SupportTrope => &self.support_trope,
            BlueprintField::Palette => &self.palette,
            BlueprintField::Lighting => &self.lighting,
            BlueprintField::Texture => &self.texture,
            BlueprintField::Cinematography => &self.cinematography,
            BlueprintField::Soundtrack => &self.soundtrack,
            BlueprintField::Energy => &self.energy,
            BlueprintField::Fx => &self.fx,
            BlueprintField::Slogan => &self.slogan,
        }
    }
}

/// One labelled blueprint attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintEntry {
    pub label: String,
    pub value: String,
}

/// The ten labelled attributes of `blueprint` in display order.
pub fn summarize_blueprint(blueprint: &DnaBlueprint) -> Vec<BlueprintEntry> {
    BlueprintField::ALL
        .iter()
        .map(|field| BlueprintEntry {
            label: field.label().to_string(),
            value: blueprint.field(*field).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dna::blueprint::create_blueprint;
    use crate::dna::random::ScriptedDraws;

    fn fixture() -> DnaBlueprint {
        DnaBlueprint {
            signature_trope: "laser grid".to_string(),
            support_trope: "villain capes".to_string(),
            palette: "chrome cyan vs magenta clash".to_string(),
            lighting: "backlit by endless neon signage".to_string(),
            texture: "grainy VHS bleed".to_string(),
            cinematography: "low-angle hero glide cam".to_string(),
            soundtrack: "FM synth arpeggios".to_string(),
            energy: "sugar rush rebellion".to_string(),
            fx: "lightning bolt overlays".to_string(),
            slogan: "Power up the nostalgia core".to_string(),
        }
    }

    #[test]
    fn test_labels_in_fixed_order() {
        let labels: Vec<String> = summarize_blueprint(&fixture())
            .into_iter()
            .map(|entry| entry.label)
            .collect();
        assert_eq!(
            labels,
            vec![
                "Signature Trope",
                "Secondary Trope",
                "Palette",
                "Lighting",
                "Texture",
                "Cinematography",
                "Soundtrack",
                "Energy",
                "FX",
                "Slogan",
            ]
        );
    }

    #[test]
    fn test_values_follow_fields() {
        let blueprint = fixture();
        let summary = summarize_blueprint(&blueprint);
        assert_eq!(summary[1].value, "villain capes");
        assert_eq!(summary[8].value, "lightning bolt overlays");
        assert_eq!(summary[9].value, blueprint.slogan);
    }

    #[test]
    fn test_generated_blueprint_summary() {
        let blueprint = create_blueprint(&["laser"], &mut ScriptedDraws::new(vec![0.1])).unwrap();
        let summary = summarize_blueprint(&blueprint);
        assert_eq!(summary.len(), 10);
        let signature = summary
            .iter()
            .find(|entry| entry.label == "Signature Trope")
            .map(|entry| entry.value.as_str());
        assert_eq!(signature, Some(blueprint.signature_trope.as_str()));
    }
}
