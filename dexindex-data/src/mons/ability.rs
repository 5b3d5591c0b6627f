use serde::{
    Deserialize,
    Serialize,
};

use crate::NamedResource;

const ENGLISH: &str = "en";

/// Shown when an ability has no English text at all.
pub const NO_ABILITY_DESCRIPTION: &str = "No description available.";

/// Shown when an ability could not be fetched.
pub const ABILITY_DESCRIPTION_UNAVAILABLE: &str = "Could not load ability details.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Response shape of `GET /ability/{id}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub flavor_text_entries: Vec<AbilityFlavorText>,
}

impl Ability {
    /// The English description of the ability.
    ///
    /// Prefers the short effect, then the full effect, then flavor text.
    pub fn description(&self) -> String {
        let effect = self
            .effect_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH);
        if let Some(effect) = effect {
            if !effect.short_effect.is_empty() {
                return effect.short_effect.clone();
            }
            if !effect.effect.is_empty() {
                return effect.effect.clone();
            }
        }
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| entry.flavor_text.replace('\u{000c}', " "))
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_ABILITY_DESCRIPTION.to_owned())
    }
}
