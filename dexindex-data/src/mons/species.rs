use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    NamedResource,
    UrlResource,
};

const ENGLISH: &str = "en";

/// A flavor text entry, written per game and language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// The species classification, such as "Seed Pokémon".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// A form of a species that exists as its own backend entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variety {
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// Response shape of `GET /pokemon-species/{id}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub genera: Vec<Genus>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
    #[serde(default)]
    pub evolution_chain: Option<UrlResource>,
}

/// Flattens the control characters the backend leaves in flavor text.
pub fn clean_flavor_text(text: &str) -> String {
    text.split(|c: char| c == '\u{000c}' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

impl Species {
    /// The first English flavor text, cleaned for display.
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == ENGLISH)
            .map(|entry| clean_flavor_text(&entry.flavor_text))
    }

    pub fn english_genus(&self) -> Option<&str> {
        self.genera
            .iter()
            .find(|genus| genus.language.name == ENGLISH)
            .map(|genus| genus.genus.as_str())
    }

    pub fn default_variety(&self) -> Option<&Variety> {
        self.varieties.iter().find(|variety| variety.is_default)
    }

    /// URL of the evolution chain, if the species belongs to one.
    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain
            .as_ref()
            .map(|chain| chain.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod species_test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::Species;

    fn bulbasaur() -> Species {
        serde_json::from_value(json!({
            "id": 1,
            "name": "bulbasaur",
            "flavor_text_entries": [
                { "flavor_text": "Une graine.", "language": { "name": "fr", "url": "" } },
                { "flavor_text": "A strange seed was\nplanted on its\u{000c}back at birth.", "language": { "name": "en", "url": "" } }
            ],
            "genera": [
                { "genus": "Pokémon Graine", "language": { "name": "fr", "url": "" } },
                { "genus": "Seed Pokémon", "language": { "name": "en", "url": "" } }
            ],
            "varieties": [
                { "is_default": true, "pokemon": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" } }
            ],
            "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/1/" }
        }))
        .unwrap()
    }

    #[test]
    fn reads_english_entries() {
        let species = bulbasaur();
        assert_eq!(
            species.english_flavor_text().as_deref(),
            Some("A strange seed was planted on its back at birth.")
        );
        assert_eq!(species.english_genus(), Some("Seed Pokémon"));
        assert_eq!(
            species.default_variety().map(|v| v.pokemon.name.as_str()),
            Some("bulbasaur")
        );
        assert_eq!(
            species.evolution_chain_url(),
            Some("https://pokeapi.co/api/v2/evolution-chain/1/")
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let species: Species = serde_json::from_value(json!({})).unwrap();
        assert_eq!(species.english_flavor_text(), None);
        assert_eq!(species.english_genus(), None);
        assert_eq!(species.evolution_chain_url(), None);
    }
}
