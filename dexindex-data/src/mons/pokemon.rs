use serde::Deserialize;

use crate::{
    AbilitySlot,
    NamedResource,
    Record,
    Sprites,
    StatEntry,
    TypeSlot,
};

#[derive(Debug, Default, Clone, Deserialize)]
struct SpriteRef {
    front_default: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<SpriteRef>,
    home: Option<SpriteRef>,
}

#[derive(Debug, Default, Clone, Deserialize)]
struct PokemonSprites {
    front_default: Option<String>,
    other: Option<OtherSprites>,
}

/// Response shape of `GET /pokemon/{slug}`.
///
/// Only the fields that make up a [`Record`] are read.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    sprites: PokemonSprites,
    pub species: NamedResource,
}

impl PokemonResponse {
    /// Converts the response into a [`Record`].
    ///
    /// Missing artwork falls back to the default sprite. No catalogue number is assigned.
    pub fn into_record(self) -> Record {
        let front_default = self.sprites.front_default;
        let other = self.sprites.other.unwrap_or_default();
        let official_artwork = other
            .official_artwork
            .and_then(|sprite| sprite.front_default)
            .or_else(|| front_default.clone());
        let home = other
            .home
            .and_then(|sprite| sprite.front_default)
            .or_else(|| front_default.clone());
        Record {
            id: self.id,
            custom_id: None,
            name: self.name,
            height: self.height,
            weight: self.weight,
            types: self.types,
            stats: self.stats,
            abilities: self.abilities,
            sprites: Sprites {
                front_default,
                official_artwork,
                home,
            },
            species: self.species,
        }
    }
}

#[cfg(test)]
mod pokemon_response_test {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::PokemonResponse;

    #[test]
    fn converts_rest_shape_into_record() {
        let response: PokemonResponse = serde_json::from_value(json!({
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [{ "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }],
            "stats": [{ "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }],
            "abilities": [{ "is_hidden": true, "slot": 3, "ability": { "name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/" } }],
            "sprites": {
                "front_default": "small.png",
                "other": {
                    "official-artwork": { "front_default": "art.png" },
                    "home": { "front_default": null }
                }
            },
            "species": { "name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/" }
        }))
        .unwrap();

        let record = response.into_record();
        assert_eq!(record.id, 25);
        assert_eq!(record.custom_id, None);
        assert_eq!(record.types[0].ty.name, "electric");
        assert_eq!(record.stats[0].base_stat, 90);
        assert!(record.abilities[0].is_hidden);
        assert_eq!(record.sprites.front_default.as_deref(), Some("small.png"));
        assert_eq!(record.sprites.official_artwork.as_deref(), Some("art.png"));
        assert_eq!(record.sprites.home.as_deref(), Some("small.png"));
        assert_eq!(record.species.name, "pikachu");
    }

    #[test]
    fn tolerates_missing_sprites() {
        let response: PokemonResponse = serde_json::from_value(json!({
            "id": 10001,
            "name": "deoxys-attack",
            "height": 17,
            "weight": 608,
            "species": { "name": "deoxys", "url": "https://pokeapi.co/api/v2/pokemon-species/386/" }
        }))
        .unwrap();

        let record = response.into_record();
        assert_eq!(record.sprites.front_default, None);
        assert_eq!(record.sprites.official_artwork, None);
        assert!(record.types.is_empty());
    }
}
