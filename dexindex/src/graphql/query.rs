use dexindex_data::{
    AbilitySlot,
    NamedResource,
    Record,
    Sprites,
    StatEntry,
    TypeSlot,
};
use serde::Deserialize;

/// Query for every Pokémon whose name is in `$names`.
pub const POKEMON_BY_NAMES_QUERY: &str = r#"
query PokemonDetails($names: [String!]) {
  pokemon_v2_pokemon(where: {name: {_in: $names}}) {
    id
    name
    height
    weight
    pokemon_v2_pokemontypes(order_by: {slot: asc}) {
      slot
      pokemon_v2_type {
        name
      }
    }
    pokemon_v2_pokemonstats {
      base_stat
      effort
      pokemon_v2_stat {
        name
      }
    }
    pokemon_v2_pokemonabilities(order_by: {slot: asc}) {
      is_hidden
      slot
      pokemon_v2_ability {
        name
        id
      }
    }
    pokemon_v2_pokemonspecy {
      name
      id
    }
  }
}
"#;

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<PokemonData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PokemonData {
    #[serde(default)]
    pub pokemon_v2_pokemon: Vec<RawPokemon>,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawType {
    slot: u8,
    pokemon_v2_type: Named,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    base_stat: u32,
    effort: u32,
    pokemon_v2_stat: Named,
}

#[derive(Debug, Deserialize)]
struct RawAbilityRef {
    name: String,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct RawAbility {
    is_hidden: bool,
    slot: u8,
    pokemon_v2_ability: RawAbilityRef,
}

#[derive(Debug, Deserialize)]
struct RawSpecies {
    name: String,
    id: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    pokemon_v2_pokemontypes: Vec<RawType>,
    #[serde(default)]
    pokemon_v2_pokemonstats: Vec<RawStat>,
    #[serde(default)]
    pokemon_v2_pokemonabilities: Vec<RawAbility>,
    #[serde(default)]
    pokemon_v2_pokemonspecy: Option<RawSpecies>,
}

impl RawPokemon {
    /// Converts the GraphQL shape into a [`Record`].
    ///
    /// Nested resources carry no URLs in GraphQL, so ability and species URLs are built from IDs
    /// under `rest_base_url`, and sprites are synthesized from the record ID.
    pub fn into_record(self, rest_base_url: &str) -> Record {
        let species = match self.pokemon_v2_pokemonspecy {
            Some(species) => NamedResource::new(
                species.name,
                format!("{rest_base_url}/pokemon-species/{}/", species.id),
            ),
            None => NamedResource::new(self.name.clone(), ""),
        };
        Record {
            id: self.id,
            custom_id: None,
            name: self.name,
            height: self.height,
            weight: self.weight,
            types: self
                .pokemon_v2_pokemontypes
                .into_iter()
                .map(|ty| TypeSlot {
                    slot: ty.slot,
                    ty: NamedResource::new(ty.pokemon_v2_type.name, ""),
                })
                .collect(),
            stats: self
                .pokemon_v2_pokemonstats
                .into_iter()
                .map(|stat| StatEntry {
                    base_stat: stat.base_stat,
                    effort: stat.effort,
                    stat: NamedResource::new(stat.pokemon_v2_stat.name, ""),
                })
                .collect(),
            abilities: self
                .pokemon_v2_pokemonabilities
                .into_iter()
                .map(|ability| AbilitySlot {
                    is_hidden: ability.is_hidden,
                    slot: ability.slot,
                    ability: NamedResource::new(
                        ability.pokemon_v2_ability.name,
                        format!(
                            "{rest_base_url}/ability/{}/",
                            ability.pokemon_v2_ability.id
                        ),
                    ),
                })
                .collect(),
            sprites: Sprites::synthesized(self.id),
            species,
        }
    }
}

#[cfg(test)]
mod raw_pokemon_test {
    use dexindex_data::{
        SpriteVariant,
        sprite_url,
    };
    use pretty_assertions::assert_eq;

    use crate::graphql::query::RawPokemon;

    const REST: &str = "https://pokeapi.co/api/v2";

    #[test]
    fn synthesizes_urls_from_ids() {
        let raw: RawPokemon = serde_json::from_str(
            r#"{
                "id": 6,
                "name": "charizard",
                "height": 17,
                "weight": 905,
                "pokemon_v2_pokemontypes": [
                    { "slot": 1, "pokemon_v2_type": { "name": "fire" } },
                    { "slot": 2, "pokemon_v2_type": { "name": "flying" } }
                ],
                "pokemon_v2_pokemonstats": [
                    { "base_stat": 78, "effort": 0, "pokemon_v2_stat": { "name": "hp" } }
                ],
                "pokemon_v2_pokemonabilities": [
                    { "is_hidden": false, "slot": 1, "pokemon_v2_ability": { "name": "blaze", "id": 66 } },
                    { "is_hidden": true, "slot": 3, "pokemon_v2_ability": { "name": "solar-power", "id": 94 } }
                ],
                "pokemon_v2_pokemonspecy": { "name": "charizard", "id": 6 }
            }"#,
        )
        .unwrap();
        let record = raw.into_record(REST);
        assert_eq!(record.custom_id, None);
        assert_eq!(record.primary_type(), Some("fire"));
        assert_eq!(record.types[1].ty.name, "flying");
        assert_eq!(record.stats[0].base_stat, 78);
        assert_eq!(
            record.abilities[1].ability.url,
            "https://pokeapi.co/api/v2/ability/94/"
        );
        assert!(record.abilities[1].is_hidden);
        assert_eq!(
            record.species.url,
            "https://pokeapi.co/api/v2/pokemon-species/6/"
        );
        assert_eq!(
            record.sprites.home.as_deref(),
            Some(sprite_url(6, SpriteVariant::Home).as_str())
        );
    }

    #[test]
    fn species_falls_back_to_record_name() {
        let raw: RawPokemon =
            serde_json::from_str(r#"{ "id": 10001, "name": "deoxys-attack" }"#).unwrap();
        let record = raw.into_record(REST);
        assert_eq!(record.species.name, "deoxys-attack");
        assert_eq!(record.species.url, "");
        assert!(record.types.is_empty());
    }
}
