use dexindex_data::{
    AbilitySlot,
    NamedResource,
    Record,
    Sprites,
    TypeSlot,
};

/// A plausible record with one type and one ability.
pub fn test_record(id: u32, name: &str) -> Record {
    Record {
        id,
        custom_id: None,
        name: name.to_owned(),
        height: 10,
        weight: 100,
        types: vec![TypeSlot {
            slot: 1,
            ty: NamedResource::new("normal", ""),
        }],
        stats: Vec::new(),
        abilities: vec![AbilitySlot {
            is_hidden: false,
            slot: 1,
            ability: NamedResource::new("run-away", "https://pokeapi.co/api/v2/ability/50/"),
        }],
        sprites: Sprites::synthesized(id),
        species: NamedResource::new(
            name,
            format!("https://pokeapi.co/api/v2/pokemon-species/{id}/"),
        ),
    }
}
