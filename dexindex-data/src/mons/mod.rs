mod ability;
mod evolution;
mod pokemon;
mod record;
mod species;
mod sprites;

pub use ability::{
    ABILITY_DESCRIPTION_UNAVAILABLE,
    Ability,
    AbilityFlavorText,
    EffectEntry,
    NO_ABILITY_DESCRIPTION,
};
pub use evolution::{
    ChainLink,
    EvolutionChain,
    EvolutionDetail,
};
pub use pokemon::PokemonResponse;
pub use record::{
    AbilitySlot,
    Record,
    StatEntry,
    TypeSlot,
};
pub use species::{
    FlavorText,
    Genus,
    Species,
    Variety,
    clean_flavor_text,
};
pub use sprites::{
    SpriteVariant,
    Sprites,
    sprite_url,
};
