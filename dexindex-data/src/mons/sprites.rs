use serde::{
    Deserialize,
    Serialize,
};

const SPRITE_ROOT: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// A sprite variant published in the sprite repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteVariant {
    /// Small in-game sprite.
    Default,
    /// High-resolution official artwork.
    OfficialArtwork,
    /// HOME render.
    Home,
}

impl SpriteVariant {
    fn directory(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::OfficialArtwork => Some("other/official-artwork"),
            Self::Home => Some("other/home"),
        }
    }
}

/// The URL of a sprite, which only depends on the backend ID and the variant.
pub fn sprite_url(id: u32, variant: SpriteVariant) -> String {
    match variant.directory() {
        Some(directory) => format!("{SPRITE_ROOT}/{directory}/{id}.png"),
        None => format!("{SPRITE_ROOT}/{id}.png"),
    }
}

/// Sprite URLs for a record.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
    pub home: Option<String>,
}

impl Sprites {
    /// Sprites synthesized from the fixed URL templates.
    pub fn synthesized(id: u32) -> Self {
        Self {
            front_default: Some(sprite_url(id, SpriteVariant::Default)),
            official_artwork: Some(sprite_url(id, SpriteVariant::OfficialArtwork)),
            home: Some(sprite_url(id, SpriteVariant::Home)),
        }
    }

    /// The best available image, preferring artwork over the small sprite.
    pub fn best(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.home.as_deref())
            .or(self.front_default.as_deref())
    }
}
