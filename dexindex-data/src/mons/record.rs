use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    NamedResource,
    Sprites,
};

/// A type affinity of a record, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub ty: NamedResource,
}

/// A base stat of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

/// An ability of a record, in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub is_hidden: bool,
    pub slot: u8,
    pub ability: NamedResource,
}

/// A fully-resolved catalogue entry.
///
/// Records are plain values. The same shape is produced by the bulk and the per-entity fetch
/// paths, and it is the shape persisted in snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Numeric backend ID.
    pub id: u32,
    /// Catalogue number, assigned after fetching.
    #[serde(rename = "customId", default, skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<u32>,
    /// Backend name, which is also the record's slug.
    pub name: String,
    /// Height in tenths of a metre.
    pub height: u32,
    /// Weight in tenths of a kilogram.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilitySlot>,
    pub sprites: Sprites,
    /// The species grouping this record belongs to.
    pub species: NamedResource,
}

impl Record {
    /// The number shown for the record: its catalogue number, or its backend ID outside the
    /// catalogue, padded to four digits.
    pub fn display_number(&self) -> String {
        format!("{:04}", self.custom_id.unwrap_or(self.id))
    }

    pub fn height_meters(&self) -> f64 {
        self.height as f64 / 10.0
    }

    pub fn weight_kilograms(&self) -> f64 {
        self.weight as f64 / 10.0
    }

    /// The type in the lowest slot.
    pub fn primary_type(&self) -> Option<&str> {
        self.types
            .iter()
            .min_by_key(|ty| ty.slot)
            .map(|ty| ty.ty.name.as_str())
    }

    pub fn hidden_ability(&self) -> Option<&AbilitySlot> {
        self.abilities.iter().find(|ability| ability.is_hidden)
    }

    /// Looks up a base stat by its backend name, such as `special-attack`.
    pub fn base_stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|stat| stat.stat.name == name)
            .map(|stat| stat.base_stat)
    }

    /// Sum of all base stats.
    pub fn base_stat_total(&self) -> u32 {
        self.stats.iter().map(|stat| stat.base_stat).sum()
    }
}
