//! API Payload Models
//!
//! Typed decode of the PokeAPI payloads at the network boundary.
//! Only the fields the viewer consumes are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// Lightweight pointer to a catalog entry, as returned by the list endpoint.
/// `url` is the identity key used everywhere; `name` is a display hint only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

/// Response of the paginated list endpoint.
/// `count` is the upstream total, independent of the fetched page size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: u32,
    pub results: Vec<PokemonRef>,
}

/// `{ name }` sub-object used by types, stats and abilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_info: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Fully resolved catalog entry (detail endpoint).
///
/// Missing sections decode as empty rather than failing the whole record;
/// consumers treat a missing stat as 0 and render empty lists as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    /// Base value of the named stat, 0 when the entry is absent.
    pub fn stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|s| s.stat.name == name)
            .map(|s| s.base_stat)
            .unwrap_or(0)
    }

    /// Whether any type slot matches `type_name`.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.type_info.name == type_name)
    }
}
