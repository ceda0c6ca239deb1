// pokemon.rs
// This file contains the definitions for the Pokemon-related data structures
// consumed by the About view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<PokemonAbility>,
    pub forms: Vec<NamedApiResource>,
    pub held_items: Vec<PokemonHeldItem>,
    pub species: Option<NamedApiResource>,
}

impl Default for Pokemon {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            abilities: Vec::new(),
            forms: Vec::new(),
            held_items: Vec::new(),
            species: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonAbility {
    pub is_hidden: bool,
    pub slot: i32,
    pub ability: Option<NamedApiResource>,
}

/// A name plus the API URL pointing at the full record. The trailing path
/// segment of the URL is the record's numeric identifier.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

impl NamedApiResource {
    /// Last non-empty path segment of the resource URL.
    pub fn trailing_segment(&self) -> Option<&str> {
        self.url
            .split('/')
            .filter(|segment| !segment.is_empty())
            .next_back()
    }

    /// Extracts the numeric identifier from the last non-empty path segment
    /// of the resource URL, e.g. `.../pokemon-form/10080/` -> `10080`.
    pub fn trailing_id(&self) -> Option<u32> {
        self.trailing_segment().and_then(|segment| segment.parse().ok())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonHeldItem {
    pub item: NamedApiResource,
    pub version_details: Vec<HeldItemVersion>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HeldItemVersion {
    pub rarity: u8,
    pub version: NamedApiResource,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonSpecies {
    pub generation: Option<NamedApiResource>,
}

/// One alternate form of a Pokemon, as returned by the form endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PokemonForm {
    pub id: u32,
    pub name: String,
    pub sprites: FormSprites,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FormSprites {
    pub front_default: Option<String>,
}

/// A related Pokemon entry, passed through from the parent view.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RelatedPokemon {
    pub name: String,
    pub image: Option<String>,
}
