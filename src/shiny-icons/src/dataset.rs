//! pogoapi.net dataset records
//!
//! Both datasets are JSON objects keyed by the creature id as a string,
//! e.g. `{"1": {"id": 1, "name": "Bulbasaur"}, ...}`. Fields not used
//! here are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::Result;

/// Entry of `released_pokemon.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleasedCreature {
    pub name: String,
}

/// Entry of `shiny_pokemon.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShinyRecord {
    /// Shiny can be encountered in the wild
    #[serde(default)]
    pub found_wild: bool,

    /// The Alolan form can also be encountered shiny
    #[serde(default)]
    pub alolan_shiny: Option<bool>,
}

/// Released creatures by id, iterated in id order
pub type ReleasedPokemon = BTreeMap<u32, ReleasedCreature>;

/// Shiny-capable creatures by id
pub type ShinyPokemon = BTreeMap<u32, ShinyRecord>;

pub fn parse_released(json: &str) -> Result<ReleasedPokemon> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_shiny(json: &str) -> Result<ShinyPokemon> {
    Ok(serde_json::from_str(json)?)
}
