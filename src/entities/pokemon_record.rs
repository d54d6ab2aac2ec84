// SPDX-License-Identifier: GPL-3.0-only

use serde::Serialize;

use super::RawPokemon;
use crate::utils::scale_numbers;

/// Ability shown when the catalog lists none
pub const NO_ABILITY: &str = "No Ability";

/// Normalized Pokémon data, the shape every view works with
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonRecord {
    pub id: i64,
    pub name: String,
    /// Kilograms
    pub weight: f64,
    /// Meters
    pub height: f64,
    pub ability: String,
    pub image_url: Option<String>,
}

impl From<RawPokemon> for PokemonRecord {
    fn from(raw: RawPokemon) -> Self {
        let image_url = raw.artwork_url().map(String::from);

        // Only the first ability is shown
        let ability = raw
            .abilities
            .into_iter()
            .next()
            .map(|slot| slot.ability.name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| NO_ABILITY.to_string());

        PokemonRecord {
            id: raw.id,
            name: raw.name,
            weight: scale_numbers(raw.weight),
            height: scale_numbers(raw.height),
            ability,
            image_url,
        }
    }
}
