// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

/// The part of a PokéApi `pokemon` document we care about, everything else is ignored
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawPokemon {
    pub id: i64,
    pub name: String,
    /// Decigrams
    pub weight: u32,
    /// Decimeters
    pub height: u32,
    #[serde(default)]
    pub abilities: Vec<RawAbilitySlot>,
    #[serde(default)]
    pub sprites: RawSprites,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawAbilitySlot {
    pub ability: RawAbility,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawAbility {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawSprites {
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RawArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl RawPokemon {
    /// Official artwork URL, if the upstream document has one
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|other| other.official_artwork.as_ref())
            .and_then(|artwork| artwork.front_default.as_deref())
    }
}
