// SPDX-License-Identifier: GPL-3.0-only

mod identifier;
mod pokemon_record;
mod raw_pokemon;

pub use identifier::Identifier;
pub use pokemon_record::{NO_ABILITY, PokemonRecord};
pub use raw_pokemon::{
    RawAbility, RawAbilitySlot, RawArtwork, RawOtherSprites, RawPokemon, RawSprites,
};
