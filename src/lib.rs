// SPDX-License-Identifier: GPL-3.0-only

//! Pokémon catalogue client for PokéApi.
//!
//! [`core::api::CatalogueApi`] fetches and normalizes records one at a time or
//! in order-preserving, all-or-nothing batches. [`core::catalogue`] shapes them
//! into the grid, carousel, search and detail views. Favourites live behind
//! [`core::favourites::FavouritesStore`].

pub mod config;
pub mod core;
pub mod entities;
pub mod utils;

pub use crate::core::api::{CatalogueApi, PokeApiSource, RecordSource};
pub use crate::entities::{Identifier, PokemonRecord};
pub use crate::utils::CatalogueError;
