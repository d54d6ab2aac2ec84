// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use crate::entities::Identifier;

/// Everything that can go wrong while fetching, shaping or persisting catalogue data
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// The request could not be sent or its body could not be read
    #[error("transport error while fetching '{identifier}': {source}")]
    Transport {
        identifier: Identifier,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog service answered 404
    #[error("no Pokémon found for '{identifier}'")]
    NotFound { identifier: Identifier },

    /// The catalog service answered with any other non-success status
    #[error("catalog service returned status {status} for '{identifier}'")]
    Status { identifier: Identifier, status: u16 },

    #[error("malformed record for '{identifier}': {source}")]
    Decode {
        identifier: Identifier,
        #[source]
        source: serde_json::Error,
    },

    #[error("favourites store error: {0}")]
    Favourites(#[from] std::io::Error),

    #[error("favourites could not be encoded: {0}")]
    FavouritesFormat(#[from] serde_json::Error),

    #[error("could not read config at {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigFormat(#[from] ron::error::SpannedError),
}

impl CatalogueError {
    /// Whether the catalog service reported that the record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogueError::NotFound { .. })
    }
}
