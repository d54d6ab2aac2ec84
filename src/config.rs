// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::CatalogueError;

pub const APP_ID: &str = "dev.pokecatalogue.App";

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Catalog endpoint, the identifier is appended as `<base_url>/<identifier>/`
    pub base_url: String,
    /// The grid shows ids `1..=grid_size`
    pub grid_size: i64,
    /// Names shown in the carousel, in order
    pub popular: Vec<String>,
    pub carousel_start: usize,
    /// Upper bound on in-flight fetches per batch, unbounded when `None`
    pub max_concurrency: Option<usize>,
    /// Where favourites are kept, defaults to the platform data directory
    pub favourites_path: Option<PathBuf>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            grid_size: 40,
            popular: ["charizard", "pikachu", "eevee", "bulbasaur", "sylveon"]
                .into_iter()
                .map(String::from)
                .collect(),
            carousel_start: 1,
            max_concurrency: None,
            favourites_path: None,
        }
    }
}

impl CatalogueConfig {
    /// Reads a RON config file, missing fields fall back to their defaults
    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogueError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ron::from_str(&contents)?)
    }

    /// Loads the explicit path if given, otherwise the user config file if it exists, otherwise defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogueError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn favourites_path(&self) -> Option<PathBuf> {
        self.favourites_path
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join(APP_ID).join("favourites.json")))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_ID).join("config.ron"))
}
