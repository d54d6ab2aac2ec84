// SPDX-License-Identifier: GPL-3.0-only

use std::{collections::BTreeMap, fmt};

use ron::ser::PrettyConfig;
use serde::Serialize;
use tracing::info;

use crate::{
    config::CatalogueConfig,
    core::{
        api::{CatalogueApi, RecordSource},
        favourites::FavouritesStore,
    },
    entities::{Identifier, PokemonRecord},
    utils::{CatalogueError, capitalize_string},
};

/// Everything the landing view needs: the card grid and the popular carousel
#[derive(Debug, Clone)]
pub struct Catalogue {
    pub grid: Vec<PokemonRecord>,
    pub carousel: Carousel,
}

impl Catalogue {
    /// Loads the grid (`1..=grid_size`) and the popular entries together. Either batch failing fails the load.
    pub async fn load<S: RecordSource>(
        api: &CatalogueApi<S>,
        config: &CatalogueConfig,
    ) -> Result<Self, CatalogueError> {
        let grid_ids = (1..=config.grid_size).map(Identifier::Id);
        let popular_ids = config.popular.iter().cloned().map(Identifier::Name);

        let (grid, popular) =
            tokio::try_join!(api.fetch_batch(grid_ids), api.fetch_batch(popular_ids))?;

        info!(
            grid = grid.len(),
            popular = popular.len(),
            "catalogue loaded"
        );

        Ok(Catalogue {
            grid,
            carousel: Carousel::new(popular, config.carousel_start),
        })
    }

    pub fn cards<F: FavouritesStore>(&self, favourites: &F) -> Vec<CardView> {
        self.grid
            .iter()
            .map(|record| CardView::new(record, favourites))
            .collect()
    }

    /// Serializes the loaded data to RON, grid keyed by id, popular entries in carousel order
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            grid: BTreeMap<i64, &'a PokemonRecord>,
            popular: &'a [PokemonRecord],
        }

        let snapshot = Snapshot {
            grid: self.grid.iter().map(|record| (record.id, record)).collect(),
            popular: self.carousel.items(),
        };
        ron::ser::to_string_pretty(&snapshot, PrettyConfig::default())
    }
}

/// Popular Pokémon shown one at a time, wrapping around in both directions
#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<PokemonRecord>,
    active: usize,
}

impl Carousel {
    pub fn new(items: Vec<PokemonRecord>, start: usize) -> Self {
        let active = if items.is_empty() {
            0
        } else {
            start % items.len()
        };
        Carousel { items, active }
    }

    pub fn items(&self) -> &[PokemonRecord] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&PokemonRecord> {
        self.items.get(self.active)
    }

    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + 1) % self.items.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.items.is_empty() {
            self.active = (self.active + self.items.len() - 1) % self.items.len();
        }
    }

    /// Moves forward for positive steps, backwards for negative ones
    pub fn rotate(&mut self, steps: i64) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as i128;
        self.active = (self.active as i128 + i128::from(steps)).rem_euclid(len) as usize;
    }
}

/// One card in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub favourite: bool,
}

impl CardView {
    pub fn new<F: FavouritesStore>(record: &PokemonRecord, favourites: &F) -> Self {
        CardView {
            id: record.id,
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            favourite: favourites.is_favourite(record.id),
        }
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:<4} {}", self.id, self.name)?;
        if self.favourite {
            write!(f, " ⭐")?;
        }
        if let Some(url) = &self.image_url {
            write!(f, "  {url}")?;
        }
        Ok(())
    }
}

/// The detail view for a single Pokémon
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub image_url: Option<String>,
    pub lines: Vec<String>,
    pub favourite: bool,
}

impl DetailView {
    pub fn new<F: FavouritesStore>(record: &PokemonRecord, favourites: &F) -> Self {
        DetailView {
            title: capitalize_string(&record.name),
            image_url: record.image_url.clone(),
            lines: vec![
                format!("Number: {}", record.id),
                format!("Ability: {}", record.ability),
                format!("Weight: {} kg", record.weight),
                format!("Height: {} m", record.height),
            ],
            favourite: favourites.is_favourite(record.id),
        }
    }

    pub fn favourite_label(&self) -> &'static str {
        if self.favourite {
            "Favourite"
        } else {
            "Add to favourites"
        }
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        if let Some(url) = &self.image_url {
            writeln!(f, "{url}")?;
        }
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        write!(f, "[{}]", self.favourite_label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(PokemonRecord),
    NotFound,
}

/// Looks up a single Pokémon by number or name.
///
/// A 404 from the catalog, an empty query, or a record without a name are all
/// reported as [`SearchOutcome::NotFound`]; other failures are returned as errors.
pub async fn search<S: RecordSource>(
    api: &CatalogueApi<S>,
    query: &str,
) -> Result<SearchOutcome, CatalogueError> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Ok(SearchOutcome::NotFound);
    }

    let Ok(identifier) = query.parse::<Identifier>();

    match api.fetch_record(identifier).await {
        Ok(record) if !record.name.is_empty() => Ok(SearchOutcome::Found(record)),
        Ok(_) => Ok(SearchOutcome::NotFound),
        Err(e) if e.is_not_found() => Ok(SearchOutcome::NotFound),
        Err(e) => Err(e),
    }
}
