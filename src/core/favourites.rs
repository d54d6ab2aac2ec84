// SPDX-License-Identifier: GPL-3.0-only

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::utils::CatalogueError;

/// The set of Pokémon ids the user marked as favourite
pub trait FavouritesStore {
    fn is_favourite(&self, id: i64) -> bool;

    /// Adds the id if absent, removes it if present. Returns whether it is a favourite afterwards.
    fn toggle_favourite(&mut self, id: i64) -> Result<bool, CatalogueError>;

    fn list_favourites(&self) -> BTreeSet<i64>;
}

/// Favourites kept only for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryFavourites {
    ids: Vec<i64>,
}

impl MemoryFavourites {
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut favourites = MemoryFavourites::default();
        for id in ids {
            if !favourites.ids.contains(&id) {
                favourites.ids.push(id);
            }
        }
        favourites
    }
}

impl FavouritesStore for MemoryFavourites {
    fn is_favourite(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    fn toggle_favourite(&mut self, id: i64) -> Result<bool, CatalogueError> {
        Ok(toggle(&mut self.ids, id))
    }

    fn list_favourites(&self) -> BTreeSet<i64> {
        self.ids.iter().copied().collect()
    }
}

/// Favourites persisted as a JSON array of ids, in the order they were added
#[derive(Debug, Clone)]
pub struct JsonFavourites {
    path: PathBuf,
    ids: Vec<i64>,
}

impl JsonFavourites {
    /// Opens the store at `path`. A missing file reads as an empty list, an unreadable one too but with a warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = read_ids(&path);
        debug!(path = ?path, count = ids.len(), "loaded favourites");
        JsonFavourites { path, ids }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, ids: &[i64]) -> Result<(), CatalogueError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string(ids)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

impl FavouritesStore for JsonFavourites {
    fn is_favourite(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    fn toggle_favourite(&mut self, id: i64) -> Result<bool, CatalogueError> {
        // Memory only follows once the file has been written
        let mut ids = self.ids.clone();
        let now_favourite = toggle(&mut ids, id);
        self.save(&ids)?;
        self.ids = ids;
        Ok(now_favourite)
    }

    fn list_favourites(&self) -> BTreeSet<i64> {
        self.ids.iter().copied().collect()
    }
}

fn toggle(ids: &mut Vec<i64>, id: i64) -> bool {
    if let Some(index) = ids.iter().position(|x| *x == id) {
        ids.remove(index);
        false
    } else {
        ids.push(id);
        true
    }
}

fn read_ids(path: &Path) -> Vec<i64> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!(path = ?path, "could not read favourites: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<i64>>>(&contents) {
        Ok(ids) => ids.unwrap_or_default(),
        Err(e) => {
            warn!(path = ?path, "ignoring unreadable favourites: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut favourites = MemoryFavourites::default();

        assert!(favourites.toggle_favourite(25).unwrap());
        assert!(favourites.is_favourite(25));

        assert!(!favourites.toggle_favourite(25).unwrap());
        assert!(!favourites.is_favourite(25));
        assert!(favourites.list_favourites().is_empty());
    }

    #[test]
    fn memory_store_ignores_duplicates() {
        let favourites = MemoryFavourites::new([4, 1, 4]);
        assert_eq!(favourites.list_favourites(), BTreeSet::from([1, 4]));
    }

    #[test]
    fn json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("favourites.json");

        let mut favourites = JsonFavourites::open(&path);
        assert!(favourites.list_favourites().is_empty());
        favourites.toggle_favourite(6).unwrap();
        favourites.toggle_favourite(1).unwrap();

        let reopened = JsonFavourites::open(&path);
        assert_eq!(reopened.list_favourites(), BTreeSet::from([1, 6]));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[6,1]");
    }

    #[test]
    fn json_store_treats_garbage_and_null_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favourites.json");

        std::fs::write(&path, "not json").unwrap();
        assert!(JsonFavourites::open(&path).list_favourites().is_empty());

        std::fs::write(&path, "null").unwrap();
        let mut favourites = JsonFavourites::open(&path);
        assert!(favourites.list_favourites().is_empty());

        assert!(favourites.toggle_favourite(133).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[133]");
    }

    #[test]
    fn failed_save_leaves_favourites_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let mut favourites = JsonFavourites::open(blocker.join("favourites.json"));
        assert!(favourites.toggle_favourite(5).is_err());
        assert!(!favourites.is_favourite(5));
        assert!(favourites.list_favourites().is_empty());
    }

    #[test]
    fn unreadable_path_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        // A directory can't be read as a file
        assert!(JsonFavourites::open(dir.path()).list_favourites().is_empty());
    }
}
