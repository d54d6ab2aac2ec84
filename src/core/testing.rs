// SPDX-License-Identifier: GPL-3.0-only

//! In-memory record source for unit tests

use std::{
    collections::{HashMap, HashSet},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use crate::{
    core::api::RecordSource,
    entities::{
        Identifier, RawAbility, RawAbilitySlot, RawArtwork, RawOtherSprites, RawPokemon,
        RawSprites,
    },
    utils::CatalogueError,
};

pub fn raw_pokemon(id: i64, name: &str) -> RawPokemon {
    RawPokemon {
        id,
        name: name.to_string(),
        weight: 69,
        height: 7,
        abilities: vec![RawAbilitySlot {
            ability: RawAbility {
                name: "overgrow".to_string(),
            },
        }],
        sprites: RawSprites {
            other: Some(RawOtherSprites {
                official_artwork: Some(RawArtwork {
                    front_default: Some(format!("https://example.test/art/{id}.png")),
                }),
            }),
        },
    }
}

#[derive(Default)]
pub struct FakeSource {
    records: HashMap<String, RawPokemon>,
    delays: HashMap<String, Duration>,
    default_delay: Duration,
    failing: HashSet<String>,
    pub calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    completed: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn with_ids(ids: std::ops::RangeInclusive<i64>) -> Self {
        let mut source = FakeSource::default();
        for id in ids {
            source
                .records
                .insert(id.to_string(), raw_pokemon(id, &format!("pokemon-{id}")));
        }
        source
    }

    /// Registers a record reachable by both its id and its name
    pub fn record(mut self, raw: RawPokemon) -> Self {
        self.records.insert(raw.id.to_string(), raw.clone());
        self.records.insert(raw.name.clone(), raw);
        self
    }

    pub fn delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn delay_all(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    pub fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    /// Keys in the order their fetches finished
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl RecordSource for FakeSource {
    async fn fetch_raw(&self, identifier: &Identifier) -> Result<RawPokemon, CatalogueError> {
        let key = identifier.to_string();
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self.delays.get(&key).copied().unwrap_or(self.default_delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if let Ok(mut completed) = self.completed.lock() {
            completed.push(key.clone());
        }

        if self.failing.contains(&key) {
            return Err(CatalogueError::Status {
                identifier: identifier.clone(),
                status: 500,
            });
        }

        self.records
            .get(&key)
            .cloned()
            .ok_or_else(|| CatalogueError::NotFound {
                identifier: identifier.clone(),
            })
    }
}
