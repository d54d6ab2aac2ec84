// SPDX-License-Identifier: GPL-3.0-only

use std::{future::Future, sync::Arc};

use futures::{StreamExt, TryStreamExt, future::try_join_all};
use reqwest::StatusCode;
use tracing::{debug, info};

use crate::{
    config::CatalogueConfig,
    entities::{Identifier, PokemonRecord, RawPokemon},
    utils::CatalogueError,
};

/// Anything that can hand back a raw catalog document for an identifier
pub trait RecordSource: Send + Sync {
    fn fetch_raw(
        &self,
        identifier: &Identifier,
    ) -> impl Future<Output = Result<RawPokemon, CatalogueError>> + Send;
}

/// PokéApi over HTTP
#[derive(Debug, Clone)]
pub struct PokeApiSource {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        PokeApiSource {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn record_url(&self, identifier: &Identifier) -> String {
        format!("{}/{}/", self.base_url, identifier)
    }
}

impl RecordSource for PokeApiSource {
    async fn fetch_raw(&self, identifier: &Identifier) -> Result<RawPokemon, CatalogueError> {
        let url = self.record_url(identifier);
        debug!(%url, "requesting record");

        let response = self.client.get(&url).send().await.map_err(|source| {
            CatalogueError::Transport {
                identifier: identifier.clone(),
                source,
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogueError::NotFound {
                identifier: identifier.clone(),
            });
        }
        if !status.is_success() {
            return Err(CatalogueError::Status {
                identifier: identifier.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogueError::Transport {
                identifier: identifier.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| CatalogueError::Decode {
            identifier: identifier.clone(),
            source,
        })
    }
}

/// Fetches records and batches of records, normalized to [`PokemonRecord`]
#[derive(Debug)]
pub struct CatalogueApi<S = PokeApiSource> {
    source: Arc<S>,
    max_concurrency: Option<usize>,
}

impl<S> Clone for CatalogueApi<S> {
    fn clone(&self) -> Self {
        CatalogueApi {
            source: Arc::clone(&self.source),
            max_concurrency: self.max_concurrency,
        }
    }
}

impl CatalogueApi<PokeApiSource> {
    pub fn from_config(config: &CatalogueConfig) -> Self {
        CatalogueApi::new(PokeApiSource::new(&config.base_url))
            .with_max_concurrency(config.max_concurrency)
    }
}

impl<S: RecordSource> CatalogueApi<S> {
    pub fn new(source: S) -> Self {
        CatalogueApi {
            source: Arc::new(source),
            max_concurrency: None,
        }
    }

    /// Caps the number of fetches a batch keeps in flight. `None` (or zero) means no cap.
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|limit| *limit > 0);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Retrieve a single Pokémon from the catalog and normalize it.
    /// Nothing is retried or cached, any failure is returned as is.
    pub async fn fetch_record(&self, identifier: Identifier) -> Result<PokemonRecord, CatalogueError> {
        debug!(%identifier, "fetching record");
        let raw = self.source.fetch_raw(&identifier).await?;
        Ok(PokemonRecord::from(raw))
    }

    /// Fetches every identifier concurrently.
    ///
    /// The output is in input order regardless of which fetch finishes first.
    /// The first failure fails the whole batch and no partial results are returned.
    pub async fn fetch_batch<I>(&self, identifiers: I) -> Result<Vec<PokemonRecord>, CatalogueError>
    where
        I: IntoIterator<Item = Identifier>,
    {
        let identifiers: Vec<Identifier> = identifiers.into_iter().collect();
        info!(
            count = identifiers.len(),
            max_concurrency = ?self.max_concurrency,
            "fetching batch"
        );

        let fetches = identifiers
            .into_iter()
            .map(|identifier| self.fetch_record(identifier));

        match self.max_concurrency {
            None => try_join_all(fetches).await,
            Some(limit) => futures::stream::iter(fetches)
                .buffered(limit)
                .try_collect()
                .await,
        }
    }
}
