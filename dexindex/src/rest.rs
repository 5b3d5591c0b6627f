use dexindex_data::{
    ABILITY_DESCRIPTION_UNAVAILABLE,
    Ability,
    EvolutionChain,
    PokemonResponse,
    Record,
    Species,
    normalize,
};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::{
    FetchError,
    LoaderOptions,
    http::{
        HttpRequest,
        RetryingExecutor,
    },
};

/// Retry budgets for each kind of REST lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestRetries {
    pub pokemon: u32,
    pub species: u32,
    pub evolution: u32,
    pub ability: u32,
}

impl Default for RestRetries {
    fn default() -> Self {
        Self::from(&LoaderOptions::default())
    }
}

impl From<&LoaderOptions> for RestRetries {
    fn from(options: &LoaderOptions) -> Self {
        Self {
            pokemon: options.pokemon_retries,
            species: options.species_retries,
            evolution: options.evolution_retries,
            ability: options.ability_retries,
        }
    }
}

/// Client for single-entity lookups against the REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    executor: RetryingExecutor,
    base_url: String,
    retries: RestRetries,
}

impl RestClient {
    pub fn new<B>(executor: RetryingExecutor, base_url: B, retries: RestRetries) -> Self
    where
        B: Into<String>,
    {
        Self {
            executor,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            retries,
        }
    }

    pub fn from_options(executor: RetryingExecutor, options: &LoaderOptions) -> Self {
        Self::new(
            executor,
            options.rest_base_url.as_str(),
            RestRetries::from(options),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T>(
        &self,
        url: &str,
        max_retries: u32,
        cancel: &CancellationToken,
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        self.executor
            .execute_json(&HttpRequest::get(url), max_retries, cancel)
            .await
    }

    /// Fetches a Pokémon by display name or slug.
    ///
    /// The returned record has no catalogue number.
    pub async fn pokemon(&self, name: &str, cancel: &CancellationToken) -> Result<Record, FetchError> {
        let url = format!("{}/pokemon/{}", self.base_url, normalize(name));
        self.get::<PokemonResponse>(&url, self.retries.pokemon, cancel)
            .await
            .map(PokemonResponse::into_record)
    }

    /// Fetches a Pokémon by backend ID.
    pub async fn pokemon_by_id(
        &self,
        id: u32,
        cancel: &CancellationToken,
    ) -> Result<Record, FetchError> {
        let url = format!("{}/pokemon/{id}", self.base_url);
        self.get::<PokemonResponse>(&url, self.retries.pokemon, cancel)
            .await
            .map(PokemonResponse::into_record)
    }

    pub async fn species(&self, id: u32, cancel: &CancellationToken) -> Result<Species, FetchError> {
        let url = format!("{}/pokemon-species/{id}", self.base_url);
        self.species_by_url(&url, cancel).await
    }

    pub async fn species_by_url(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<Species, FetchError> {
        self.get(url, self.retries.species, cancel).await
    }

    pub async fn evolution_chain(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<EvolutionChain, FetchError> {
        self.get(url, self.retries.evolution, cancel).await
    }

    pub async fn ability(&self, url: &str, cancel: &CancellationToken) -> Result<Ability, FetchError> {
        self.get(url, self.retries.ability, cancel).await
    }

    /// The English description of an ability, or a placeholder when it cannot be loaded.
    pub async fn ability_description(&self, url: &str, cancel: &CancellationToken) -> String {
        match self.ability(url, cancel).await {
            Ok(ability) => ability.description(),
            Err(err) => {
                log::warn!("Failed to load ability: {err}");
                ABILITY_DESCRIPTION_UNAVAILABLE.to_owned()
            }
        }
    }
}
