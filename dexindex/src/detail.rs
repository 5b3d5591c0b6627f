use dexindex_data::{
    Catalogue,
    EvolutionChain,
    Record,
    Species,
};
use futures_util::future::join_all;
use indexmap::IndexMap;
use tokio_util::sync::CancellationToken;

use crate::{
    FetchError,
    LoaderOptions,
    rest::RestClient,
};

/// Everything shown for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail {
    pub record: Record,
    pub species: Option<Species>,
    pub evolution_chain: Option<EvolutionChain>,
    /// Default sprite of each variety of the species, keyed by variety name in variety order.
    pub form_sprites: IndexMap<String, String>,
}

/// Loads supplementary data for records of a catalogue.
///
/// Failures are logged and leave the corresponding data absent.
pub struct DetailLoader<'c> {
    rest: RestClient,
    catalogue: &'c Catalogue,
    form_batch_size: usize,
}

impl<'c> DetailLoader<'c> {
    pub fn new(rest: RestClient, catalogue: &'c Catalogue, form_batch_size: usize) -> Self {
        Self {
            rest,
            catalogue,
            form_batch_size: form_batch_size.max(1),
        }
    }

    pub fn from_options(rest: RestClient, catalogue: &'c Catalogue, options: &LoaderOptions) -> Self {
        Self::new(rest, catalogue, options.form_prefetch_batch_size)
    }

    pub fn rest(&self) -> &RestClient {
        &self.rest
    }

    /// Loads the species, evolution chain, and form sprites of a record.
    pub async fn load(&self, record: Record, cancel: &CancellationToken) -> RecordDetail {
        let species = self.load_species(&record, cancel).await;
        let evolution_chain = match species.as_ref().and_then(|species| species.evolution_chain_url())
        {
            Some(url) => absent_on_error(
                "evolution chain",
                &record.name,
                self.rest.evolution_chain(url, cancel).await,
            ),
            None => None,
        };
        let form_sprites = match &species {
            Some(species) => self.prefetch_form_sprites(species, cancel).await,
            None => IndexMap::new(),
        };
        RecordDetail {
            record,
            species,
            evolution_chain,
            form_sprites,
        }
    }

    async fn load_species(&self, record: &Record, cancel: &CancellationToken) -> Option<Species> {
        // Alternate forms have IDs that differ from their species ID.
        let result = if record.species.url.is_empty() {
            self.rest.species(record.id, cancel).await
        } else {
            self.rest.species_by_url(&record.species.url, cancel).await
        };
        absent_on_error("species", &record.name, result)
    }

    /// Fetches the default sprite of every variety of a species.
    ///
    /// Varieties are fetched a few at a time. Varieties that fail or have no sprite are skipped.
    pub async fn prefetch_form_sprites(
        &self,
        species: &Species,
        cancel: &CancellationToken,
    ) -> IndexMap<String, String> {
        let mut sprites = IndexMap::new();
        for batch in species.varieties.chunks(self.form_batch_size) {
            if cancel.is_cancelled() {
                break;
            }
            let results = join_all(batch.iter().map(|variety| async move {
                let name = variety.pokemon.name.as_str();
                let record = absent_on_error(
                    "form sprite",
                    name,
                    self.rest.pokemon(name, cancel).await,
                )?;
                Some((name.to_owned(), record.sprites.front_default?))
            }))
            .await;
            sprites.extend(results.into_iter().flatten());
        }
        sprites
    }

    /// Fetches a record selected from a form or evolution list.
    ///
    /// Its catalogue number is the catalogue's number for its name, else `fallback_custom_id`,
    /// else its backend ID.
    pub async fn select(
        &self,
        name: &str,
        fallback_custom_id: Option<u32>,
        cancel: &CancellationToken,
    ) -> Option<Record> {
        let mut record = absent_on_error("selection", name, self.rest.pokemon(name, cancel).await)?;
        record.custom_id = self
            .catalogue
            .custom_id_for(&record.name)
            .or(fallback_custom_id)
            .or(Some(record.id));
        Some(record)
    }
}

fn absent_on_error<T>(what: &str, name: &str, result: Result<T, FetchError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Failed to load {what} for {name}: {err}");
            None
        }
    }
}
