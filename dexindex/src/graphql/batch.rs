use async_trait::async_trait;
use dexindex_data::{
    Record,
    Slug,
};
use itertools::Itertools;
use serde_json::json;
use tokio_util::sync::CancellationToken;

use crate::{
    FetchError,
    LoaderOptions,
    graphql::query::{
        GraphqlResponse,
        POKEMON_BY_NAMES_QUERY,
    },
    http::{
        HttpRequest,
        RetryingExecutor,
    },
};

/// Fetches full records for a batch of slugs.
#[async_trait]
pub trait BatchFetcher: Send + Sync {
    /// Fetches the records for all of the given slugs.
    ///
    /// Slugs with no matching Pokémon are silently absent from the result. A failure of any kind
    /// fails the whole batch.
    async fn fetch_batch(
        &self,
        slugs: &[Slug],
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>, FetchError>;
}

/// [`BatchFetcher`] backed by the GraphQL endpoint, issuing one request per batch.
#[derive(Debug, Clone)]
pub struct GraphqlBatchFetcher {
    executor: RetryingExecutor,
    endpoint: String,
    rest_base_url: String,
    max_retries: u32,
}

impl GraphqlBatchFetcher {
    pub fn new<E, R>(executor: RetryingExecutor, endpoint: E, rest_base_url: R, max_retries: u32) -> Self
    where
        E: Into<String>,
        R: Into<String>,
    {
        Self {
            executor,
            endpoint: endpoint.into(),
            rest_base_url: rest_base_url.into().trim_end_matches('/').to_owned(),
            max_retries,
        }
    }

    pub fn from_options(executor: RetryingExecutor, options: &LoaderOptions) -> Self {
        Self::new(
            executor,
            options.graphql_url.as_str(),
            options.rest_base_url.as_str(),
            options.batch_retries,
        )
    }

    /// Like [`BatchFetcher::fetch_batch`], but a failed batch yields no records.
    pub async fn fetch_batch_or_empty(
        &self,
        slugs: &[Slug],
        cancel: &CancellationToken,
    ) -> Vec<Record> {
        match self.fetch_batch(slugs, cancel).await {
            Ok(records) => records,
            Err(err) => {
                log::warn!("GraphQL batch of {} names failed: {err}", slugs.len());
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl BatchFetcher for GraphqlBatchFetcher {
    async fn fetch_batch(
        &self,
        slugs: &[Slug],
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>, FetchError> {
        let request = HttpRequest::post_json(
            self.endpoint.as_str(),
            json!({
                "query": POKEMON_BY_NAMES_QUERY,
                "variables": {
                    "names": slugs,
                },
            }),
        );
        let response: GraphqlResponse = self
            .executor
            .execute_json(&request, self.max_retries, cancel)
            .await?;
        // Any `errors` key discards the batch, even alongside data.
        if let Some(errors) = response.errors {
            return Err(FetchError::malformed(
                &self.endpoint,
                format!(
                    "GraphQL errors: {}",
                    errors.iter().map(|error| error.message.as_str()).join("; ")
                ),
            ));
        }
        let data = response
            .data
            .ok_or_else(|| FetchError::malformed(&self.endpoint, "response has no data"))?;
        Ok(data
            .pokemon_v2_pokemon
            .into_iter()
            .map(|raw| raw.into_record(&self.rest_base_url))
            .collect())
    }
}
