use std::{
    env,
    fmt::Display,
    fs::File,
    path::Path,
    str::FromStr,
    time::Duration,
};

use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::http::RetryPolicy;

/// Version of the catalogue shape.
///
/// Bumping this invalidates every persisted snapshot, since the old key is never looked up again.
pub const CATALOGUE_VERSION: u32 = 37;

/// Default GraphQL endpoint.
pub const DEFAULT_GRAPHQL_URL: &str = "https://beta.pokeapi.co/graphql/v1beta";

/// Default REST API root.
pub const DEFAULT_REST_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Snapshot key for the current catalogue version.
pub fn default_snapshot_key() -> String {
    format!("catalogue_v{CATALOGUE_VERSION}")
}

/// Options for configuring how the catalogue is fetched and cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// GraphQL endpoint used for bulk batches.
    pub graphql_url: String,
    /// REST API root used for per-entity lookups.
    ///
    /// Ability and species URLs synthesized from bulk batches are also rooted here.
    pub rest_base_url: String,
    /// Key the snapshot is stored under.
    pub snapshot_key: String,
    /// Number of slugs per GraphQL request.
    pub batch_size: usize,
    /// Number of batches in flight at once.
    pub concurrency: usize,
    /// Deadline for a single attempt, in milliseconds.
    pub request_timeout_ms: u64,
    /// Delay before the first retry, in milliseconds. Doubles on each following retry.
    pub retry_base_delay_ms: u64,
    pub batch_retries: u32,
    pub pokemon_retries: u32,
    pub species_retries: u32,
    pub evolution_retries: u32,
    pub ability_retries: u32,
    /// Number of form sprites fetched at once by the detail loader.
    pub form_prefetch_batch_size: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            graphql_url: DEFAULT_GRAPHQL_URL.to_owned(),
            rest_base_url: DEFAULT_REST_BASE_URL.to_owned(),
            snapshot_key: default_snapshot_key(),
            batch_size: 100,
            concurrency: 10,
            request_timeout_ms: 8000,
            retry_base_delay_ms: 100,
            batch_retries: 2,
            pokemon_retries: 3,
            species_retries: 1,
            evolution_retries: 2,
            ability_retries: 2,
            form_prefetch_batch_size: 3,
        }
    }
}

fn override_from<T, F>(lookup: &F, var: &str, target: &mut T) -> Result<()>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(var) {
        *target = value
            .trim()
            .parse::<T>()
            .map_err(|err| anyhow::Error::msg(err.to_string()))
            .with_context(|| format!("invalid value for {var}: {value}"))?;
    }
    Ok(())
}

impl LoaderOptions {
    /// Reads options from a JSON file. Missing fields take their default values.
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        serde_json::from_reader(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )
        .with_context(|| format!("failed to parse loader options from {}", path.display()))
    }

    /// Default options overlaid with `DEXINDEX_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|var| env::var(var).ok())
    }

    /// Overlays values from the given variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        override_from(&lookup, "DEXINDEX_GRAPHQL_URL", &mut self.graphql_url)?;
        override_from(&lookup, "DEXINDEX_REST_BASE_URL", &mut self.rest_base_url)?;
        override_from(&lookup, "DEXINDEX_SNAPSHOT_KEY", &mut self.snapshot_key)?;
        override_from(&lookup, "DEXINDEX_BATCH_SIZE", &mut self.batch_size)?;
        override_from(&lookup, "DEXINDEX_CONCURRENCY", &mut self.concurrency)?;
        override_from(
            &lookup,
            "DEXINDEX_REQUEST_TIMEOUT_MS",
            &mut self.request_timeout_ms,
        )?;
        override_from(
            &lookup,
            "DEXINDEX_RETRY_BASE_DELAY_MS",
            &mut self.retry_base_delay_ms,
        )?;
        override_from(&lookup, "DEXINDEX_BATCH_RETRIES", &mut self.batch_retries)?;
        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_base_delay(&self) -> Duration {
        Duration::from_millis(self.retry_base_delay_ms)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            timeout: self.request_timeout(),
            base_delay: self.retry_base_delay(),
        }
    }
}
