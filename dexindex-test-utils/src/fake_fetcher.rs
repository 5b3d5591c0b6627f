use std::{
    sync::{
        Mutex,
        atomic::{
            AtomicUsize,
            Ordering,
        },
    },
    time::Duration,
};

use ahash::{
    HashMap,
    HashSet,
};
use async_trait::async_trait;
use dexindex::{
    FetchError,
    graphql::BatchFetcher,
};
use dexindex_data::{
    Record,
    Slug,
};
use tokio_util::sync::CancellationToken;

/// In-memory [`BatchFetcher`] that records how it was called.
#[derive(Debug, Default)]
pub struct FakeBatchFetcher {
    records: HashMap<String, Record>,
    failing: HashSet<String>,
    delay: Duration,
    cancel_on_call: Option<CancellationToken>,
    calls: Mutex<Vec<Vec<String>>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeBatchFetcher {
    /// Creates a fetcher that knows the given records, keyed by name.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.name.clone(), record))
                .collect(),
            ..Default::default()
        }
    }

    /// Fails every batch that contains the given slug.
    pub fn failing_on(mut self, slug: &str) -> Self {
        self.failing.insert(slug.to_owned());
        self
    }

    /// Holds each batch for the given duration before responding.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Cancels the token as soon as any batch starts.
    pub fn cancelling(mut self, token: CancellationToken) -> Self {
        self.cancel_on_call = Some(token);
        self
    }

    /// Slugs of every batch, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Greatest number of batches that were in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BatchFetcher for FakeBatchFetcher {
    async fn fetch_batch(
        &self,
        slugs: &[Slug],
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>, FetchError> {
        let slugs = slugs
            .iter()
            .map(|slug| slug.as_str().to_owned())
            .collect::<Vec<_>>();
        self.calls.lock().unwrap().push(slugs.clone());
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        if let Some(token) = &self.cancel_on_call {
            token.cancel();
        }

        // Yield even without a delay so that concurrent batches overlap.
        let cancelled = tokio::select! {
            biased;
            _ = cancel.cancelled() => true,
            _ = tokio::time::sleep(self.delay) => false,
        };
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if cancelled {
            return Err(FetchError::Cancelled {
                url: "fake://batch".to_owned(),
            });
        }
        if let Some(slug) = slugs.iter().find(|slug| self.failing.contains(*slug)) {
            return Err(FetchError::MalformedResponse {
                url: "fake://batch".to_owned(),
                reason: format!("{slug} is poisoned"),
            });
        }
        Ok(slugs
            .iter()
            .filter_map(|slug| self.records.get(slug).cloned())
            .collect())
    }
}
