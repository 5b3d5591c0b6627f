use std::sync::Arc;

use dexindex_data::{
    Catalogue,
    Record,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{
    LoadError,
    LoaderOptions,
    WaveScheduler,
    graphql::BatchFetcher,
    store::SnapshotStore,
};

/// Observable state of a [`CatalogueLoader`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load is running, and none has finished.
    #[default]
    Idle,
    /// Batches are being fetched.
    Loading { current: usize, total: usize },
    /// The catalogue is available.
    Ready {
        count: usize,
        /// Fewer records were returned than the catalogue names.
        partial: bool,
        /// Records came from a persisted snapshot rather than the network.
        from_snapshot: bool,
    },
}

/// Sets each record's catalogue number, falling back to its backend ID for unlisted names.
pub fn annotate_custom_ids(records: &mut [Record], catalogue: &Catalogue) {
    for record in records {
        record.custom_id = catalogue.custom_id_for(&record.name).or(Some(record.id));
    }
}

/// Stable sort by catalogue number. Records without one go last.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by_key(|record| record.custom_id.unwrap_or(u32::MAX));
}

/// Produces the full catalogue, from a persisted snapshot when one exists and from the network
/// otherwise.
pub struct CatalogueLoader<'c> {
    catalogue: &'c Catalogue,
    fetcher: Arc<dyn BatchFetcher>,
    store: Arc<dyn SnapshotStore>,
    scheduler: WaveScheduler,
    snapshot_key: String,
    state_tx: watch::Sender<LoadState>,
}

impl<'c> CatalogueLoader<'c> {
    pub fn new(
        catalogue: &'c Catalogue,
        fetcher: Arc<dyn BatchFetcher>,
        store: Arc<dyn SnapshotStore>,
        options: &LoaderOptions,
    ) -> Self {
        let (state_tx, _) = watch::channel(LoadState::Idle);
        Self {
            catalogue,
            fetcher,
            store,
            scheduler: WaveScheduler::new(options.batch_size, options.concurrency),
            snapshot_key: options.snapshot_key.clone(),
            state_tx,
        }
    }

    pub fn snapshot_key(&self) -> &str {
        &self.snapshot_key
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state_tx.subscribe()
    }

    /// The current state.
    pub fn state(&self) -> LoadState {
        self.state_tx.borrow().clone()
    }

    /// Loads the catalogue, sorted by catalogue number.
    ///
    /// A non-empty snapshot is returned as is, with no progress reported. Otherwise, every
    /// catalogue name is fetched and the result is persisted. Fetch and persistence failures
    /// degrade the result but never fail the load; only cancellation does, in which case nothing
    /// is persisted.
    pub async fn load_catalogue<F>(
        &self,
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>, LoadError>
    where
        F: FnMut(usize, usize),
    {
        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled);
        }

        if let Some(records) = self.read_snapshot().await {
            log::info!(
                "Loaded {} records from snapshot {}",
                records.len(),
                self.snapshot_key
            );
            self.state_tx.send_replace(LoadState::Ready {
                count: records.len(),
                partial: self.is_partial(&records),
                from_snapshot: true,
            });
            return Ok(records);
        }

        let slugs = self.catalogue.slugs();
        log::info!(
            "Fetching {} names in {} batches",
            slugs.len(),
            self.scheduler.batch_count(slugs.len())
        );
        self.state_tx.send_replace(LoadState::Loading {
            current: 0,
            total: slugs.len(),
        });
        let result = self
            .scheduler
            .load_all(
                self.fetcher.as_ref(),
                &slugs,
                |current, total| {
                    self.state_tx
                        .send_replace(LoadState::Loading { current, total });
                    on_progress(current, total);
                },
                cancel,
            )
            .await;
        let mut records = match result {
            Ok(records) => records,
            Err(err) => {
                log::info!("Catalogue load stopped: {err}");
                self.state_tx.send_replace(LoadState::Idle);
                return Err(err);
            }
        };

        annotate_custom_ids(&mut records, self.catalogue);
        sort_records(&mut records);

        let partial = self.is_partial(&records);
        if partial {
            log::warn!(
                "Catalogue is partial: {} of {} names loaded",
                records.len(),
                self.catalogue.distinct_slug_count()
            );
        }
        if !records.is_empty() {
            self.write_snapshot(records.clone()).await;
        }

        self.state_tx.send_replace(LoadState::Ready {
            count: records.len(),
            partial,
            from_snapshot: false,
        });
        Ok(records)
    }

    fn is_partial(&self, records: &[Record]) -> bool {
        records.len() < self.catalogue.distinct_slug_count()
    }

    async fn read_snapshot(&self) -> Option<Vec<Record>> {
        let store = self.store.clone();
        let key = self.snapshot_key.clone();
        match tokio::task::spawn_blocking(move || store.get(&key)).await {
            Ok(Ok(records)) => records.filter(|records| !records.is_empty()),
            Ok(Err(err)) => {
                log::warn!("Failed to read snapshot {}: {err}", self.snapshot_key);
                None
            }
            Err(err) => {
                log::warn!("Snapshot read task failed: {err}");
                None
            }
        }
    }

    async fn write_snapshot(&self, records: Vec<Record>) {
        let store = self.store.clone();
        let key = self.snapshot_key.clone();
        match tokio::task::spawn_blocking(move || store.put(&key, &records)).await {
            Ok(Ok(())) => (),
            Ok(Err(err)) => log::warn!("Failed to persist snapshot {}: {err}", self.snapshot_key),
            Err(err) => log::warn!("Snapshot write task failed: {err}"),
        }
    }
}
