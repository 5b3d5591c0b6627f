use dexindex_data::{
    Record,
    Slug,
};
use futures_util::future::join_all;
use tokio_util::sync::CancellationToken;

use crate::{
    LoadError,
    graphql::BatchFetcher,
};

/// Runs batch fetches in waves of bounded concurrency.
///
/// Slugs are split into batches of `batch_size`. Up to `concurrency` batches run at once, and
/// every batch of a wave finishes before the next wave starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveScheduler {
    batch_size: usize,
    concurrency: usize,
}

impl WaveScheduler {
    /// Creates a new scheduler. Zero sizes are treated as 1.
    pub fn new(batch_size: usize, concurrency: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            concurrency: concurrency.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Number of batches needed for `total` slugs.
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size)
    }

    /// Number of waves needed for `total` slugs.
    pub fn wave_count(&self, total: usize) -> usize {
        self.batch_count(total).div_ceil(self.concurrency)
    }

    /// Fetches records for all slugs.
    ///
    /// `on_progress(current, total)` is called after every wave, where `current` counts the slugs
    /// attempted so far. A failed batch contributes no records and does not stop the load.
    /// Records are returned in batch order.
    pub async fn load_all<F>(
        &self,
        fetcher: &dyn BatchFetcher,
        slugs: &[Slug],
        mut on_progress: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<Record>, LoadError>
    where
        F: FnMut(usize, usize),
    {
        let total = slugs.len();
        let batches = slugs.chunks(self.batch_size).collect::<Vec<_>>();
        let mut records = Vec::with_capacity(total);
        let mut completed = 0;

        for (i, wave) in batches.chunks(self.concurrency).enumerate() {
            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }

            let results = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(LoadError::Cancelled),
                results = join_all(wave.iter().map(|batch| fetcher.fetch_batch(batch, cancel))) => results,
            };

            for (batch, result) in wave.iter().zip(results) {
                completed += batch.len();
                match result {
                    Ok(batch_records) => records.extend(batch_records),
                    Err(err) => log::warn!(
                        "batch of {} names starting at {} failed: {err}",
                        batch.len(),
                        batch.first().map(|slug| slug.as_str()).unwrap_or_default(),
                    ),
                }
            }

            // A batch may have returned early because of the token.
            if cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }

            log::debug!(
                "wave {} of {} finished, {} records so far",
                i + 1,
                self.wave_count(total),
                records.len(),
            );
            on_progress(completed.min(total), total);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod wave_scheduler_test {
    use crate::WaveScheduler;

    #[test]
    fn clamps_zero_sizes() {
        let scheduler = WaveScheduler::new(0, 0);
        assert_eq!(scheduler.batch_size(), 1);
        assert_eq!(scheduler.concurrency(), 1);
    }

    #[test]
    fn counts_batches_and_waves() {
        let scheduler = WaveScheduler::new(100, 10);
        assert_eq!(scheduler.batch_count(1025), 11);
        assert_eq!(scheduler.wave_count(1025), 2);
        assert_eq!(scheduler.batch_count(0), 0);
        assert_eq!(scheduler.wave_count(0), 0);

        let scheduler = WaveScheduler::new(2, 1);
        assert_eq!(scheduler.batch_count(3), 2);
        assert_eq!(scheduler.wave_count(3), 2);
    }
}
