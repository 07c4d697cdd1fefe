use chrono::NaiveDate;
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::core::{AppError, Result};
use crate::modules::summaries::models::SummaryWindow;
use crate::modules::summaries::repositories::SummaryStore;

/// Sums summary amounts for one window across a set of merchants
pub struct WindowAggregator {
    store: Arc<dyn SummaryStore>,
    fetch_concurrency: usize,
}

impl WindowAggregator {
    /// Aggregator that fetches one document at a time
    pub fn new(store: Arc<dyn SummaryStore>) -> Self {
        Self::with_concurrency(store, 1)
    }

    /// Aggregator with up to `fetch_concurrency` fetches in flight.
    ///
    /// Results are still consumed in input order, so the first failing
    /// merchant in the request decides the error.
    pub fn with_concurrency(store: Arc<dyn SummaryStore>, fetch_concurrency: usize) -> Self {
        Self {
            store,
            fetch_concurrency: fetch_concurrency.max(1),
        }
    }

    /// Total `amount` over the merchants whose `window` document exists for `date`.
    ///
    /// Missing documents contribute zero. Any other store failure aborts the
    /// whole window.
    pub async fn aggregate(
        &self,
        window: SummaryWindow,
        merchant_ids: &[String],
        date: NaiveDate,
    ) -> Result<i64> {
        let mut fetches = stream::iter(merchant_ids.iter().map(|merchant_id| {
            let key = window.document_key(merchant_id, date);
            let store = Arc::clone(&self.store);
            async move {
                let result = store.get(&key).await;
                (merchant_id, key, result)
            }
        }))
        .buffered(self.fetch_concurrency);

        let mut total: i64 = 0;
        while let Some((merchant_id, key, result)) = fetches.next().await {
            match result {
                Ok(Some(document)) => {
                    debug!(%window, merchant_id = %merchant_id, amount = document.amount, "Summary found");
                    total = total.wrapping_add(document.amount);
                }
                Ok(None) => {
                    warn!(%window, key = %key, "Summary not found");
                }
                Err(e) => {
                    error!(%window, key = %key, error = %e, "Failed to get summary document");
                    return Err(AppError::aggregation(window, e));
                }
            }
        }

        Ok(total)
    }
}
