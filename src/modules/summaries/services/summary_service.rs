use std::sync::Arc;
use tracing::info;

use crate::core::{AppError, Clock, Result};
use crate::modules::summaries::models::{MerchantSummary, SummaryWindow};
use crate::modules::summaries::repositories::SummaryStore;
use crate::modules::summaries::services::WindowAggregator;

/// Computes daily, weekly and monthly totals for a merchant set
pub struct SummaryService {
    aggregator: WindowAggregator,
    clock: Arc<dyn Clock>,
}

impl SummaryService {
    pub fn new(store: Arc<dyn SummaryStore>, clock: Arc<dyn Clock>) -> Self {
        Self::with_concurrency(store, clock, 1)
    }

    pub fn with_concurrency(
        store: Arc<dyn SummaryStore>,
        clock: Arc<dyn Clock>,
        fetch_concurrency: usize,
    ) -> Self {
        Self {
            aggregator: WindowAggregator::with_concurrency(store, fetch_concurrency),
            clock,
        }
    }

    /// Aggregate all three windows for `merchant_ids`.
    ///
    /// The clock is read once so every window shares the same reference date.
    /// Windows run in order and the first failure is returned without
    /// computing the rest.
    pub async fn summarize(&self, merchant_ids: Vec<String>) -> Result<MerchantSummary> {
        if merchant_ids.is_empty() {
            return Err(AppError::validation("Merchant IDs are required"));
        }

        info!("Processing summary for {} merchants", merchant_ids.len());

        let current_date = self.clock.now().date_naive();

        let today_total = self
            .aggregator
            .aggregate(SummaryWindow::Daily, &merchant_ids, current_date)
            .await?;
        let weekly_total = self
            .aggregator
            .aggregate(SummaryWindow::Weekly, &merchant_ids, current_date)
            .await?;
        let monthly_total = self
            .aggregator
            .aggregate(SummaryWindow::Monthly, &merchant_ids, current_date)
            .await?;

        info!(today_total, weekly_total, monthly_total, "Summary calculated");

        Ok(MerchantSummary {
            merchant_ids,
            current_date,
            today_total,
            weekly_total,
            monthly_total,
        })
    }
}
