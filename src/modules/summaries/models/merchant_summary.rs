use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/merchant/summary`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Merchant IDs to aggregate; missing or `null` is treated as empty
    #[serde(default)]
    pub mid: Option<Vec<String>>,
}

impl SummaryRequest {
    pub fn new(merchant_ids: Vec<String>) -> Self {
        Self {
            mid: Some(merchant_ids),
        }
    }

    pub fn into_merchant_ids(self) -> Vec<String> {
        self.mid.unwrap_or_default()
    }
}

/// Totals for one request, all windows computed against `current_date`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantSummary {
    pub merchant_ids: Vec<String>,
    pub current_date: NaiveDate,
    pub today_total: i64,
    pub weekly_total: i64,
    pub monthly_total: i64,
}
