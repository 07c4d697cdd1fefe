use serde::{Deserialize, Serialize};

/// Precomputed per-merchant summary stored under a derived document key.
///
/// Documents are written by an upstream job; this service only reads them.
/// Absent fields decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryDocument {
    pub merchant_id: String,
    pub summary_date: String,
    pub amount: i64,
    pub count: i64,
    #[serde(rename = "last_trx_date")]
    pub last_transaction_date: String,
}

impl SummaryDocument {
    pub fn new(merchant_id: impl Into<String>, summary_date: impl Into<String>, amount: i64) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            summary_date: summary_date.into(),
            amount,
            ..Default::default()
        }
    }
}
