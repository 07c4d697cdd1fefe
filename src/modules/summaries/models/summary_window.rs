use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::modules::summaries::services::key_deriver;

/// Aggregation period a summary document covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryWindow {
    Daily,
    /// Monday through Friday of the reference week
    Weekly,
    Monthly,
}

impl SummaryWindow {
    /// Windows in the order a request computes them
    pub const ALL: [SummaryWindow; 3] = [
        SummaryWindow::Daily,
        SummaryWindow::Weekly,
        SummaryWindow::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryWindow::Daily => "daily",
            SummaryWindow::Weekly => "weekly",
            SummaryWindow::Monthly => "monthly",
        }
    }

    /// Key of the document holding `merchant_id`'s summary for the window containing `date`
    pub fn document_key(&self, merchant_id: &str, date: NaiveDate) -> String {
        match self {
            SummaryWindow::Daily => key_deriver::daily_key(merchant_id, date),
            SummaryWindow::Weekly => key_deriver::weekly_key(merchant_id, date),
            SummaryWindow::Monthly => key_deriver::monthly_key(merchant_id, date),
        }
    }
}

impl fmt::Display for SummaryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
