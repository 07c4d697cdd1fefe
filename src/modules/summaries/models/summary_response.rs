use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::core::clock::format_date;
use crate::modules::summaries::models::{MerchantSummary, SummaryWindow};

/// Result codes carried in `error_schema.error_code`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    Success,
    InvalidRequestBody,
    MerchantIdsRequired,
    DailyTotalFailed,
    WeeklyTotalFailed,
    MonthlyTotalFailed,
    InternalError,
}

impl ResponseCode {
    pub fn for_window_failure(window: SummaryWindow) -> Self {
        match window {
            SummaryWindow::Daily => ResponseCode::DailyTotalFailed,
            SummaryWindow::Weekly => ResponseCode::WeeklyTotalFailed,
            SummaryWindow::Monthly => ResponseCode::MonthlyTotalFailed,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ResponseCode::Success => "D000",
            ResponseCode::InvalidRequestBody => "E001",
            ResponseCode::MerchantIdsRequired => "E002",
            ResponseCode::DailyTotalFailed => "E003",
            ResponseCode::WeeklyTotalFailed => "E004",
            ResponseCode::MonthlyTotalFailed => "E005",
            ResponseCode::InternalError => "E999",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ResponseCode::Success => StatusCode::OK,
            ResponseCode::InvalidRequestBody | ResponseCode::MerchantIdsRequired => {
                StatusCode::BAD_REQUEST
            }
            ResponseCode::DailyTotalFailed
            | ResponseCode::WeeklyTotalFailed
            | ResponseCode::MonthlyTotalFailed
            | ResponseCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Only success is translated; error codes carry
    /// the English text in both language slots.
    pub fn message(&self) -> ErrorMessage {
        match self {
            ResponseCode::Success => ErrorMessage {
                indonesian: "Berhasil".to_string(),
                english: "Success".to_string(),
            },
            ResponseCode::InvalidRequestBody => ErrorMessage::untranslated("Invalid request body"),
            ResponseCode::MerchantIdsRequired => {
                ErrorMessage::untranslated("Merchant IDs are required")
            }
            ResponseCode::DailyTotalFailed => {
                ErrorMessage::untranslated("Failed to calculate daily total")
            }
            ResponseCode::WeeklyTotalFailed => {
                ErrorMessage::untranslated("Failed to calculate weekly total")
            }
            ResponseCode::MonthlyTotalFailed => {
                ErrorMessage::untranslated("Failed to calculate monthly total")
            }
            ResponseCode::InternalError => ErrorMessage::untranslated("Internal server error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub indonesian: String,
    pub english: String,
}

impl ErrorMessage {
    fn untranslated(message: &str) -> Self {
        Self {
            indonesian: message.to_string(),
            english: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSchema {
    pub error_code: String,
    pub error_message: ErrorMessage,
}

impl From<ResponseCode> for ErrorSchema {
    fn from(code: ResponseCode) -> Self {
        Self {
            error_code: code.code().to_string(),
            error_message: code.message(),
        }
    }
}

/// Totals payload; left at its zero value on error responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSchema {
    pub merchant_ids: Option<Vec<String>>,
    pub current_date: String,
    pub today_total_amount: String, // i64 as decimal string
    pub weekly_total_amount: String,
    pub monthly_total_amount: String,
}

impl From<MerchantSummary> for OutputSchema {
    fn from(summary: MerchantSummary) -> Self {
        Self {
            merchant_ids: Some(summary.merchant_ids),
            current_date: format_date(summary.current_date),
            today_total_amount: summary.today_total.to_string(),
            weekly_total_amount: summary.weekly_total.to_string(),
            monthly_total_amount: summary.monthly_total.to_string(),
        }
    }
}

/// Envelope shared by success and error responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub error_schema: ErrorSchema,
    pub output_schema: OutputSchema,
}

impl SummaryResponse {
    pub fn success(summary: MerchantSummary) -> Self {
        Self {
            error_schema: ResponseCode::Success.into(),
            output_schema: summary.into(),
        }
    }

    pub fn error(code: ResponseCode) -> Self {
        Self {
            error_schema: code.into(),
            output_schema: OutputSchema::default(),
        }
    }
}
