use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::modules::summaries::models::{ResponseCode, SummaryResponse, SummaryWindow};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    /// Validation errors for request fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Document store query errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored document could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A window total could not be computed
    #[error("Failed to calculate {window} total: {source}")]
    Aggregation {
        window: SummaryWindow,
        #[source]
        source: Box<AppError>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        AppError::InvalidRequestBody(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn aggregation(window: SummaryWindow, source: AppError) -> Self {
        AppError::Aggregation {
            window,
            source: Box::new(source),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Envelope code reported to the client for this error
    pub fn response_code(&self) -> ResponseCode {
        match self {
            AppError::InvalidRequestBody(_) => ResponseCode::InvalidRequestBody,
            AppError::Validation(_) => ResponseCode::MerchantIdsRequired,
            AppError::Aggregation { window, .. } => ResponseCode::for_window_failure(*window),
            AppError::Database(_)
            | AppError::Json(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => ResponseCode::InternalError,
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SummaryResponse::error(self.response_code()))
    }

    fn status_code(&self) -> StatusCode {
        self.response_code().status_code()
    }
}
