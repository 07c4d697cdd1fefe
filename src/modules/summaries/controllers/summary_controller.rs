use std::sync::Arc;

use actix_web::{error::JsonPayloadError, web, HttpRequest, HttpResponse};
use tracing::warn;

use crate::core::error::AppError;
use crate::modules::summaries::models::{SummaryRequest, SummaryResponse};
use crate::modules::summaries::services::SummaryService;

/// Get daily, weekly and monthly totals for a merchant set
/// POST /api/merchant/summary
pub async fn get_merchant_summary(
    service: web::Data<Arc<SummaryService>>,
    request: web::Json<SummaryRequest>,
) -> Result<HttpResponse, AppError> {
    let merchant_ids = request.into_inner().into_merchant_ids();
    let summary = service.summarize(merchant_ids).await?;

    Ok(HttpResponse::Ok().json(SummaryResponse::success(summary)))
}

/// JSON extractor settings: any decode failure becomes an E001 envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(path = %req.path(), error = %err, "Rejected summary request body");
    AppError::invalid_body(err.to_string()).into()
}

/// Configure summary routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/merchant")
            .app_data(json_config())
            .route("/summary", web::post().to(get_merchant_summary)),
    );
}
