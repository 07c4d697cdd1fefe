use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::core::clock::{format_rfc3339, Clock, LocalClock};
use crate::modules::summaries::SummaryStore;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub time: String,
}

/// Readiness probe response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub store: bool,
}

/// GET /health - Liveness probe
/// Does not touch the summary store
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        time: format_rfc3339(LocalClock.now()),
    })
}

/// GET /ready - Readiness probe
/// Returns 503 while the summary store cannot be reached
pub async fn readiness_check(store: web::Data<Arc<dyn SummaryStore>>) -> impl Responder {
    let store_ready = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Summary store readiness check failed: {}", e);
            false
        }
    };

    let response = ReadinessResponse {
        ready: store_ready,
        checks: ReadinessChecks { store: store_ready },
    };

    if response.ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
