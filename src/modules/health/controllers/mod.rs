pub mod health_controller;
pub mod metrics;

pub use health_controller::{health_check, readiness_check};
pub use metrics::get_metrics;

/// Configure health, readiness and metrics routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health_controller::configure(cfg);
    cfg.route("/metrics", actix_web::web::get().to(get_metrics));
}
