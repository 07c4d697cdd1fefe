pub mod health;
pub mod summaries;

/// Register every HTTP route of the service
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    health::configure(cfg);
    summaries::configure(cfg);
}
