mod summary_controller;

pub use summary_controller::{get_merchant_summary, json_config};

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    summary_controller::configure(cfg);
}
