pub mod metrics;
pub mod request_id;

pub use metrics::{Metrics, MetricsCollector, MetricsMiddleware};
pub use request_id::{RequestId, RequestIdValue};
