pub mod aggregator;
pub mod key_deriver;
pub mod summary_service;

pub use aggregator::WindowAggregator;
pub use summary_service::SummaryService;
