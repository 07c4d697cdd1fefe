pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use controllers::configure;
pub use models::{MerchantSummary, SummaryDocument, SummaryResponse, SummaryWindow};
pub use repositories::{InMemorySummaryStore, MySqlSummaryStore, SummaryStore};
pub use services::SummaryService;
