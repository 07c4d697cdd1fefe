pub mod summary_repository;

pub use summary_repository::{InMemorySummaryStore, MySqlSummaryStore, SummaryStore};
