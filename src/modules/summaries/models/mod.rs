pub mod merchant_summary;
pub mod summary_document;
pub mod summary_response;
pub mod summary_window;

pub use merchant_summary::{MerchantSummary, SummaryRequest};
pub use summary_document::SummaryDocument;
pub use summary_response::{ErrorMessage, ErrorSchema, OutputSchema, ResponseCode, SummaryResponse};
pub use summary_window::SummaryWindow;
