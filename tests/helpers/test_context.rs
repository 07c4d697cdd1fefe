// Test Context
//
// Bundles an in-memory store, a fixed reference date and a metrics
// collector, and hands out the `web::Data` values the app expects.
//
// Example:
//   let ctx = TestContext::on(2025, 1, 15);
//   ctx.seed(SummaryWindow::Daily, "M1", 100);
//   let app = test::init_service(
//       App::new()
//           .app_data(ctx.service_data())
//           .app_data(ctx.store_data())
//           .configure(modules::configure),
//   )
//   .await;

use std::sync::Arc;

use actix_web::{test::TestRequest, web};
use chrono::NaiveDate;
use merchant_summary::core::FixedClock;
use merchant_summary::middleware::MetricsCollector;
use merchant_summary::summaries::{
    InMemorySummaryStore, SummaryDocument, SummaryService, SummaryStore, SummaryWindow,
};

pub const SUMMARY_PATH: &str = "/api/merchant/summary";

pub struct TestContext {
    pub store: Arc<InMemorySummaryStore>,
    pub date: NaiveDate,
    pub metrics: MetricsCollector,
}

impl TestContext {
    pub fn on(year: i32, month: u32, day: u32) -> Self {
        Self {
            store: Arc::new(InMemorySummaryStore::new()),
            date: NaiveDate::from_ymd_opt(year, month, day).expect("valid test date"),
            metrics: MetricsCollector::new(),
        }
    }

    /// Store a summary for `merchant_id` under the window's key for the context date
    pub fn seed(&self, window: SummaryWindow, merchant_id: &str, amount: i64) {
        let key = window.document_key(merchant_id, self.date);
        let document = SummaryDocument::new(merchant_id, self.date.to_string(), amount);
        self.store.insert(key, &document).expect("seed document");
    }

    /// Store raw, possibly invalid, JSON under the window's key
    pub fn seed_raw(&self, window: SummaryWindow, merchant_id: &str, raw: &str) {
        let key = window.document_key(merchant_id, self.date);
        self.store.insert_raw(key, raw).expect("seed raw document");
    }

    /// Make the window's key for `merchant_id` fail like an unreachable store
    pub fn break_key(&self, window: SummaryWindow, merchant_id: &str) {
        let key = window.document_key(merchant_id, self.date);
        self.store.fail_key(key, "connection reset").expect("break key");
    }

    pub fn service_data(&self) -> web::Data<Arc<SummaryService>> {
        let store: Arc<dyn SummaryStore> = self.store.clone();
        web::Data::new(Arc::new(SummaryService::new(
            store,
            Arc::new(FixedClock::at_date(self.date)),
        )))
    }

    pub fn store_data(&self) -> web::Data<Arc<dyn SummaryStore>> {
        let store: Arc<dyn SummaryStore> = self.store.clone();
        web::Data::new(store)
    }

    pub fn metrics_data(&self) -> web::Data<MetricsCollector> {
        web::Data::new(self.metrics.clone())
    }
}

/// POST request to the summary endpoint with a JSON body
pub fn summary_request(body: serde_json::Value) -> TestRequest {
    TestRequest::post().uri(SUMMARY_PATH).set_json(body)
}

/// POST request to the summary endpoint with a raw body
pub fn raw_summary_request(body: &'static str) -> TestRequest {
    TestRequest::post()
        .uri(SUMMARY_PATH)
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body)
}
