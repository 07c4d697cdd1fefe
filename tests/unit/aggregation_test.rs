// Property-based tests for window aggregation
//
// Random merchant sets, each with an optional document, checked against a
// plain sum over the merchants that have one.

use std::sync::Arc;

use chrono::NaiveDate;
use merchant_summary::summaries::services::WindowAggregator;
use merchant_summary::summaries::{InMemorySummaryStore, SummaryDocument, SummaryWindow};
use proptest::prelude::*;

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("test runtime")
        .block_on(future)
}

/// Merchants `M0..Mn`, each with `Some(amount)` when a document exists
fn merchants() -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::of(-1_000_000i64..1_000_000_000i64), 0..24)
}

fn seeded_store(window: SummaryWindow, amounts: &[Option<i64>]) -> Arc<InMemorySummaryStore> {
    let store = Arc::new(InMemorySummaryStore::new());
    for (i, amount) in amounts.iter().enumerate() {
        if let Some(amount) = amount {
            let mid = format!("M{}", i);
            let key = window.document_key(&mid, reference_date());
            store
                .insert(key, &SummaryDocument::new(mid, "2025-01-15", *amount))
                .unwrap();
        }
    }
    store
}

fn window() -> impl Strategy<Value = SummaryWindow> {
    prop_oneof![
        Just(SummaryWindow::Daily),
        Just(SummaryWindow::Weekly),
        Just(SummaryWindow::Monthly),
    ]
}

proptest! {
    #[test]
    fn test_total_is_sum_of_existing_documents(
        amounts in merchants(),
        window in window(),
        concurrency in 1usize..6,
    ) {
        let store = seeded_store(window, &amounts);
        let merchant_ids: Vec<String> = (0..amounts.len()).map(|i| format!("M{}", i)).collect();
        let expected: i64 = amounts.iter().flatten().sum();

        let aggregator = WindowAggregator::with_concurrency(store, concurrency);
        let total = block_on(aggregator.aggregate(window, &merchant_ids, reference_date())).unwrap();

        prop_assert_eq!(total, expected);
    }

    #[test]
    fn test_order_does_not_change_total(
        amounts in merchants(),
        window in window(),
    ) {
        let store = seeded_store(window, &amounts);
        let merchant_ids: Vec<String> = (0..amounts.len()).map(|i| format!("M{}", i)).collect();
        let mut reversed = merchant_ids.clone();
        reversed.reverse();

        let aggregator = WindowAggregator::new(store);
        let forward = block_on(aggregator.aggregate(window, &merchant_ids, reference_date())).unwrap();
        let backward = block_on(aggregator.aggregate(window, &reversed, reference_date())).unwrap();

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_no_documents_means_zero(count in 0usize..32, window in window()) {
        let store = Arc::new(InMemorySummaryStore::new());
        let merchant_ids: Vec<String> = (0..count).map(|i| format!("M{}", i)).collect();

        let aggregator = WindowAggregator::new(store);
        let total = block_on(aggregator.aggregate(window, &merchant_ids, reference_date()));

        prop_assert_eq!(total.unwrap(), 0);
    }
}

#[test]
fn test_documents_of_other_windows_are_ignored() {
    let store = seeded_store(SummaryWindow::Weekly, &[Some(500)]);
    let aggregator = WindowAggregator::new(store);
    let merchant_ids = vec!["M0".to_string()];

    let daily = block_on(aggregator.aggregate(SummaryWindow::Daily, &merchant_ids, reference_date()));
    let weekly = block_on(aggregator.aggregate(SummaryWindow::Weekly, &merchant_ids, reference_date()));

    assert_eq!(daily.unwrap(), 0);
    assert_eq!(weekly.unwrap(), 500);
}

#[test]
fn test_failure_after_found_documents_discards_partial_total() {
    let store = seeded_store(SummaryWindow::Daily, &[Some(10), Some(20)]);
    store
        .fail_key(SummaryWindow::Daily.document_key("M2", reference_date()), "timeout")
        .unwrap();
    let aggregator = WindowAggregator::with_concurrency(store, 3);
    let merchant_ids: Vec<String> = (0..3).map(|i| format!("M{}", i)).collect();

    let result = block_on(aggregator.aggregate(SummaryWindow::Daily, &merchant_ids, reference_date()));
    assert!(result.is_err());
}
