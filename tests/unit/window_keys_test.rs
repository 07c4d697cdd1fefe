// Property-based tests for summary document key derivation
//
// Uses proptest to check week and month boundaries over a wide date range.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use merchant_summary::summaries::services::key_deriver::{
    daily_key, last_day_of_month, monthly_key, week_bounds, weekly_key,
};
use merchant_summary::summaries::SummaryWindow;
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1970-01-01 through roughly 2100
    (0u64..47_500u64).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap() + Days::new(offset)
    })
}

fn merchant_id() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,11}"
}

proptest! {
    #[test]
    fn test_monday_is_within_six_days_before(date in any_date()) {
        let (monday, _) = week_bounds(date);

        prop_assert_eq!(monday.weekday(), Weekday::Mon);
        prop_assert!(monday <= date);
        prop_assert!((date - monday).num_days() <= 6);
    }

    #[test]
    fn test_friday_is_monday_plus_four(date in any_date()) {
        let (monday, friday) = week_bounds(date);

        prop_assert_eq!(friday.weekday(), Weekday::Fri);
        prop_assert_eq!((friday - monday).num_days(), 4);
    }

    #[test]
    fn test_same_week_same_weekly_key(date in any_date(), mid in merchant_id()) {
        let (monday, _) = week_bounds(date);
        let sunday = monday + Days::new(6);

        prop_assert_eq!(weekly_key(&mid, date), weekly_key(&mid, monday));
        prop_assert_eq!(weekly_key(&mid, date), weekly_key(&mid, sunday));
    }

    #[test]
    fn test_last_day_of_month_is_month_end(date in any_date()) {
        let last = last_day_of_month(date);

        prop_assert_eq!(last.year(), date.year());
        prop_assert_eq!(last.month(), date.month());
        prop_assert!(last >= date);
        let next = last.succ_opt().unwrap();
        prop_assert_eq!(next.day(), 1);
    }

    #[test]
    fn test_keys_embed_merchant_and_window(date in any_date(), mid in merchant_id()) {
        let daily_prefix = format!("{}_daily_", mid);
        let weekly_prefix = format!("{}_weekly_", mid);
        let monthly_prefix = format!("{}_monthly_", mid);

        prop_assert!(daily_key(&mid, date).starts_with(&daily_prefix));
        prop_assert!(weekly_key(&mid, date).starts_with(&weekly_prefix));
        prop_assert!(monthly_key(&mid, date).starts_with(&monthly_prefix));
        prop_assert_eq!(SummaryWindow::Daily.document_key(&mid, date), daily_key(&mid, date));
    }
}

#[test]
fn test_leap_february() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
    assert_eq!(
        last_day_of_month(date),
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    );
    assert_eq!(monthly_key("M1", date), "M1_monthly_2024-02-29");
}

#[test]
fn test_december_wraps_to_next_year() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 10).unwrap();
    assert_eq!(monthly_key("M1", date), "M1_monthly_2024-12-31");
}

#[test]
fn test_wednesday_weekly_key() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(weekly_key("M1", date), "M1_weekly_2025-01-13_2025-01-17");
    assert_eq!(daily_key("M1", date), "M1_daily_2025-01-15");
}
