//! Document key derivation for summary lookups.
//!
//! Keys are built from the merchant ID and a calendar date in the
//! process-local timezone:
//! - daily:   `{mid}_daily_{YYYY-MM-DD}`
//! - weekly:  `{mid}_weekly_{monday}_{friday}`
//! - monthly: `{mid}_monthly_{last day of month}`

use chrono::{Datelike, Days, NaiveDate};

use crate::core::clock::format_date;

pub fn daily_key(merchant_id: &str, date: NaiveDate) -> String {
    format!("{}_daily_{}", merchant_id, format_date(date))
}

pub fn weekly_key(merchant_id: &str, date: NaiveDate) -> String {
    let (monday, friday) = week_bounds(date);
    format!(
        "{}_weekly_{}_{}",
        merchant_id,
        format_date(monday),
        format_date(friday)
    )
}

pub fn monthly_key(merchant_id: &str, date: NaiveDate) -> String {
    format!(
        "{}_monthly_{}",
        merchant_id,
        format_date(last_day_of_month(date))
    )
}

/// Monday and Friday of the ISO week containing `date`.
///
/// Sunday belongs to the week that started six days earlier.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_since_monday = u64::from(date.weekday().num_days_from_monday());
    let monday = date - Days::new(days_since_monday);
    let friday = monday + Days::new(4);
    (monday, friday)
}

/// Last calendar day of `date`'s month, taken as the day before the first of
/// the next month.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    let first_of_next = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX);
    first_of_next.pred_opt().unwrap_or(first_of_next)
}
