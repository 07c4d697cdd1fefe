use chrono::{DateTime, FixedOffset, Local, NaiveDate, SecondsFormat};

/// Source of the current time for request handling.
///
/// Handlers read the clock once per request so every window is computed
/// against the same reference date.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the process-local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant, for tests and replays
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Midnight of `date` at UTC+0
    pub fn at_date(date: NaiveDate) -> Self {
        let utc = FixedOffset::east_opt(0).expect("Valid offset");
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .expect("Midnight is always valid")
            .and_local_timezone(utc)
            .single()
            .expect("Fixed offsets are unambiguous");
        Self(midnight)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Format a calendar date as YYYY-MM-DD
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a timestamp as RFC 3339 with whole seconds
pub fn format_rfc3339(time: DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
