use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time, swappable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date in UTC, which is how the provider dates its entries.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
struct FixedClock(DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[cfg(test)]
pub fn fixed_clock(timestamp: i64) -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        DateTime::from_timestamp(timestamp, 0).unwrap_or_default(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_utc_date() {
        // 2024-06-01 23:30:00 UTC
        let clock = fixed_clock(1717284600);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn system_clock_is_recent() {
        let clock = system_clock();
        assert!(clock.today() > NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
