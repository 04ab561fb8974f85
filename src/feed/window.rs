use chrono::{Days, NaiveDate};

/// Days subtracted from today for the first window's start.
const INITIAL_START_OFFSET: u64 = 30;
/// Days subtracted from today for the first window's end.
const INITIAL_END_OFFSET: u64 = 2;
/// Length of every window after the first.
pub const PAGE_SPAN_DAYS: u64 = 28;

/// Inclusive date span requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FeedWindow {
    pub fn initial(today: NaiveDate) -> Self {
        Self {
            start: today - Days::new(INITIAL_START_OFFSET),
            end: today - Days::new(INITIAL_END_OFFSET),
        }
    }

    /// The window immediately before this one: ends the day before `start`
    /// and spans `PAGE_SPAN_DAYS` days.
    pub fn advance(&self) -> Self {
        Self {
            start: self.start - Days::new(PAGE_SPAN_DAYS),
            end: self.start - Days::new(1),
        }
    }

    /// Number of calendar days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Restricts the window to dates the archive holds. Returns `None` when
    /// nothing is left.
    pub fn clamp_to(&self, floor: NaiveDate) -> Option<Self> {
        if self.end < floor {
            return None;
        }
        Some(Self {
            start: self.start.max(floor),
            end: self.end,
        })
    }
}

impl std::fmt::Display for FeedWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}
