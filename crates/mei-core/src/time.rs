use chrono::NaiveDate;

/// Clock abstracts access to the current date so month selection stays deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current calendar date in the observer's local time zone.
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
