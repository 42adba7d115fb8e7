use chrono::{Local, NaiveDate};

use mei_core::Clock;

/// Real-time clock backed by the system local time, so "this month" follows the user's calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
