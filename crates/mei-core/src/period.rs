//! Calendar-month selection of ledger entries.
//!
//! Entry dates are plain calendar dates; they are compared by year and month only and are
//! never converted between time zones, so an entry always lands in the month it names.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use mei_domain::Transaction;

/// A calendar month of a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthPeriod {
    pub year: i32,
    pub month: u32,
}

impl MonthPeriod {
    /// Returns the month containing `reference`.
    pub fn containing<D: Datelike>(reference: &D) -> Self {
        Self {
            year: reference.year(),
            month: reference.month(),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Returns the entries dated in the same month and year as `reference`, in their original order.
pub fn select_current_month<'a, D: Datelike>(
    transactions: &'a [Transaction],
    reference: &D,
) -> Vec<&'a Transaction> {
    let period = MonthPeriod::containing(reference);
    transactions
        .iter()
        .filter(|txn| period.contains(txn.date))
        .collect()
}
