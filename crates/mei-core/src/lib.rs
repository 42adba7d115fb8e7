//! mei-core
//!
//! Ledger state and the rules computed over it: entry store, month selection and
//! monthly totals. Depends on mei-domain. No presentation, no concrete storage medium.

pub mod entry_store;
pub mod error;
pub mod period;
pub mod storage;
pub mod summary;
pub mod time;

#[cfg(test)]
mod tests;

pub use entry_store::{EntryStore, LoadReport};
pub use error::CoreError;
pub use period::{select_current_month, MonthPeriod};
pub use storage::{KeyValueStorage, MemoryStorage, StorageKey};
pub use summary::{summarize, MonthlySummary, Outcome};
pub use time::{Clock, FixedClock};
