#![doc(test(attr(deny(warnings))))]

//! MEI Rapidix keeps the monthly books of a Brazilian micro-entrepreneur: income and
//! expense entries, the DAS tax paid and company identity data, summarized into the
//! current month's profit or loss.

pub mod app;
pub mod currency;
pub mod errors;
pub mod links;
pub mod report;
pub mod system_clock;
pub mod utils;

pub use app::{App, Dashboard};
pub use errors::AppError;
pub use mei_config::{Config, ConfigManager};
pub use mei_core::{EntryStore, MonthPeriod, MonthlySummary};
pub use mei_domain::{CompanyInfo, Transaction, TransactionDraft, TransactionKind};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("MEI Rapidix tracing initialized.");
    });
}
