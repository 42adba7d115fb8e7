//! Application facade wiring configuration, storage, the entry store and the clock.

use mei_config::Config;
use mei_core::{Clock, EntryStore, KeyValueStorage, LoadReport, MonthPeriod, MonthlySummary};
use mei_domain::{CompanyInfo, Transaction, TransactionDraft, TransactionKind};
use mei_storage_json::JsonFileStorage;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    currency::{month_label, CurrencyStyle},
    links::{LinkOpener, SystemLinkOpener, TaxPortalLink},
    system_clock::SystemClock,
    AppError,
};

const LEDGER_DIR: &str = "ledger";

/// Everything the main screen shows for the current month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub month: MonthPeriod,
    pub month_label: String,
    pub incomes: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
    pub summary: MonthlySummary,
    pub company: CompanyInfo,
}

pub struct App {
    config: Config,
    store: EntryStore,
    clock: Box<dyn Clock>,
    opener: Box<dyn LinkOpener>,
    load_report: LoadReport,
}

impl App {
    /// Opens the ledger under `<data dir>/ledger` with the system clock and browser.
    pub fn open(config: Config) -> Result<Self, AppError> {
        let root = config.resolve_data_dir().join(LEDGER_DIR);
        let storage = JsonFileStorage::new(root)?;
        tracing::info!(root = %storage.root().display(), "opening ledger");
        Ok(Self::with_parts(
            config,
            Box::new(storage),
            Box::new(SystemClock),
            Box::new(SystemLinkOpener),
        ))
    }

    pub fn with_parts(
        config: Config,
        storage: Box<dyn KeyValueStorage>,
        clock: Box<dyn Clock>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let (store, load_report) = EntryStore::open(storage);
        Self {
            config,
            store,
            clock,
            opener,
            load_report,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn currency_style(&self) -> CurrencyStyle {
        CurrencyStyle::for_config(&self.config)
    }

    pub fn current_period(&self) -> MonthPeriod {
        MonthPeriod::containing(&self.clock.today())
    }

    /// Adds an entry; expenses without a category get the configured default.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        mut draft: TransactionDraft,
    ) -> Result<Uuid, AppError> {
        if kind.has_category() {
            draft.category = Some(self.category_or_default(draft.category.as_deref()));
        }
        Ok(self.store.add_transaction(kind, draft)?)
    }

    pub fn edit_transaction(
        &mut self,
        kind: TransactionKind,
        mut updated: Transaction,
    ) -> Result<bool, AppError> {
        if kind.has_category() {
            updated.category = Some(self.category_or_default(updated.category.as_deref()));
        }
        Ok(self.store.edit_transaction(kind, updated)?)
    }

    pub fn delete_transaction(&mut self, kind: TransactionKind, id: Uuid) -> Option<Transaction> {
        self.store.delete_transaction(kind, id)
    }

    pub fn save_company_info(&mut self, info: CompanyInfo) {
        self.store.save_company_info(info);
    }

    pub fn set_tax_paid(&mut self, amount: Decimal) -> Decimal {
        self.store.set_tax_paid(amount)
    }

    pub fn set_tax_paid_input(&mut self, raw: &str) -> Decimal {
        self.store.set_tax_paid_input(raw)
    }

    pub fn dashboard(&self) -> Dashboard {
        let today = self.clock.today();
        let month = MonthPeriod::containing(&today);
        Dashboard {
            month,
            month_label: month_label(month, self.config.is_portuguese()),
            incomes: self
                .store
                .current_month(TransactionKind::Income, &today)
                .into_iter()
                .cloned()
                .collect(),
            expenses: self
                .store
                .current_month(TransactionKind::Expense, &today)
                .into_iter()
                .cloned()
                .collect(),
            summary: self.store.monthly_summary(&today),
            company: self.store.company_info().clone(),
        }
    }

    /// Opens a tax portal. Failures are logged; the ledger is unaffected either way.
    pub fn open_tax_portal(&self, link: TaxPortalLink) {
        match self.opener.open(link.url()) {
            Ok(()) => tracing::info!(%link, "tax portal opened"),
            Err(err) => tracing::warn!(%link, error = %err, "failed to open tax portal"),
        }
    }

    fn category_or_default(&self, category: Option<&str>) -> String {
        match category.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => value.to_string(),
            None => self.config.default_expense_category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;
    use mei_core::{FixedClock, MemoryStorage};

    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
        fail: bool,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), AppError> {
            self.opened.lock().unwrap().push(url.to_string());
            if self.fail {
                Err(AppError::Launch {
                    url: url.to_string(),
                    reason: "no browser".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app_on(today: NaiveDate, opener: RecordingOpener) -> App {
        App::with_parts(
            Config::default(),
            Box::new(MemoryStorage::new()),
            Box::new(FixedClock(today)),
            Box::new(opener),
        )
    }

    #[test]
    fn blank_expense_category_uses_configured_default() {
        let mut app = app_on(date(2024, 2, 10), RecordingOpener::default());
        let id = app
            .add_transaction(
                TransactionKind::Expense,
                TransactionDraft::new(date(2024, 2, 1), "Pens", Decimal::TEN).with_category("  "),
            )
            .unwrap();
        let stored = app.store().transaction(TransactionKind::Expense, id).unwrap();
        assert_eq!(stored.category.as_deref(), Some("General"));
    }

    #[test]
    fn dashboard_only_shows_the_clock_month() {
        let mut app = app_on(date(2026, 10, 16), RecordingOpener::default());
        app.add_transaction(
            TransactionKind::Income,
            TransactionDraft::new(date(2026, 10, 1), "Sale", Decimal::new(500, 0)),
        )
        .unwrap();
        app.add_transaction(
            TransactionKind::Income,
            TransactionDraft::new(date(2026, 9, 30), "Old sale", Decimal::new(900, 0)),
        )
        .unwrap();

        let dashboard = app.dashboard();
        assert_eq!(dashboard.month_label, "Outubro 2026");
        assert_eq!(dashboard.incomes.len(), 1);
        assert_eq!(dashboard.summary.total_income, Decimal::new(500, 0));
        assert_eq!(dashboard.summary.profit, Decimal::new(500, 0));
    }

    #[test]
    fn failing_link_opener_is_not_fatal() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let app = app_on(
            date(2024, 2, 1),
            RecordingOpener {
                opened: Arc::clone(&opened),
                fail: true,
            },
        );
        app.open_tax_portal(TaxPortalLink::AnnualDeclaration);
        assert_eq!(
            opened.lock().unwrap().as_slice(),
            [TaxPortalLink::AnnualDeclaration.url().to_string()]
        );
    }
}
