//! Owner of the ledger state: income and expense collections, tax paid and company info.
//!
//! Every mutation updates memory first and then writes only the slice it touched. Storage
//! failures are logged and never roll back the in-memory state, which stays authoritative
//! for the rest of the session.

use std::str::FromStr;

use chrono::Datelike;
use mei_domain::{
    non_negative_or_zero, parse_amount, CompanyInfo, Identifiable, StoredTransaction, Transaction,
    TransactionDraft, TransactionKind,
};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::{
    period::select_current_month,
    storage::{collection_warnings, KeyValueStorage, StorageKey},
    summary::{summarize, MonthlySummary},
    CoreError,
};

/// Outcome of rehydrating the store from storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Slices that were present and parsed.
    pub restored: Vec<StorageKey>,
    /// Slices that fell back to their default because they were corrupt or unreadable.
    pub reset: Vec<StorageKey>,
    pub warnings: Vec<String>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.reset.is_empty() && self.warnings.is_empty()
    }
}

/// Facade that coordinates ledger state and its persistence.
pub struct EntryStore {
    incomes: Vec<Transaction>,
    expenses: Vec<Transaction>,
    tax_paid: Decimal,
    company_info: CompanyInfo,
    storage: Box<dyn KeyValueStorage>,
}

impl EntryStore {
    /// Creates an empty store without reading `storage`.
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            tax_paid: Decimal::ZERO,
            company_info: CompanyInfo::default(),
            storage,
        }
    }

    /// Creates a store and hydrates it from `storage`.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> (Self, LoadReport) {
        let mut store = Self::new(storage);
        let report = store.reload();
        (store, report)
    }

    /// Replaces the in-memory state with what storage holds, slice by slice.
    pub fn reload(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        self.incomes = self.load_collection(TransactionKind::Income, &mut report);
        self.expenses = self.load_collection(TransactionKind::Expense, &mut report);
        self.tax_paid = self
            .load_slice(StorageKey::TaxPaid, &mut report, parse_stored_tax_paid)
            .map(|amount| {
                if amount < Decimal::ZERO {
                    report
                        .warnings
                        .push(format!("stored tax paid {amount} is negative; using 0"));
                }
                non_negative_or_zero(amount)
            })
            .unwrap_or(Decimal::ZERO);
        self.company_info = self
            .load_slice(StorageKey::CompanyInfo, &mut report, |raw| {
                serde_json::from_str::<CompanyInfo>(raw).map_err(CoreError::from)
            })
            .unwrap_or_default();

        report
            .warnings
            .extend(collection_warnings(TransactionKind::Income, &self.incomes));
        report
            .warnings
            .extend(collection_warnings(TransactionKind::Expense, &self.expenses));
        for warning in &report.warnings {
            tracing::warn!(%warning, "ledger data warning");
        }
        tracing::info!(
            incomes = self.incomes.len(),
            expenses = self.expenses.len(),
            reset = report.reset.len(),
            "ledger state loaded"
        );
        report
    }

    /// Restores one collection, mapping legacy identifiers and applying the category rule of `kind`.
    fn load_collection(&self, kind: TransactionKind, report: &mut LoadReport) -> Vec<Transaction> {
        let key = StorageKey::for_kind(kind);
        let stored = self
            .load_slice(key, report, |raw| {
                serde_json::from_str::<Vec<StoredTransaction>>(raw).map_err(CoreError::from)
            })
            .unwrap_or_default();
        let legacy = stored.iter().filter(|entry| entry.has_legacy_id()).count();
        if legacy > 0 {
            report.warnings.push(format!(
                "{legacy} entries in {key} had legacy ids and were given stable identifiers"
            ));
        }
        stored
            .into_iter()
            .map(|entry| entry.into_transaction(kind))
            .collect()
    }

    fn load_slice<T, F>(&self, key: StorageKey, report: &mut LoadReport, parse: F) -> Option<T>
    where
        F: FnOnce(&str) -> Result<T, CoreError>,
    {
        let raw = match self.storage.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "failed to read ledger slice");
                report.reset.push(key);
                report.warnings.push(format!("could not read {key}: {err}"));
                return None;
            }
        };
        match parse(&raw) {
            Ok(value) => {
                report.restored.push(key);
                Some(value)
            }
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "discarding corrupt ledger slice");
                report.reset.push(key);
                report.warnings.push(format!("{key} was corrupt and has been reset: {err}"));
                None
            }
        }
    }

    pub fn transactions(&self, kind: TransactionKind) -> &[Transaction] {
        match kind {
            TransactionKind::Income => &self.incomes,
            TransactionKind::Expense => &self.expenses,
        }
    }

    pub fn incomes(&self) -> &[Transaction] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    pub fn transaction(&self, kind: TransactionKind, id: Uuid) -> Option<&Transaction> {
        self.transactions(kind).iter().find(|txn| txn.id() == id)
    }

    pub fn tax_paid(&self) -> Decimal {
        self.tax_paid
    }

    pub fn company_info(&self) -> &CompanyInfo {
        &self.company_info
    }

    /// Validates `draft`, appends it with a fresh identifier and returns that identifier.
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        draft: TransactionDraft,
    ) -> Result<Uuid, CoreError> {
        let mut transaction = Transaction::from_draft(kind, draft)?;
        while self.transaction(kind, transaction.id).is_some() {
            transaction.id = Uuid::new_v4();
        }
        let id = transaction.id;
        self.collection_mut(kind).push(transaction);
        tracing::debug!(%kind, %id, "transaction added");
        self.persist_collection(kind);
        Ok(id)
    }

    /// Replaces the entry sharing `updated.id`. Returns `false` without touching anything when
    /// no such entry exists.
    pub fn edit_transaction(
        &mut self,
        kind: TransactionKind,
        updated: Transaction,
    ) -> Result<bool, CoreError> {
        updated.validate()?;
        let updated = updated.normalized_for(kind);
        let mut replaced = false;
        for txn in self
            .collection_mut(kind)
            .iter_mut()
            .filter(|txn| txn.id == updated.id)
        {
            *txn = updated.clone();
            replaced = true;
        }
        if replaced {
            tracing::debug!(%kind, id = %updated.id, "transaction updated");
            self.persist_collection(kind);
        } else {
            tracing::debug!(%kind, id = %updated.id, "edit ignored for unknown transaction");
        }
        Ok(replaced)
    }

    /// Removes the entry with `id`, returning it. Unknown identifiers are ignored.
    pub fn delete_transaction(&mut self, kind: TransactionKind, id: Uuid) -> Option<Transaction> {
        let collection = self.collection_mut(kind);
        let position = collection.iter().position(|txn| txn.id == id)?;
        let removed = collection.remove(position);
        collection.retain(|txn| txn.id != id);
        tracing::debug!(%kind, %id, "transaction deleted");
        self.persist_collection(kind);
        Some(removed)
    }

    pub fn save_company_info(&mut self, info: CompanyInfo) {
        self.company_info = info;
        tracing::debug!("company info saved");
        match serde_json::to_string(&self.company_info) {
            Ok(json) => self.persist(StorageKey::CompanyInfo, &json),
            Err(err) => tracing::warn!(error = %err, "failed to serialize company info"),
        }
    }

    /// Stores the tax paid, coercing negative amounts to zero. Returns the stored amount.
    pub fn set_tax_paid(&mut self, amount: Decimal) -> Decimal {
        self.tax_paid = non_negative_or_zero(amount);
        tracing::debug!(tax_paid = %self.tax_paid, "tax paid updated");
        self.persist(StorageKey::TaxPaid, &self.tax_paid.to_string());
        self.tax_paid
    }

    /// Same as [`EntryStore::set_tax_paid`] for raw text; anything that is not a number counts as zero.
    pub fn set_tax_paid_input(&mut self, raw: &str) -> Decimal {
        let amount = parse_amount(raw).unwrap_or(Decimal::ZERO);
        self.set_tax_paid(amount)
    }

    /// Entries of `kind` dated in the month of `reference`.
    pub fn current_month<D: Datelike>(
        &self,
        kind: TransactionKind,
        reference: &D,
    ) -> Vec<&Transaction> {
        select_current_month(self.transactions(kind), reference)
    }

    /// Totals for the month of `reference`, net of the tax paid.
    pub fn monthly_summary<D: Datelike>(&self, reference: &D) -> MonthlySummary {
        summarize(
            self.current_month(TransactionKind::Income, reference),
            self.current_month(TransactionKind::Expense, reference),
            self.tax_paid,
        )
    }

    fn collection_mut(&mut self, kind: TransactionKind) -> &mut Vec<Transaction> {
        match kind {
            TransactionKind::Income => &mut self.incomes,
            TransactionKind::Expense => &mut self.expenses,
        }
    }

    fn persist_collection(&self, kind: TransactionKind) {
        let key = StorageKey::for_kind(kind);
        match serde_json::to_string(self.transactions(kind)) {
            Ok(json) => self.persist(key, &json),
            Err(err) => tracing::warn!(key = %key, error = %err, "failed to serialize collection"),
        }
    }

    fn persist(&self, key: StorageKey, value: &str) {
        if let Err(err) = self.storage.set(key.as_str(), value) {
            tracing::warn!(key = %key, error = %err, "failed to persist ledger slice");
        }
    }
}

fn parse_stored_tax_paid(raw: &str) -> Result<Decimal, CoreError> {
    let text = match serde_json::from_str::<Value>(raw) {
        Ok(Value::String(text)) => text,
        Ok(Value::Number(number)) => number.to_string(),
        _ => raw.trim().to_string(),
    };
    Decimal::from_str(text.trim())
        .map_err(|err| CoreError::Serde(format!("invalid tax paid `{}`: {err}", raw.trim())))
}
