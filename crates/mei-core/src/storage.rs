use std::{
    collections::{HashMap, HashSet},
    fmt,
    sync::{Arc, Mutex},
};

use mei_domain::{Transaction, TransactionKind};
use rust_decimal::Decimal;

use crate::CoreError;

/// Abstraction over the key-value medium that holds the persisted ledger slices.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value for `key`, or `None` when nothing was saved yet.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        (**self).set(key, value)
    }
}

/// Keys of the four independently persisted slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Incomes,
    Expenses,
    TaxPaid,
    CompanyInfo,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::Incomes,
        StorageKey::Expenses,
        StorageKey::TaxPaid,
        StorageKey::CompanyInfo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Incomes => "mei-incomes",
            StorageKey::Expenses => "mei-expenses",
            StorageKey::TaxPaid => "mei-das-paid",
            StorageKey::CompanyInfo => "mei-company-info",
        }
    }

    pub fn for_kind(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Income => StorageKey::Incomes,
            TransactionKind::Expense => StorageKey::Expenses,
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Volatile storage backed by a map. Useful for tests and for sessions without a data directory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a raw value, bypassing serialization.
    pub fn with_entry(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.into(), value.into());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory storage lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Detects duplicate identifiers and broken invariants within a restored collection.
pub fn collection_warnings(kind: TransactionKind, transactions: &[Transaction]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for txn in transactions {
        if !seen.insert(txn.id) {
            warnings.push(format!("{kind} {} appears more than once", txn.id));
        }
        if txn.description.trim().is_empty() {
            warnings.push(format!("{kind} {} has an empty description", txn.id));
        }
        if txn.value < Decimal::ZERO {
            warnings.push(format!("{kind} {} has a negative value {}", txn.id, txn.value));
        }
    }
    warnings
}
