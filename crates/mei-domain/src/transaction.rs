//! Domain models for income and expense entries.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{category::normalize_category, common::*, money::parse_non_negative_amount};

/// Wire format for entry dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Selects which of the two ledger collections an entry belongs to.
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn has_category(self) -> bool {
        matches!(self, TransactionKind::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// A dated, valued ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub value: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Transaction {
    /// Builds a new entry with a fresh identifier from validated draft data.
    pub fn from_draft(kind: TransactionKind, draft: TransactionDraft) -> Result<Self, ValidationError> {
        draft.validate()?;
        let transaction = Self {
            id: Uuid::new_v4(),
            date: draft.date,
            description: draft.description,
            value: draft.value,
            category: draft.category,
        };
        Ok(transaction.normalized_for(kind))
    }

    /// Checks the entry invariants: non-empty description and non-negative value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(&self.description, self.value)
    }

    /// Trims the description and applies the category rule for `kind`.
    pub fn normalized_for(mut self, kind: TransactionKind) -> Self {
        self.description = self.description.trim().to_string();
        self.category = if kind.has_category() {
            Some(normalize_category(self.category.as_deref()))
        } else {
            None
        };
        self
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Decimal {
        self.value
    }
}

/// Entry identifier as found in stored data. Older ledgers keyed entries by millisecond
/// timestamps or free text instead of UUIDs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StoredId {
    Uuid(Uuid),
    Number(u64),
    Float(f64),
    Text(String),
}

impl StoredId {
    pub fn is_legacy(&self) -> bool {
        !matches!(self, StoredId::Uuid(_))
    }

    /// Maps the identifier to a UUID. Legacy identifiers map to the same UUID on every load.
    pub fn resolve(&self) -> Uuid {
        let legacy = match self {
            StoredId::Uuid(id) => return *id,
            StoredId::Number(number) => number.to_string(),
            StoredId::Float(number) => number.to_string(),
            StoredId::Text(text) => text.trim().to_string(),
        };
        Uuid::new_v5(&Uuid::NAMESPACE_OID, legacy.as_bytes())
    }
}

/// Ledger entry as read back from storage, before identifiers and categories are normalized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredTransaction {
    pub id: StoredId,
    pub date: NaiveDate,
    pub description: String,
    pub value: Decimal,
    #[serde(default)]
    pub category: Option<String>,
}

impl StoredTransaction {
    pub fn has_legacy_id(&self) -> bool {
        self.id.is_legacy()
    }

    pub fn into_transaction(self, kind: TransactionKind) -> Transaction {
        Transaction {
            id: self.id.resolve(),
            date: self.date,
            description: self.description,
            value: self.value,
            category: self.category,
        }
        .normalized_for(kind)
    }
}

/// User-supplied data for a new entry, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub description: String,
    pub value: Decimal,
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new(date: NaiveDate, description: impl Into<String>, value: Decimal) -> Self {
        Self {
            date,
            description: description.into(),
            value,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parses raw form fields (`YYYY-MM-DD` date, free-text amount).
    pub fn from_form(
        date: &str,
        description: &str,
        value: &str,
        category: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::BlankDescription);
        }
        let value = parse_non_negative_amount(value)?;
        let date = parse_date(date)?;
        Ok(Self {
            date,
            description: description.to_string(),
            value,
            category: category.map(str::to_string),
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_fields(&self.description, self.value)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}

fn check_fields(description: &str, value: Decimal) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::BlankDescription);
    }
    if value < Decimal::ZERO {
        return Err(ValidationError::NegativeValue);
    }
    Ok(())
}
