//! Shared traits and validation errors for ledger primitives.

use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

/// Exposes a stable identifier for entries stored in the ledger.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving monetary amounts.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Reasons an entry is rejected before it reaches the ledger.
pub enum ValidationError {
    BlankDescription,
    MissingValue,
    InvalidValue(String),
    NegativeValue,
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::BlankDescription => f.write_str("description must not be empty"),
            ValidationError::MissingValue => f.write_str("value is required"),
            ValidationError::InvalidValue(raw) => write!(f, "`{raw}` is not a valid amount"),
            ValidationError::NegativeValue => f.write_str("value must not be negative"),
            ValidationError::InvalidDate(raw) => {
                write!(f, "`{raw}` is not a valid date (expected YYYY-MM-DD)")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
