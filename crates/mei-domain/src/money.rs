//! Parsing of user-entered money amounts.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::common::ValidationError;

/// Parses a money amount typed by a user.
///
/// Accepts a dot or a comma as decimal separator. When both appear, the last one
/// is the decimal separator and the other is treated as digit grouping, so
/// `1.500,50` and `1,500.50` both parse to `1500.50`.
pub fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingValue);
    }
    let normalized = normalize_separators(trimmed);
    Decimal::from_str(&normalized).map_err(|_| ValidationError::InvalidValue(trimmed.to_string()))
}

/// Like [`parse_amount`] but rejects negative amounts.
pub fn parse_non_negative_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount = parse_amount(raw)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeValue);
    }
    Ok(amount)
}

/// Clamps an amount to zero when it is negative.
pub fn non_negative_or_zero(amount: Decimal) -> Decimal {
    if amount < Decimal::ZERO {
        Decimal::ZERO
    } else {
        amount
    }
}

fn normalize_separators(raw: &str) -> String {
    let last_dot = raw.rfind('.');
    let last_comma = raw.rfind(',');
    let (grouping, decimal) = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) if comma > dot => ('.', Some(',')),
        (Some(_), Some(_)) => (',', Some('.')),
        (None, Some(_)) => ('.', Some(',')),
        _ => (',', None),
    };
    raw.chars()
        .filter(|c| *c != grouping && !c.is_whitespace())
        .map(|c| if Some(c) == decimal { '.' } else { c })
        .collect()
}
