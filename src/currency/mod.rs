//! Money and calendar formatting for presentation.

use chrono::NaiveDate;
use mei_config::Config;
use mei_core::MonthPeriod;
use rust_decimal::{Decimal, RoundingStrategy};

/// Locale-aware number and symbol settings used when rendering amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub symbol: String,
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub precision: u32,
}

impl CurrencyStyle {
    /// Brazilian real in the `pt-BR` convention: `R$ 1.234,56`.
    pub fn brl() -> Self {
        Self {
            symbol: symbol_for("BRL"),
            decimal_separator: ',',
            grouping_separator: '.',
            precision: minor_units_for("BRL"),
        }
    }

    pub fn for_config(config: &Config) -> Self {
        let code = config.currency.trim().to_ascii_uppercase();
        let (decimal_separator, grouping_separator) = if config.is_portuguese() {
            (',', '.')
        } else {
            ('.', ',')
        };
        Self {
            symbol: symbol_for(&code),
            decimal_separator,
            grouping_separator,
            precision: minor_units_for(&code),
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::brl()
    }
}

pub fn symbol_for(code: &str) -> String {
    match code {
        "BRL" => "R$".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> u32 {
    match code {
        "JPY" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Formats `amount` as `-R$ 1.234,56`, rounding half away from zero to the style precision.
pub fn format_amount(amount: Decimal, style: &CurrencyStyle) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(style.precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(style.precision);
    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits.as_str(), None),
    };
    let mut body = group_digits(int_part, style.grouping_separator);
    if let Some(frac) = frac_part {
        body.push(style.decimal_separator);
        body.push_str(frac);
    }
    let sign = if negative { "-" } else { "" };
    format!("{sign}{} {body}", style.symbol)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

/// Header label of a month, e.g. `Outubro 2026` or `October 2026`.
pub fn month_label(period: MonthPeriod, portuguese: bool) -> String {
    let names = if portuguese {
        &PORTUGUESE_MONTHS
    } else {
        &ENGLISH_MONTHS
    };
    let index = period.month.clamp(1, 12) as usize - 1;
    format!("{} {}", names[index], period.year)
}

/// Formats an entry date: `31/01/2024` in Portuguese, ISO otherwise.
pub fn format_date(date: NaiveDate, portuguese: bool) -> String {
    if portuguese {
        date.format("%d/%m/%Y").to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}

const PORTUGUESE_MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
