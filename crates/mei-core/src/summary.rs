//! Monthly profit and loss totals.

use std::fmt;

use mei_domain::{Amounted, Transaction};
use rust_decimal::Decimal;

/// Totals of one month of activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub tax_paid: Decimal,
    pub profit: Decimal,
}

impl MonthlySummary {
    pub fn outcome(&self) -> Outcome {
        if self.profit < Decimal::ZERO {
            Outcome::Loss
        } else {
            Outcome::Profit
        }
    }

    pub fn is_loss(&self) -> bool {
        self.outcome() == Outcome::Loss
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Whether the month closed positive (zero counts as profit) or negative.
pub enum Outcome {
    Profit,
    Loss,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
        };
        f.write_str(label)
    }
}

/// Sums entry amounts exactly, saturating at the `Decimal` bounds.
pub fn total<'a, T, I>(entries: I) -> Decimal
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entries
        .into_iter()
        .fold(Decimal::ZERO, |sum, entry| sum.saturating_add(entry.amount()))
}

/// Computes income, expense and profit totals; profit is income minus expenses minus tax paid.
pub fn summarize<'a, I, E>(incomes: I, expenses: E, tax_paid: Decimal) -> MonthlySummary
where
    I: IntoIterator<Item = &'a Transaction>,
    E: IntoIterator<Item = &'a Transaction>,
{
    let total_income = total(incomes);
    let total_expenses = total(expenses);
    MonthlySummary {
        total_income,
        total_expenses,
        tax_paid,
        profit: total_income
            .saturating_sub(total_expenses)
            .saturating_sub(tax_paid),
    }
}
