//! Text rendering of the monthly dashboard.

use std::fmt::Write as _;

use colored::Colorize;
use mei_config::Config;
use mei_core::Outcome;
use mei_domain::{CompanyInfo, Transaction};

use crate::{
    app::Dashboard,
    currency::{format_amount, format_date, CurrencyStyle},
};

pub const TITLE: &str = "MEI-RAPIDIX";

/// Language and styling choices for a rendered report.
#[derive(Debug, Clone)]
pub struct ReportStyle {
    pub portuguese: bool,
    pub color: bool,
    pub currency: CurrencyStyle,
}

impl ReportStyle {
    /// Follows the configured locale and currency; color needs both the config flag and `allow_color`.
    pub fn for_config(config: &Config, allow_color: bool) -> Self {
        Self {
            portuguese: config.is_portuguese(),
            color: config.ui_color_enabled && allow_color,
            currency: CurrencyStyle::for_config(config),
        }
    }

    pub fn plain(portuguese: bool, currency: CurrencyStyle) -> Self {
        Self {
            portuguese,
            color: false,
            currency,
        }
    }
}

struct Labels {
    company: &'static str,
    name: &'static str,
    tax_id: &'static str,
    address: &'static str,
    not_provided: &'static str,
    incomes: &'static str,
    expenses: &'static str,
    empty: &'static str,
    tax_paid: &'static str,
    profit: &'static str,
    loss: &'static str,
    income_term: &'static str,
    expense_term: &'static str,
}

const PT_LABELS: Labels = Labels {
    company: "Empresa",
    name: "Nome",
    tax_id: "CNPJ",
    address: "Endereço",
    not_provided: "Não informado",
    incomes: "Receitas",
    expenses: "Despesas",
    empty: "Nenhum lançamento neste mês",
    tax_paid: "DAS pago",
    profit: "Lucro",
    loss: "Prejuízo",
    income_term: "Receitas",
    expense_term: "Despesas",
};

const EN_LABELS: Labels = Labels {
    company: "Company",
    name: "Name",
    tax_id: "CNPJ",
    address: "Address",
    not_provided: "Not provided",
    incomes: "Income",
    expenses: "Expenses",
    empty: "No entries this month",
    tax_paid: "DAS paid",
    profit: "Profit",
    loss: "Loss",
    income_term: "Income",
    expense_term: "Expenses",
};

/// Renders `dashboard` as multi-line text.
pub fn render(dashboard: &Dashboard, style: &ReportStyle) -> String {
    let labels = if style.portuguese {
        &PT_LABELS
    } else {
        &EN_LABELS
    };
    let money = |amount| format_amount(amount, &style.currency);
    let mut out = String::new();

    let header = format!("=== {TITLE} | {} ===", dashboard.month_label);
    let _ = writeln!(out, "{}", emphasize(&header, style.color));
    render_company(&mut out, &dashboard.company, labels);

    render_section(&mut out, labels.incomes, &dashboard.incomes, labels, style);
    render_section(&mut out, labels.expenses, &dashboard.expenses, labels, style);

    let summary = &dashboard.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", labels.tax_paid, money(summary.tax_paid));

    let line = match summary.outcome() {
        Outcome::Profit => format!("{}: {}", labels.profit, money(summary.profit)),
        Outcome::Loss => format!("{}: {}", labels.loss, money(summary.profit.abs())),
    };
    let styled = match (style.color, summary.outcome()) {
        (false, _) => line,
        (true, Outcome::Profit) => line.bright_green().bold().to_string(),
        (true, Outcome::Loss) => line.bright_red().bold().to_string(),
    };
    let _ = writeln!(out, "{styled}");

    let _ = writeln!(
        out,
        "{} ({}) - {} ({}) - DAS ({}) = {}",
        labels.income_term,
        money(summary.total_income),
        labels.expense_term,
        money(summary.total_expenses),
        money(summary.tax_paid),
        money(summary.profit)
    );
    out
}

fn render_company(out: &mut String, company: &CompanyInfo, labels: &Labels) {
    let field = |value: &str| {
        let value = value.trim();
        if value.is_empty() {
            labels.not_provided.to_string()
        } else {
            value.to_string()
        }
    };
    let _ = writeln!(out, "{}", labels.company);
    let _ = writeln!(out, "  {}: {}", labels.name, field(&company.name));
    let _ = writeln!(out, "  {}: {}", labels.tax_id, field(&company.tax_id));
    let _ = writeln!(out, "  {}: {}", labels.address, field(&company.address));
}

fn render_section(
    out: &mut String,
    title: &str,
    entries: &[Transaction],
    labels: &Labels,
    style: &ReportStyle,
) {
    let _ = writeln!(out);
    let heading = format!("{title} ({})", entries.len());
    let _ = writeln!(out, "{}", emphasize(&heading, style.color));
    if entries.is_empty() {
        let _ = writeln!(out, "  {}", labels.empty);
        return;
    }
    for entry in entries {
        let amount = format_amount(entry.value, &style.currency);
        let date = format_date(entry.date, style.portuguese);
        match &entry.category {
            Some(category) => {
                let _ = writeln!(out, "  {date}  {} [{category}]  {amount}", entry.description);
            }
            None => {
                let _ = writeln!(out, "  {date}  {}  {amount}", entry.description);
            }
        }
    }
}

fn emphasize(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}
