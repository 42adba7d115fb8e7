//! Shortcuts to the government portals where the MEI pays the DAS and files the yearly declaration.

use std::fmt;

use crate::AppError;

const DASN_SIMEI_URL: &str =
    "https://www8.receita.fazenda.gov.br/SimplesNacional/Aplicacoes/ATSPO/dasnsimei.app/Identificacao";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxPortalLink {
    /// Monthly DAS payment slip.
    MonthlyDas,
    /// Annual DASN-SIMEI declaration.
    AnnualDeclaration,
}

impl TaxPortalLink {
    pub fn url(self) -> &'static str {
        match self {
            TaxPortalLink::MonthlyDas | TaxPortalLink::AnnualDeclaration => DASN_SIMEI_URL,
        }
    }

    pub fn label(self, portuguese: bool) -> &'static str {
        match (self, portuguese) {
            (TaxPortalLink::MonthlyDas, true) => "Pagar DAS mensal",
            (TaxPortalLink::MonthlyDas, false) => "Pay monthly DAS",
            (TaxPortalLink::AnnualDeclaration, true) => "Declaração anual (DASN-SIMEI)",
            (TaxPortalLink::AnnualDeclaration, false) => "Annual declaration (DASN-SIMEI)",
        }
    }
}

impl fmt::Display for TaxPortalLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(false))
    }
}

/// Hands a URL to whatever renders it for the user.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), AppError>;
}

/// Opens URLs in the user's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<(), AppError> {
        opener::open_browser(url).map_err(|err| launch_error(url, err))
    }
}

fn launch_error(url: &str, reason: impl fmt::Display) -> AppError {
    AppError::Launch {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}
