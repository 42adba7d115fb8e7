use serde::{Deserialize, Serialize};

/// Identity data of the micro-enterprise. Every field is optional free text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "cnpj")]
    pub tax_id: String,
    #[serde(default)]
    pub address: String,
}

impl CompanyInfo {
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            address: address.into(),
        }
    }

    /// Returns `true` when no field has been filled in yet.
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.tax_id, &self.address]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}
