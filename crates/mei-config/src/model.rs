use serde::{Deserialize, Serialize};
use std::{ffi::OsString, path::PathBuf};

use std::env;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "MEI_RAPIDIX_HOME";

const DEFAULT_DIR_NAME: &str = ".mei_rapidix";

/// Stores user-configurable preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_expense_category_value")]
    pub default_expense_category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for ledger data. Defaults to `~/.mei_rapidix`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_expense_category: Self::default_expense_category_value(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_expense_category_value() -> String {
        "General".into()
    }

    /// Returns `true` for Portuguese locales (`pt`, `pt-BR`, `pt_BR`, ...).
    pub fn is_portuguese(&self) -> bool {
        let tag = self.locale.trim().to_ascii_lowercase();
        tag == "pt" || tag.starts_with("pt-") || tag.starts_with("pt_")
    }

    /// Resolves where ledger data lives: `MEI_RAPIDIX_HOME`, then `data_dir`, then the home directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.resolve_data_dir_with(env::var_os(DATA_DIR_ENV))
    }

    pub fn resolve_data_dir_with(&self, override_dir: Option<OsString>) -> PathBuf {
        if let Some(custom) = override_dir.filter(|value| !value.is_empty()) {
            return PathBuf::from(custom);
        }
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }
}
