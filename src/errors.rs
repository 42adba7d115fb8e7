use mei_config::ConfigError;
use mei_core::CoreError;
use thiserror::Error;

/// Error type surfaced by the application facade.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Could not open {url}: {reason}")]
    Launch { url: String, reason: String },
}
