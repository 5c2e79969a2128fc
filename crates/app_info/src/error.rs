//! Error types for app_info.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppInfoError {
    #[error("Secure store error: {0}")]
    SecureStore(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Installation time error: {0}")]
    InstallationTime(String),

    #[error("App ownership error: {0}")]
    Ownership(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl AppInfoError {
    /// Short machine-readable category, used as a tracing field
    pub fn kind(&self) -> &'static str {
        match self {
            AppInfoError::SecureStore(_) => "secure_store",
            AppInfoError::Manifest(_) => "manifest",
            AppInfoError::InstallationTime(_) => "installation_time",
            AppInfoError::Ownership(_) => "ownership",
            AppInfoError::Config(_) => "config",
            AppInfoError::Io(_) => "io",
            AppInfoError::Json(_) => "json",
            AppInfoError::Toml(_) => "toml",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppInfoError>;
