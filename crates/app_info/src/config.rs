//! Configuration for the bundled host collaborators.
//!
//! Config file: ~/.config/app-info/config.toml (or an explicit path)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::container::{AppContainer, AppOwnership};
use crate::error::{AppInfoError, Result};
use crate::file_store::FileSecureStore;
use crate::host::{HostServices, ManifestProvider};
use crate::memory::{FixedOwnership, StaticManifest};
use crate::system::{ExecutableInstallationTime, JsonManifestProvider};

/// Environment variable overriding `log_level`
pub const LOG_ENV: &str = "APP_INFO_LOG";

fn default_secure_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("app-info")
        .join("secure_store.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfoConfig {
    /// JSON file holding the secure store entries
    #[serde(default = "default_secure_store_path")]
    pub secure_store_path: PathBuf,

    /// JSON manifest file; without one name and version stay absent
    #[serde(default)]
    pub manifest_path: Option<PathBuf>,

    /// File whose timestamp is the installation time (default: executable)
    #[serde(default)]
    pub installation_path: Option<PathBuf>,

    /// Ownership classification reported to the store
    #[serde(default)]
    pub app_ownership: Option<AppOwnership>,

    /// Container override passed to `initialize`
    #[serde(default)]
    pub app_container: Option<AppContainer>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        Self {
            secure_store_path: default_secure_store_path(),
            manifest_path: None,
            installation_path: None,
            app_ownership: None,
            app_container: None,
            log_level: default_log_level(),
        }
    }
}

impl AppInfoConfig {
    /// ~/.config/app-info/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("app-info").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// Priority:
    /// 1. Explicit path (must exist)
    /// 2. User config, if present
    /// 3. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        debug!("No config file, using defaults");
        Ok(Self::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppInfoError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: AppInfoConfig = toml::from_str(&contents)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Log filter: `APP_INFO_LOG` wins over the configured level
    pub fn effective_log_level(&self) -> String {
        std::env::var(LOG_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.log_level.clone())
    }

    /// Build the bundled collaborators described by this config
    pub fn host_services(&self) -> HostServices {
        let installation_time = match &self.installation_path {
            Some(path) => ExecutableInstallationTime::at(path),
            None => ExecutableInstallationTime::new(),
        };
        let manifest: Arc<dyn ManifestProvider> = match &self.manifest_path {
            Some(path) => Arc::new(JsonManifestProvider::new(path)),
            None => Arc::new(StaticManifest::default()),
        };

        HostServices::new(
            Arc::new(FileSecureStore::new(&self.secure_store_path)),
            manifest,
            Arc::new(installation_time),
            Arc::new(FixedOwnership::new(self.app_ownership)),
        )
    }
}
