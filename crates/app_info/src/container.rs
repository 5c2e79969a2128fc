//! Runtime container classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AppInfoError;

/// Kind of runtime host the app is running under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppContainer {
    /// Managed Expo runtime (Expo Go)
    Expo,
    /// Compiled native binary
    Native,
    /// Web build
    Web,
}

impl AppContainer {
    pub const ALL: [AppContainer; 3] = [AppContainer::Expo, AppContainer::Native, AppContainer::Web];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppContainer::Expo => "expo",
            AppContainer::Native => "native",
            AppContainer::Web => "web",
        }
    }

    /// Map the host's ownership classification to a container.
    ///
    /// Only the managed runtime maps to `Expo`; standalone, guest and an
    /// undetermined classification all map to `Native`.
    pub fn from_ownership(ownership: Option<AppOwnership>) -> Self {
        match ownership {
            Some(AppOwnership::Expo) => AppContainer::Expo,
            Some(AppOwnership::Standalone) | Some(AppOwnership::Guest) | None => {
                AppContainer::Native
            }
        }
    }
}

impl fmt::Display for AppContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppContainer {
    type Err = AppInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expo" => Ok(AppContainer::Expo),
            "native" => Ok(AppContainer::Native),
            "web" => Ok(AppContainer::Web),
            other => Err(AppInfoError::Config(format!(
                "unknown app container '{}' (expected expo, native or web)",
                other
            ))),
        }
    }
}

/// Ownership classification reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppOwnership {
    Expo,
    Standalone,
    Guest,
}

impl FromStr for AppOwnership {
    type Err = AppInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expo" => Ok(AppOwnership::Expo),
            "standalone" => Ok(AppOwnership::Standalone),
            "guest" => Ok(AppOwnership::Guest),
            other => Err(AppInfoError::Config(format!("unknown app ownership '{}'", other))),
        }
    }
}
