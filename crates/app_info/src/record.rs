//! The AppInfo record and the process session id.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::container::AppContainer;

/// Generated once per process, never persisted
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Session id of the current process
pub fn session_id() -> &'static str {
    SESSION_ID.as_str()
}

/// Application identity facts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub installation_time: Option<DateTime<Utc>>,
    /// Stable per physical install
    pub installation_id: Option<String>,
    /// Stable per process lifetime
    pub session_id: Option<String>,
    pub app_container: Option<AppContainer>,
}

impl AppInfo {
    /// Record before initialization: only the session id is known
    pub fn uninitialized() -> Self {
        Self {
            session_id: Some(session_id().to_string()),
            ..Self::default()
        }
    }

    /// True once `initialize` has populated the record
    pub fn is_initialized(&self) -> bool {
        self.installation_id.is_some()
    }
}
