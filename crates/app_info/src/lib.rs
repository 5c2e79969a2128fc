//! Application identity facts for a host application.
//!
//! `AppInfoStore` holds the app name, version, installation time,
//! installation id, session id and runtime container. It is filled once by
//! `initialize` from host collaborators (see `host`). The `version` module
//! compares dot-separated app versions and needs no store.

pub mod config;
pub mod container;
pub mod error;
pub mod file_store;
pub mod host;
pub mod installation;
pub mod manifest;
pub mod memory;
pub mod record;
pub mod store;
pub mod system;
pub mod version;

pub use config::AppInfoConfig;
pub use container::{AppContainer, AppOwnership};
pub use error::{AppInfoError, Result};
pub use host::{
    HostServices, IdGenerator, InstallationTimeProvider, ManifestProvider, OwnershipClassifier,
    Retention, SecureStore, SetOptions, UuidGenerator,
};
pub use installation::INSTALLATION_ID_KEY;
pub use manifest::{Descriptor, HostManifests};
pub use record::{session_id, AppInfo};
pub use store::{AppInfoActions, AppInfoStore, InitializeOptions};
pub use version::{
    are_app_versions_equal, is_current_app_version_greater_than_app_version,
    is_current_app_version_lower_than_app_version,
};
