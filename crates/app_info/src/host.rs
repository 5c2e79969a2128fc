//! Host platform collaborators.
//!
//! The store never talks to a platform directly. Each capability it needs is
//! a narrow trait, so hosts plug in their own keychain or manifest source and
//! tests plug in the in-memory versions from `crate::memory`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::container::AppOwnership;
use crate::error::Result;
use crate::manifest::HostManifests;

// ============================================================================
// Secure store
// ============================================================================

/// When a stored secret may be read (keychain accessibility class)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Retention {
    Always,
    AfterFirstUnlock,
    #[default]
    WhenUnlocked,
    WhenUnlockedThisDeviceOnly,
}

/// Options for `SecureStore::set`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    pub retention: Retention,
}

/// Secure key-value storage
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str, options: SetOptions) -> Result<()>;
}

// ============================================================================
// Manifest, installation time, ownership
// ============================================================================

/// Source of the app manifests (name and version descriptors)
#[async_trait]
pub trait ManifestProvider: Send + Sync {
    async fn manifests(&self) -> Result<HostManifests>;
}

/// Reports when the app was installed
#[async_trait]
pub trait InstallationTimeProvider: Send + Sync {
    async fn installation_time(&self) -> Result<DateTime<Utc>>;
}

/// Reports the host's ownership classification, `None` when undetermined
#[async_trait]
pub trait OwnershipClassifier: Send + Sync {
    async fn app_ownership(&self) -> Result<Option<AppOwnership>>;
}

// ============================================================================
// Id generation
// ============================================================================

/// Produces effectively-unique identifiers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

// ============================================================================
// Bundle
// ============================================================================

/// Every collaborator the store needs
#[derive(Clone)]
pub struct HostServices {
    pub secure_store: Arc<dyn SecureStore>,
    pub manifest: Arc<dyn ManifestProvider>,
    pub installation_time: Arc<dyn InstallationTimeProvider>,
    pub ownership: Arc<dyn OwnershipClassifier>,
    pub id_generator: Arc<dyn IdGenerator>,
}

impl HostServices {
    /// Bundle the given collaborators with the default UUID generator
    pub fn new(
        secure_store: Arc<dyn SecureStore>,
        manifest: Arc<dyn ManifestProvider>,
        installation_time: Arc<dyn InstallationTimeProvider>,
        ownership: Arc<dyn OwnershipClassifier>,
    ) -> Self {
        Self {
            secure_store,
            manifest,
            installation_time,
            ownership,
            id_generator: Arc::new(UuidGenerator),
        }
    }

    /// Replace the id generator
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }
}
