//! In-memory collaborators.
//!
//! Used by tests and by hosts that have no platform keychain. Nothing here is
//! persisted across processes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

use crate::container::AppOwnership;
use crate::error::{AppInfoError, Result};
use crate::host::{
    IdGenerator, InstallationTimeProvider, ManifestProvider, OwnershipClassifier, Retention,
    SecureStore, SetOptions,
};
use crate::manifest::{Descriptor, HostManifests};

// ============================================================================
// Secure store
// ============================================================================

/// Secure store backed by a map (NOT SECURE - tests and unsupported hosts only)
#[derive(Debug, Default)]
pub struct MemorySecureStore {
    entries: RwLock<HashMap<String, (String, Retention)>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemorySecureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `get` fail until switched off
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every `set` fail until switched off
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Retention a key was last written with
    pub fn retention(&self, key: &str) -> Option<Retention> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(key).map(|(_, retention)| *retention)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SecureStore for MemorySecureStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppInfoError::SecureStore(format!("read of '{}' refused", key)));
        }
        let entries = self
            .entries
            .read()
            .map_err(|_| AppInfoError::SecureStore("lock poisoned".to_string()))?;
        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, options: SetOptions) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppInfoError::SecureStore(format!("write of '{}' refused", key)));
        }
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppInfoError::SecureStore("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), (value.to_string(), options.retention));
        Ok(())
    }
}

// ============================================================================
// Manifest, installation time, ownership
// ============================================================================

/// Manifests fixed at construction
#[derive(Debug, Clone, Default)]
pub struct StaticManifest(pub HostManifests);

impl StaticManifest {
    /// Only a primary manifest
    pub fn primary(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self(HostManifests {
            primary: Some(Descriptor::new(name, version)),
            ..Default::default()
        })
    }
}

#[async_trait]
impl ManifestProvider for StaticManifest {
    async fn manifests(&self) -> Result<HostManifests> {
        Ok(self.0.clone())
    }
}

/// Always reports the same installation time, or always fails
#[derive(Debug, Clone)]
pub struct FixedInstallationTime(std::result::Result<DateTime<Utc>, String>);

impl FixedInstallationTime {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self(Ok(time))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self(Err(reason.into()))
    }
}

#[async_trait]
impl InstallationTimeProvider for FixedInstallationTime {
    async fn installation_time(&self) -> Result<DateTime<Utc>> {
        self.0.clone().map_err(AppInfoError::InstallationTime)
    }
}

/// Ownership classification that can be changed at runtime
#[derive(Debug, Default)]
pub struct FixedOwnership(RwLock<Option<AppOwnership>>);

impl FixedOwnership {
    pub fn new(ownership: Option<AppOwnership>) -> Self {
        Self(RwLock::new(ownership))
    }

    pub fn set(&self, ownership: Option<AppOwnership>) {
        *self.0.write().unwrap_or_else(|e| e.into_inner()) = ownership;
    }
}

#[async_trait]
impl OwnershipClassifier for FixedOwnership {
    async fn app_ownership(&self) -> Result<Option<AppOwnership>> {
        let ownership = self
            .0
            .read()
            .map_err(|_| AppInfoError::Ownership("lock poisoned".to_string()))?;
        Ok(*ownership)
    }
}

// ============================================================================
// Id generation
// ============================================================================

/// Deterministic ids `prefix-0`, `prefix-1`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", self.prefix, n)
    }
}
