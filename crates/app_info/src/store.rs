//! The AppInfo store.
//!
//! Holds one `AppInfo` record behind a `watch` channel. Consumers read a
//! snapshot or subscribe to changes; `initialize` is the only writer and
//! replaces the whole record in one step once every host read succeeded.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::container::AppContainer;
use crate::error::Result;
use crate::host::HostServices;
use crate::installation::resolve_installation_id;
use crate::record::{session_id, AppInfo};

/// Options for `AppInfoStore::initialize`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitializeOptions {
    /// Use this container instead of asking the ownership classifier
    pub app_container: Option<AppContainer>,
}

impl InitializeOptions {
    pub fn with_container(app_container: AppContainer) -> Self {
        Self {
            app_container: Some(app_container),
        }
    }
}

/// Shared handle to the AppInfo record
#[derive(Clone)]
pub struct AppInfoStore {
    state: Arc<watch::Sender<AppInfo>>,
    host: HostServices,
}

impl AppInfoStore {
    /// Create a store; every field except the session id starts absent
    pub fn new(host: HostServices) -> Self {
        let (state, _) = watch::channel(AppInfo::uninitialized());
        Self {
            state: Arc::new(state),
            host,
        }
    }

    /// Current record
    pub fn snapshot(&self) -> AppInfo {
        self.state.borrow().clone()
    }

    /// Receiver notified on every replace of the record
    pub fn subscribe(&self) -> watch::Receiver<AppInfo> {
        self.state.subscribe()
    }

    /// Handle that can initialize but not read
    pub fn actions(&self) -> AppInfoActions {
        AppInfoActions {
            store: self.clone(),
        }
    }

    /// Read every host fact and replace the record.
    ///
    /// The installation id is created on first run and reused afterwards; the
    /// session id never changes. On error the record is left untouched.
    ///
    /// The installation id is resolved to completion before the other host
    /// reads start, so a failing read never cancels a secure store write
    /// midway. Dropping the returned future can still interrupt that write.
    pub async fn initialize(&self, options: InitializeOptions) -> Result<()> {
        self.read_host(options).await.map_err(|e| {
            warn!(kind = e.kind(), error = %e, "App info initialization failed");
            e
        })
    }

    async fn read_host(&self, options: InitializeOptions) -> Result<()> {
        let host = &self.host;

        let installation_id =
            resolve_installation_id(host.secure_store.as_ref(), host.id_generator.as_ref())
                .await?;

        let (manifests, installation_time, app_container) = tokio::try_join!(
            host.manifest.manifests(),
            host.installation_time.installation_time(),
            self.resolve_container(options.app_container),
        )?;

        let next = AppInfo {
            app_name: manifests.app_name(),
            app_version: manifests.app_version(),
            installation_time: Some(installation_time),
            installation_id: Some(installation_id),
            session_id: Some(session_id().to_string()),
            app_container: Some(app_container),
        };

        info!(
            app_name = ?next.app_name,
            app_version = ?next.app_version,
            app_container = %app_container,
            "App info initialized"
        );

        self.state.send_replace(next);
        Ok(())
    }

    async fn resolve_container(&self, overridden: Option<AppContainer>) -> Result<AppContainer> {
        if let Some(container) = overridden {
            return Ok(container);
        }
        let ownership = self.host.ownership.app_ownership().await?;
        Ok(AppContainer::from_ownership(ownership))
    }
}

/// Initialize-only view of an `AppInfoStore`
#[derive(Clone)]
pub struct AppInfoActions {
    store: AppInfoStore,
}

impl AppInfoActions {
    pub async fn initialize(&self, options: InitializeOptions) -> Result<()> {
        self.store.initialize(options).await
    }
}
