//! Collaborators backed by the local filesystem.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

use crate::error::{AppInfoError, Result};
use crate::host::{InstallationTimeProvider, ManifestProvider};
use crate::manifest::HostManifests;

/// Reads manifests from a JSON file.
///
/// The file holds optional `extendedClient`, `manifest` and `config` objects,
/// each with optional `name` and `version`. A missing file means no manifest,
/// so every field resolves to absent.
#[derive(Debug, Clone)]
pub struct JsonManifestProvider {
    path: PathBuf,
}

impl JsonManifestProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestProvider for JsonManifestProvider {
    async fn manifests(&self) -> Result<HostManifests> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No manifest file");
                return Ok(HostManifests::default());
            }
            Err(e) => {
                return Err(AppInfoError::Manifest(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            AppInfoError::Manifest(format!("failed to parse {}: {}", self.path.display(), e))
        })
    }
}

/// Installation time taken from a file's timestamps.
///
/// Uses the creation time where the filesystem records it, else the last
/// modification time. Defaults to the running executable.
#[derive(Debug, Clone, Default)]
pub struct ExecutableInstallationTime {
    path: Option<PathBuf>,
}

impl ExecutableInstallationTime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn target(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => std::env::current_exe().map_err(|e| {
                AppInfoError::InstallationTime(format!("cannot locate executable: {}", e))
            }),
        }
    }
}

#[async_trait]
impl InstallationTimeProvider for ExecutableInstallationTime {
    async fn installation_time(&self) -> Result<DateTime<Utc>> {
        let path = self.target()?;
        let metadata = fs::metadata(&path).await.map_err(|e| {
            AppInfoError::InstallationTime(format!("cannot stat {}: {}", path.display(), e))
        })?;

        let time = metadata
            .created()
            .or_else(|_| metadata.modified())
            .map_err(|e| {
                AppInfoError::InstallationTime(format!(
                    "no timestamp for {}: {}",
                    path.display(),
                    e
                ))
            })?;

        Ok(DateTime::<Utc>::from(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_manifest_is_empty() {
        let dir = TempDir::new().unwrap();
        let provider = JsonManifestProvider::new(dir.path().join("app.json"));

        let manifests = provider.manifests().await.unwrap();

        assert_eq!(manifests, HostManifests::default());
    }

    #[tokio::test]
    async fn test_reads_manifest_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(
            &path,
            r#"{"extendedClient": {"name": "Codexporer"}, "manifest": {"name": "app", "version": "1.4.2"}}"#,
        )
        .unwrap();

        let manifests = JsonManifestProvider::new(&path).manifests().await.unwrap();

        assert_eq!(manifests.app_name().as_deref(), Some("Codexporer"));
        assert_eq!(manifests.app_version().as_deref(), Some("1.4.2"));
    }

    #[tokio::test]
    async fn test_invalid_manifest_is_manifest_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.json");
        std::fs::write(&path, "{").unwrap();

        let err = JsonManifestProvider::new(&path).manifests().await.unwrap_err();

        assert_eq!(err.kind(), "manifest");
    }

    #[tokio::test]
    async fn test_installation_time_of_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("installed");
        std::fs::write(&path, "").unwrap();

        let time = ExecutableInstallationTime::at(&path)
            .installation_time()
            .await
            .unwrap();

        let age = Utc::now() - time;
        assert!(age.num_seconds().abs() < 60);
    }

    #[tokio::test]
    async fn test_installation_time_missing_file() {
        let dir = TempDir::new().unwrap();
        let provider = ExecutableInstallationTime::at(dir.path().join("missing"));

        let err = provider.installation_time().await.unwrap_err();

        assert_eq!(err.kind(), "installation_time");
    }
}
