//! Command implementations for appinfoctl

use anyhow::{Context, Result};
use app_info::{
    are_app_versions_equal, is_current_app_version_greater_than_app_version,
    is_current_app_version_lower_than_app_version, AppContainer, AppInfoConfig, AppInfoStore,
    InitializeOptions,
};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&Path>) -> Result<AppInfoConfig> {
    AppInfoConfig::load(path).context("Failed to load configuration")
}

/// Logs go to stderr so stdout stays machine-readable
pub fn init_logging(config: &AppInfoConfig) {
    let filter = EnvFilter::try_new(config.effective_log_level())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn show(config: &AppInfoConfig, container: Option<&str>) -> Result<()> {
    let app_container = match container {
        Some(name) => Some(
            name.parse::<AppContainer>()
                .with_context(|| format!("Invalid --container '{}'", name))?,
        ),
        None => config.app_container,
    };

    let store = AppInfoStore::new(config.host_services());
    debug!(secure_store = %config.secure_store_path.display(), "Initializing app info");
    store
        .initialize(InitializeOptions { app_container })
        .await
        .context("Failed to initialize app info")?;

    let json = serde_json::to_string_pretty(&store.snapshot())?;
    println!("{}", json);
    Ok(())
}

pub fn compare(current: &str, other: &str) -> Result<()> {
    let (current, other) = (Some(current), Some(other));

    println!("equal:   {}", are_app_versions_equal(current, other));
    println!(
        "greater: {}",
        is_current_app_version_greater_than_app_version(current, other)
    );
    println!(
        "lower:   {}",
        is_current_app_version_lower_than_app_version(current, other)
    );
    Ok(())
}

pub fn containers() -> Result<()> {
    for container in AppContainer::ALL {
        println!("{}", container);
    }
    Ok(())
}
