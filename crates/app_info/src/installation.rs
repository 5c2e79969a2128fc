//! Installation identifier: read once from the secure store, created on
//! first run.

use tracing::{debug, warn};

use crate::error::Result;
use crate::host::{IdGenerator, Retention, SecureStore, SetOptions};

/// Secure store key holding the installation id
pub const INSTALLATION_ID_KEY: &str = "codexporer.io-expo_app_info-installation_id";

/// Return the persisted installation id, creating and persisting one if
/// none exists.
///
/// A failing read counts as "not found". A failing write is returned to the
/// caller.
pub async fn resolve_installation_id(
    store: &dyn SecureStore,
    ids: &dyn IdGenerator,
) -> Result<String> {
    let existing = match store.get(INSTALLATION_ID_KEY).await {
        Ok(value) => value.filter(|id| !id.is_empty()),
        Err(e) => {
            warn!(error = %e, "Failed to read installation id, generating a new one");
            None
        }
    };

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = ids.generate();
    store
        .set(
            INSTALLATION_ID_KEY,
            &id,
            SetOptions {
                retention: Retention::Always,
            },
        )
        .await?;
    debug!(installation_id = %id, "Persisted new installation id");

    Ok(id)
}
