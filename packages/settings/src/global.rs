// ABOUTME: Process-wide settings instance
// ABOUTME: Explicit installation at startup, with lazy fallback to the default file store

use eightpass_storage::JsonFileStore;
use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::{AppSettings, SettingsError, SettingsResult};

/// Global settings instance
static APP_SETTINGS: OnceCell<AppSettings> = OnceCell::new();

/// Install `settings` as the process-wide instance.
///
/// Meant for the application entry point. Fails if an instance was already
/// installed or lazily created.
pub fn initialize_settings(settings: AppSettings) -> SettingsResult<&'static AppSettings> {
    let mut installed = false;
    let current = APP_SETTINGS.get_or_init(|| {
        installed = true;
        settings
    });

    if !installed {
        return Err(SettingsError::AlreadyInitialized);
    }

    info!("Settings initialized (instance {})", current.instance_id());
    Ok(current)
}

/// Get the process-wide settings instance.
///
/// On first use without [`initialize_settings`], opens the default
/// [`JsonFileStore`]. Concurrent first calls construct exactly one instance.
pub fn app_settings() -> SettingsResult<&'static AppSettings> {
    APP_SETTINGS.get_or_try_init(|| {
        let store = JsonFileStore::open_default()?;
        warn!(
            "Settings not initialized, using default store at {:?}",
            store.path()
        );
        AppSettings::new(store)
    })
}
