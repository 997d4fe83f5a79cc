// ABOUTME: Typed settings facade over a string key-value store
// ABOUTME: Handles write coalescing, installation id provisioning, and password notification

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use eightpass_storage::KeyValueStore;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::global_pass::GlobalPassHandler;
use crate::keys::*;
use crate::notifier::{PasswordChangeNotifier, PasswordSource};
use crate::types::Tristate;
use crate::{SettingsError, SettingsResult};

const TRUE_VALUE: &str = "1";
const FALSE_VALUE: &str = "0";

/// Application settings backed by a [`KeyValueStore`].
///
/// Every typed property is a translation over [`AppSettings::get`] and
/// [`AppSettings::set`] on a dedicated key. Absence of a key is never an
/// error; each property defines what absence means.
pub struct AppSettings<N = GlobalPassHandler> {
    store: Mutex<Box<dyn KeyValueStore>>,
    notifier: N,
    instance_id: String,
}

impl AppSettings {
    /// Create settings over `store` with the default [`GlobalPassHandler`]
    pub fn new(store: impl KeyValueStore + 'static) -> SettingsResult<Self> {
        Self::builder().store(store).build()
    }

    pub fn builder() -> AppSettingsBuilder {
        AppSettingsBuilder {
            store: None,
            notifier: GlobalPassHandler::new(),
        }
    }
}

impl<N: PasswordChangeNotifier> AppSettings<N> {
    /// Installation id, generated once per store and stable afterwards
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// The handler notified on password writes
    pub fn global_pass(&self) -> &N {
        &self.notifier
    }

    /// Raw value stored under `key`, or None if absent
    pub fn get(&self, key: &str) -> Option<String> {
        self.lock_store().get(key)
    }

    /// Store `value` under `key` and save.
    ///
    /// Writing the value already stored is a no-op: nothing is mutated and
    /// the store is not saved. If the save fails the previous value is put
    /// back, so a retry of the same write is not skipped.
    pub fn set(&self, key: &str, value: &str) -> SettingsResult<()> {
        let mut store = self.lock_store();

        let previous = store.get(key);
        if previous.as_deref() == Some(value) {
            debug!("Setting '{}' unchanged, skipping save", key);
            return Ok(());
        }

        store.set(key, value)?;
        if let Err(e) = store.save() {
            restore(&mut **store, key, previous.as_deref());
            return Err(e.into());
        }

        debug!("Saved setting '{}'", key);
        Ok(())
    }

    /// Remove `key` and save. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> SettingsResult<()> {
        let mut store = self.lock_store();

        let Some(previous) = store.get(key) else {
            debug!("Setting '{}' already absent, skipping save", key);
            return Ok(());
        };

        store.remove(key)?;
        if let Err(e) = store.save() {
            restore(&mut **store, key, Some(&previous));
            return Err(e.into());
        }

        debug!("Removed setting '{}'", key);
        Ok(())
    }

    /// Whether the user allowed analytics collection; `Unset` until asked
    pub fn allow_analytics(&self) -> Tristate {
        match self.get(KEY_ANALYTICS) {
            None => Tristate::Unset,
            Some(value) if value.is_empty() => Tristate::Unset,
            Some(value) => Tristate::from(value == TRUE_VALUE),
        }
    }

    pub fn set_allow_analytics(&self, value: impl Into<Tristate>) -> SettingsResult<()> {
        let data = match value.into() {
            Tristate::Unset => "",
            Tristate::True => TRUE_VALUE,
            Tristate::False => FALSE_VALUE,
        };
        self.set(KEY_ANALYTICS, data)
    }

    pub fn hide_recycle_bin(&self) -> bool {
        self.opt_in(KEY_HIDE_BIN)
    }

    pub fn set_hide_recycle_bin(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_HIDE_BIN, value)
    }

    /// Password guarding the application, if one is set
    pub fn password(&self) -> Option<String> {
        self.get(KEY_PASSWORD)
    }

    /// Store the password, or remove it with `None`, then notify the global
    /// password handler.
    ///
    /// The handler is notified even when the stored value was unchanged. It
    /// is not notified if the write fails.
    pub fn set_password(&self, value: Option<&str>) -> SettingsResult<()> {
        match value {
            Some(password) => self.set(KEY_PASSWORD, password)?,
            None => self.remove(KEY_PASSWORD)?,
        }
        self.notifier.on_password_entered(self);
        Ok(())
    }

    /// Number of times the sync toast was shown.
    ///
    /// A stored value that is not a non-negative integer is reported as
    /// [`SettingsError::Format`] rather than read as zero.
    pub fn toast_showns(&self) -> SettingsResult<u32> {
        let Some(value) = self.get(KEY_TOAST_SHOWNS) else {
            return Ok(0);
        };

        value
            .trim()
            .parse::<u32>()
            .map_err(|source| SettingsError::Format {
                key: KEY_TOAST_SHOWNS,
                value,
                source,
            })
    }

    pub fn set_toast_showns(&self, value: u32) -> SettingsResult<()> {
        self.set(KEY_TOAST_SHOWNS, &value.to_string())
    }

    /// Whether tapped URLs open in the integrated browser
    pub fn use_int_browser(&self) -> bool {
        self.opt_out(KEY_USE_INT_BROWSER)
    }

    pub fn set_use_int_browser(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_USE_INT_BROWSER, value)
    }

    /// Whether search also looks inside password fields
    pub fn search_in_pw(&self) -> bool {
        self.opt_out(KEY_SEARCH_IN_PW)
    }

    pub fn set_search_in_pw(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_SEARCH_IN_PW, value)
    }

    pub fn sync_toast(&self) -> bool {
        self.opt_out(KEY_SYNC_TOAST)
    }

    pub fn set_sync_toast(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_SYNC_TOAST, value)
    }

    pub fn auto_update(&self) -> bool {
        self.opt_in(KEY_AUTO_UPDATE)
    }

    pub fn set_auto_update(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_AUTO_UPDATE, value)
    }

    /// Only auto-update over WLAN
    pub fn auto_update_wlan(&self) -> bool {
        self.opt_in(KEY_AUTO_UPDATE_WLAN)
    }

    pub fn set_auto_update_wlan(&self, value: bool) -> SettingsResult<()> {
        self.set_flag(KEY_AUTO_UPDATE_WLAN, value)
    }

    // Absent means false
    fn opt_in(&self, key: &str) -> bool {
        self.get(key).as_deref() == Some(TRUE_VALUE)
    }

    // Absent means true
    fn opt_out(&self, key: &str) -> bool {
        match self.get(key) {
            None => true,
            Some(value) => value == TRUE_VALUE,
        }
    }

    fn set_flag(&self, key: &str, value: bool) -> SettingsResult<()> {
        self.set(key, if value { TRUE_VALUE } else { FALSE_VALUE })
    }

    fn lock_store(&self) -> MutexGuard<'_, Box<dyn KeyValueStore>> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<N: PasswordChangeNotifier> PasswordSource for AppSettings<N> {
    fn password(&self) -> Option<String> {
        self.get(KEY_PASSWORD)
    }
}

impl<N> fmt::Debug for AppSettings<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("instance_id", &self.instance_id)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppSettings`]. A store is required; the notifier defaults
/// to [`GlobalPassHandler`].
pub struct AppSettingsBuilder<N = GlobalPassHandler> {
    store: Option<Box<dyn KeyValueStore>>,
    notifier: N,
}

impl<N: PasswordChangeNotifier> AppSettingsBuilder<N> {
    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Replace the password change notifier
    pub fn notifier<M: PasswordChangeNotifier>(self, notifier: M) -> AppSettingsBuilder<M> {
        AppSettingsBuilder {
            store: self.store,
            notifier,
        }
    }

    /// Bind the store and make sure it carries an installation id.
    ///
    /// A freshly generated id is saved before this returns, so it is durable
    /// before anyone can observe the settings.
    pub fn build(self) -> SettingsResult<AppSettings<N>> {
        let mut store = self.store.ok_or_else(|| {
            SettingsError::InvalidArgument("a key-value store is required".to_string())
        })?;

        let instance_id = provision_instance_id(store.as_mut())?;

        let settings = AppSettings {
            store: Mutex::new(store),
            notifier: self.notifier,
            instance_id,
        };
        settings.notifier.attach(&settings);

        Ok(settings)
    }
}

// Put `key` back to what it held before a failed save
fn restore(store: &mut dyn KeyValueStore, key: &str, previous: Option<&str>) {
    let restored = match previous {
        Some(value) => store.set(key, value),
        None => store.remove(key).map(|_| ()),
    };

    if let Err(e) = restored {
        warn!("Failed to roll back setting '{}': {}", key, e);
    }
}

fn provision_instance_id(store: &mut dyn KeyValueStore) -> SettingsResult<String> {
    if store.contains(KEY_INSTANCE_ID) {
        if let Some(existing) = store.get(KEY_INSTANCE_ID) {
            debug!("Using existing installation id");
            return Ok(existing);
        }
    }

    let instance_id = Uuid::new_v4().simple().to_string();
    store.set(KEY_INSTANCE_ID, &instance_id)?;
    store.save()?;

    info!("Provisioned new installation id {}", instance_id);
    Ok(instance_id)
}
