// ABOUTME: Global password handler
// ABOUTME: Tracks whether a password gate is configured and whether this session passed it

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::notifier::{PasswordChangeNotifier, PasswordSource};

#[derive(Debug, Default)]
struct PassState {
    digest: Option<[u8; 32]>,
    unlocked: bool,
}

/// Default [`PasswordChangeNotifier`].
///
/// Keeps a SHA-256 digest of the configured password in memory so entries
/// can be checked without reading the store. Any password write replaces the
/// digest and locks the session; it has to be unlocked again under the new
/// password.
#[derive(Debug, Default)]
pub struct GlobalPassHandler {
    state: Mutex<PassState>,
    notifications: AtomicUsize,
}

impl GlobalPassHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a non-empty password is configured
    pub fn is_enabled(&self) -> bool {
        self.lock_state().digest.is_some()
    }

    /// Check `candidate` against the configured password.
    ///
    /// Always false when no password is configured.
    pub fn verify(&self, candidate: &str) -> bool {
        let state = self.lock_state();
        match &state.digest {
            Some(expected) => {
                let actual = hash_password(candidate);
                bool::from(expected[..].ct_eq(&actual[..]))
            }
            None => false,
        }
    }

    /// Unlock the session if `candidate` matches. Succeeds trivially when no
    /// password is configured.
    pub fn unlock(&self, candidate: &str) -> bool {
        if !self.is_enabled() {
            return true;
        }

        let matched = self.verify(candidate);
        if matched {
            self.lock_state().unlocked = true;
            debug!("Global password accepted");
        } else {
            warn!("Global password rejected");
        }
        matched
    }

    pub fn lock(&self) {
        self.lock_state().unlocked = false;
    }

    pub fn is_unlocked(&self) -> bool {
        let state = self.lock_state();
        state.digest.is_none() || state.unlocked
    }

    /// How many password writes this handler has been told about
    pub fn notification_count(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }

    fn load_from(&self, source: &dyn PasswordSource) -> PassState {
        let digest = source
            .password()
            .filter(|password| !password.is_empty())
            .map(|password| hash_password(&password));
        PassState {
            digest,
            unlocked: false,
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, PassState> {
        self.state.lock().unwrap_or_else(|poisoned| {
            warn!("Global password state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl PasswordChangeNotifier for GlobalPassHandler {
    fn attach(&self, source: &dyn PasswordSource) {
        let loaded = self.load_from(source);
        *self.lock_state() = loaded;
    }

    fn on_password_entered(&self, source: &dyn PasswordSource) {
        self.notifications.fetch_add(1, Ordering::SeqCst);

        let loaded = self.load_from(source);

        if loaded.digest.is_some() {
            info!("Global password updated");
        } else {
            info!("Global password cleared");
        }
        *self.lock_state() = loaded;
    }
}

fn hash_password(password: &str) -> [u8; 32] {
    Sha256::digest(password.as_bytes()).into()
}
