//! Inactivity auto-lock.
//!
//! One timer, rearmed on every observed activity. When the quiet window
//! elapses the vault locks itself; an explicit lock or unlock racing the
//! timer is last-write-wins (unlock after an auto-lock simply re-establishes
//! the session).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::info;

use crate::vault::Vault;

/// Default inactivity window before the vault locks itself.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Rearmable inactivity timer that locks a [`Vault`].
///
/// Must be used from within a tokio runtime.
pub struct AutoLock {
    vault: Arc<Vault>,
    timeout: Duration,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl AutoLock {
    pub fn new(vault: Arc<Vault>) -> Self {
        Self::with_timeout(vault, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(vault: Arc<Vault>, timeout: Duration) -> Self {
        Self {
            vault,
            timeout,
            task: Mutex::new(None),
        }
    }

    /// Records activity: cancels the live timer and, while unlocked, arms a
    /// fresh one. Touching a locked vault arms nothing — the abort and the
    /// unlocked check happen under the same guard, so a concurrent lock
    /// cannot leave a dangling timer behind.
    pub fn touch(&self) {
        let mut task = self.task.lock().unwrap();
        if let Some(handle) = task.take() {
            handle.abort();
        }
        if !self.vault.is_unlocked() {
            return;
        }

        let vault = Arc::clone(&self.vault);
        let timeout = self.timeout;
        *task = Some(tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            vault.lock();
            info!(timeout_secs = timeout.as_secs(), "vault auto-locked after inactivity");
        }));
    }

    /// Cancels any pending timer without locking.
    pub fn cancel(&self) {
        if let Some(handle) = self.task.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for AutoLock {
    fn drop(&mut self) {
        self.cancel();
    }
}
