use std::sync::Arc;
use std::time::Duration;

use passfill_crypto::KdfParams;
use passfill_vault::{AutoLock, MemoryStore, Vault};

fn fast_kdf() -> KdfParams {
    KdfParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    }
}

fn unlocked_vault() -> Arc<Vault> {
    let vault = Arc::new(Vault::with_kdf_params(
        Arc::new(MemoryStore::new()),
        fast_kdf(),
    ));
    vault.setup_master_password("longpassword1").unwrap();
    vault
}

#[tokio::test(start_paused = true)]
async fn locks_after_inactivity_window() {
    let vault = unlocked_vault();
    let autolock = AutoLock::with_timeout(vault.clone(), Duration::from_secs(300));

    autolock.touch();
    assert!(vault.is_unlocked());

    tokio::time::sleep(Duration::from_secs(301)).await;
    assert!(!vault.is_unlocked());
}

#[tokio::test(start_paused = true)]
async fn touch_rearms_the_timer() {
    let vault = unlocked_vault();
    let autolock = AutoLock::with_timeout(vault.clone(), Duration::from_secs(300));

    autolock.touch();
    tokio::time::sleep(Duration::from_secs(200)).await;
    autolock.touch();
    tokio::time::sleep(Duration::from_secs(200)).await;

    // 400s of wall time, but never 300s since the last activity
    assert!(vault.is_unlocked());

    tokio::time::sleep(Duration::from_secs(101)).await;
    assert!(!vault.is_unlocked());
}

#[tokio::test(start_paused = true)]
async fn touch_while_locked_arms_nothing() {
    let vault = unlocked_vault();
    let autolock = AutoLock::with_timeout(vault.clone(), Duration::from_secs(300));

    vault.lock();
    autolock.touch();

    tokio::time::sleep(Duration::from_secs(400)).await;
    assert!(!vault.is_unlocked());

    // No stale timer left behind: a later unlock stays up
    assert!(vault.unlock("longpassword1").unwrap());
    tokio::time::sleep(Duration::from_secs(200)).await;
    assert!(vault.is_unlocked());
}

#[tokio::test(start_paused = true)]
async fn unlock_after_auto_lock_wins() {
    let vault = unlocked_vault();
    let autolock = AutoLock::with_timeout(vault.clone(), Duration::from_secs(300));

    autolock.touch();
    tokio::time::sleep(Duration::from_secs(301)).await;
    assert!(!vault.is_unlocked());

    // Last write wins: re-establishing the session is normal unlock
    assert!(vault.unlock("longpassword1").unwrap());
    assert!(vault.is_unlocked());
}

#[tokio::test(start_paused = true)]
async fn cancel_disarms_without_locking() {
    let vault = unlocked_vault();
    let autolock = AutoLock::with_timeout(vault.clone(), Duration::from_secs(300));

    autolock.touch();
    autolock.cancel();

    tokio::time::sleep(Duration::from_secs(400)).await;
    assert!(vault.is_unlocked());
}
