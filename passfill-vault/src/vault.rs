//! The vault: master-password lifecycle plus credential CRUD.
//!
//! Each vault has a salt + verification token (Argon2id-derived key,
//! ChaCha20-Poly1305 sealed). The derived key lives only in memory while
//! unlocked — locking drops it, and nothing encrypted survives without it.

use std::sync::{Arc, RwLock};

use passfill_crypto::{derive_key, open, open_str, seal, seal_str, CryptoError, DerivedKey, KdfParams, Salt};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::credentials::{CredentialLookup, CredentialRecord, CredentialSummary, PlainCredential};
use crate::error::{VaultError, VaultResult};
use crate::origin::normalize_origin;
use crate::store::{KeyValueStore, StorageError};

// Persisted schema keys
const KEY_SALT: &str = "salt";
const KEY_TEST_DATA: &str = "testData";
const KEY_HAS_MASTER: &str = "hasMasterPassword";
const KEY_CREDENTIALS: &str = "credentials";

/// Verification token: a known plaintext sealed under the derived key at
/// setup. Unlock re-derives the candidate key and checks it opens this.
const VERIFICATION_PLAINTEXT: &[u8] = b"passfill-vault-verification-token-v1";

/// Minimum master password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// A password-protected credential vault over a [`KeyValueStore`].
///
/// The session key is process-lifetime state: a restart always starts
/// locked, and reconstructing the key requires the master password.
pub struct Vault {
    store: Arc<dyn KeyValueStore>,
    key: RwLock<Option<DerivedKey>>,
    kdf: KdfParams,
}

impl Vault {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_kdf_params(store, KdfParams::default())
    }

    /// Vault with explicit Argon2id cost parameters. Parameters are baked
    /// into the derived key, so they must match whatever the verification
    /// token was created with.
    pub fn with_kdf_params(store: Arc<dyn KeyValueStore>, kdf: KdfParams) -> Self {
        Self {
            store,
            key: RwLock::new(None),
            kdf,
        }
    }

    // ── Session lifecycle ───────────────────────────────────────────────

    /// Whether a master password has been set up.
    pub fn is_configured(&self) -> VaultResult<bool> {
        Ok(self.store.get(KEY_HAS_MASTER)?.as_deref() == Some("true"))
    }

    /// First-time setup: derives a key from `password` and a fresh salt,
    /// persists the verification material, and unlocks the session.
    ///
    /// Rejected with [`VaultError::AlreadyConfigured`] if verification
    /// material already exists — overwriting it would silently render every
    /// stored credential undecryptable.
    pub fn setup_master_password(&self, password: &str) -> VaultResult<()> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(VaultError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.is_configured()? {
            return Err(VaultError::AlreadyConfigured);
        }

        let salt = Salt::random();
        let key = derive_key(password, &salt, &self.kdf)?;
        let verification = seal(&key, VERIFICATION_PLAINTEXT)?;

        self.store.set(KEY_SALT, &salt.to_base64())?;
        self.store.set(KEY_TEST_DATA, &verification)?;
        self.store.set(KEY_HAS_MASTER, "true")?;

        *self.key.write().unwrap() = Some(key);
        info!("master password configured, vault unlocked");
        Ok(())
    }

    /// Attempts to unlock with `password`. Returns `Ok(false)` when no
    /// master password is configured or the verification token does not
    /// open — wrong password and corrupted verification material are
    /// indistinguishable here.
    ///
    /// A failed attempt leaves the session exactly as it was; in particular
    /// it does not lock an already-unlocked vault.
    pub fn unlock(&self, password: &str) -> VaultResult<bool> {
        if !self.is_configured()? {
            return Ok(false);
        }

        let salt_raw = self
            .store
            .get(KEY_SALT)?
            .ok_or_else(|| StorageError(format!("missing key: {KEY_SALT}")))?;
        let test_data = self
            .store
            .get(KEY_TEST_DATA)?
            .ok_or_else(|| StorageError(format!("missing key: {KEY_TEST_DATA}")))?;

        let salt = Salt::from_base64(&salt_raw)?;
        let key = derive_key(password, &salt, &self.kdf)?;

        match open(&key, &test_data) {
            Ok(plaintext) if plaintext == VERIFICATION_PLAINTEXT => {
                *self.key.write().unwrap() = Some(key);
                info!("vault unlocked");
                Ok(true)
            }
            Ok(_)
            | Err(CryptoError::AuthenticationFailed)
            | Err(CryptoError::InvalidCiphertext(_)) => {
                debug!("unlock rejected: verification token did not open");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Drops the session key. Idempotent; no other side effects.
    pub fn lock(&self) {
        let mut guard = self.key.write().unwrap();
        if guard.take().is_some() {
            info!("vault locked");
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.key.read().unwrap().is_some()
    }

    /// Clone of the live session key, or the applicable gating error.
    fn session_key(&self) -> VaultResult<DerivedKey> {
        self.key
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| self.locked_error())
    }

    /// Gating error for operations that need the session key: a vault that
    /// was never set up reports [`VaultError::NotConfigured`], otherwise
    /// [`VaultError::Locked`].
    fn locked_error(&self) -> VaultError {
        match self.is_configured() {
            Ok(false) => VaultError::NotConfigured,
            _ => VaultError::Locked,
        }
    }

    // ── Credential CRUD ─────────────────────────────────────────────────

    /// Encrypts and appends a credential. Requires an unlocked session.
    ///
    /// Duplicates on (origin, username) are allowed; the list keeps
    /// insertion order.
    pub fn add_credential(
        &self,
        origin: &str,
        username: &str,
        password: &str,
    ) -> VaultResult<CredentialSummary> {
        let key = self.session_key()?;
        let origin = normalize_origin(origin)?;

        let record = CredentialRecord {
            id: Uuid::new_v4().to_string(),
            origin,
            username: username.to_string(),
            encrypted_password: seal_str(&key, password)?,
            created_at: chrono::Utc::now(),
        };

        let mut records = self.load_records()?;
        records.push(record.clone());
        self.save_records(&records)?;

        info!(credential_id = %record.id, origin = %record.origin, "credential added");
        Ok(CredentialSummary::from(&record))
    }

    /// Decrypts all credentials whose stored origin exactly matches the
    /// normalized `origin`. Requires an unlocked session.
    ///
    /// A record whose ciphertext fails to authenticate is skipped and
    /// reported in `failed_ids` rather than aborting the batch.
    pub fn get_credentials(&self, origin: &str) -> VaultResult<CredentialLookup> {
        let key = self.session_key()?;
        let origin = normalize_origin(origin)?;

        let mut lookup = CredentialLookup::default();
        for record in self.load_records()? {
            if record.origin != origin {
                continue;
            }
            match open_str(&key, &record.encrypted_password) {
                Ok(password) => lookup.credentials.push(PlainCredential {
                    id: record.id,
                    origin: record.origin,
                    username: record.username,
                    password,
                }),
                Err(e) => {
                    warn!(credential_id = %record.id, error = %e, "skipping undecryptable credential");
                    lookup.failed_ids.push(record.id);
                }
            }
        }
        Ok(lookup)
    }

    /// Metadata for every stored credential — no decryption, but still gated
    /// on an unlocked session.
    pub fn get_all_credentials(&self) -> VaultResult<Vec<CredentialSummary>> {
        if !self.is_unlocked() {
            return Err(self.locked_error());
        }
        Ok(self
            .load_records()?
            .iter()
            .map(CredentialSummary::from)
            .collect())
    }

    /// Removes a credential by id. Operates on metadata only, so it works
    /// while locked; removing an absent id succeeds.
    pub fn remove_credential(&self, id: &str) -> VaultResult<()> {
        let mut records = self.load_records()?;
        let before = records.len();
        records.retain(|record| record.id != id);

        if records.len() != before {
            self.save_records(&records)?;
            info!(credential_id = %id, "credential removed");
        } else {
            debug!(credential_id = %id, "remove: id not present");
        }
        Ok(())
    }

    // ── Persistence helpers ─────────────────────────────────────────────

    fn load_records(&self) -> VaultResult<Vec<CredentialRecord>> {
        match self.store.get(KEY_CREDENTIALS)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_records(&self, records: &[CredentialRecord]) -> VaultResult<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(KEY_CREDENTIALS, &raw)?;
        Ok(())
    }
}
