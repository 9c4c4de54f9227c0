//! Session-scoped encrypted credential vault.
//!
//! Credentials are stored as a flat list in a pluggable key-value store;
//! each password field is sealed with ChaCha20-Poly1305 under a key derived
//! from the master password (Argon2id + per-vault salt). The key is cached
//! in memory only while the vault is unlocked.
//!
//! # Session invariant
//!
//! `is_unlocked() == true` iff the derived key is present. Locking —
//! explicit, via the inactivity timer, or by process restart — drops the key
//! and with it any ability to decrypt.
//!
//! # Layers
//!
//! - [`Vault`]: setup/unlock/lock plus credential CRUD.
//! - [`AutoLock`]: single rearmable inactivity timer.
//! - [`CommandHandler`]: JSON request/response surface for host message
//!   plumbing.
//! - [`KeyValueStore`]: persistence seam ([`MemoryStore`], [`JsonFileStore`]).

mod autolock;
mod commands;
mod credentials;
mod error;
mod origin;
mod store;
mod vault;

pub use autolock::{AutoLock, DEFAULT_TIMEOUT};
pub use commands::{CommandHandler, Request, Response};
pub use credentials::{CredentialLookup, CredentialRecord, CredentialSummary, PlainCredential};
pub use error::{VaultError, VaultResult};
pub use origin::normalize_origin;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StorageError, StoreResult};
pub use vault::{Vault, MIN_PASSWORD_LEN};
