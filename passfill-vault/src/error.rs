use passfill_crypto::CryptoError;
use thiserror::Error;

use crate::store::StorageError;

/// All errors that can occur in vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault is locked")]
    Locked,

    #[error("master password not configured")]
    NotConfigured,

    #[error("master password already configured")]
    AlreadyConfigured,

    #[error("password too short (min {0} characters)")]
    PasswordTooShort(usize),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type VaultResult<T> = Result<T, VaultError>;
