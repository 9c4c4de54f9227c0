use thiserror::Error;

/// All errors that can occur in the crypto layer.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("encryption failed")]
    EncryptionFailed,

    /// Tag verification failed: wrong key or tampered data. The two cases
    /// are indistinguishable by construction.
    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    #[error("invalid salt length: expected {expected}, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },
}

pub type CryptoResult<T> = Result<T, CryptoError>;
