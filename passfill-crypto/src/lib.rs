//! Encryption layer for passfill.
//!
//! Provides the two primitives the vault is built on:
//! - Argon2id for key derivation from the master password
//! - ChaCha20-Poly1305 for authenticated encryption
//!
//! Keys live only in memory and are zeroized on drop. Ciphertexts are
//! opaque base64 strings carrying `nonce ‖ ciphertext ‖ tag`, so a single
//! string column/field is enough to persist them.
//!
//! There is no "wrong password" error anywhere in this crate:
//! a wrong key and a tampered ciphertext both surface as
//! [`CryptoError::AuthenticationFailed`], which is exactly how unlock
//! verification distinguishes a correct master password.

mod cipher;
mod error;
mod key;

pub use cipher::{open, open_str, seal, seal_str, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{derive_key, generate_random_key, DerivedKey, KdfParams, Salt, KEY_SIZE, SALT_SIZE};
