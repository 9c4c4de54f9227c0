//! ChaCha20-Poly1305 sealing into opaque base64 strings.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};

use crate::error::{CryptoError, CryptoResult};
use crate::key::DerivedKey;

/// Nonce size in bytes (96-bit, per ChaCha20-Poly1305).
pub const NONCE_SIZE: usize = 12;

/// Poly1305 authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypts `plaintext` under `key`, returning `base64(nonce ‖ ciphertext)`.
///
/// A fresh random nonce is generated on every call. Nonce reuse under the
/// same key breaks confidentiality, so there is no way to supply one from
/// outside.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> CryptoResult<String> {
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));
    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CryptoError::EncryptionFailed)?;

    let mut combined = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    combined.extend_from_slice(nonce.as_slice());
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypts an opaque string produced by [`seal`].
///
/// Fails with [`CryptoError::AuthenticationFailed`] when the tag does not
/// verify — wrong key and tampered data are indistinguishable here, and
/// unlock verification relies on exactly that.
pub fn open(key: &DerivedKey, opaque: &str) -> CryptoResult<Vec<u8>> {
    let combined = BASE64
        .decode(opaque)
        .map_err(|e| CryptoError::InvalidCiphertext(e.to_string()))?;

    if combined.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::InvalidCiphertext(format!(
            "too short: {} bytes",
            combined.len()
        )));
    }

    let (nonce_bytes, ciphertext) = combined.split_at(NONCE_SIZE);
    let cipher = ChaCha20Poly1305::new(Key::from_slice(key.as_bytes()));

    cipher
        .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailed)
}

/// [`seal`] for UTF-8 strings.
pub fn seal_str(key: &DerivedKey, plaintext: &str) -> CryptoResult<String> {
    seal(key, plaintext.as_bytes())
}

/// [`open`] returning a UTF-8 string.
pub fn open_str(key: &DerivedKey, opaque: &str) -> CryptoResult<String> {
    let bytes = open(key, opaque)?;
    String::from_utf8(bytes).map_err(|e| CryptoError::InvalidCiphertext(e.to_string()))
}
