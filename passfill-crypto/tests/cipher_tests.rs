use passfill_crypto::{
    derive_key, generate_random_key, open, open_str, seal, seal_str, CryptoError, KdfParams, Salt,
    NONCE_SIZE, SALT_SIZE, TAG_SIZE,
};

fn fast_params() -> KdfParams {
    // Minimal Argon2 cost so the test suite stays quick
    KdfParams {
        memory_kib: 8,
        iterations: 1,
        parallelism: 1,
    }
}

#[test]
fn seal_open_roundtrip() {
    let key = generate_random_key();
    let opaque = seal(&key, b"hello vault").unwrap();
    let recovered = open(&key, &opaque).unwrap();
    assert_eq!(recovered, b"hello vault");
}

#[test]
fn seal_open_empty_plaintext() {
    let key = generate_random_key();
    let opaque = seal(&key, b"").unwrap();
    assert_eq!(open(&key, &opaque).unwrap(), b"");
}

#[test]
fn string_roundtrip() {
    let key = generate_random_key();
    let opaque = seal_str(&key, "s3cret-pässword").unwrap();
    assert_eq!(open_str(&key, &opaque).unwrap(), "s3cret-pässword");
}

#[test]
fn wrong_key_fails_authentication() {
    let k1 = generate_random_key();
    let k2 = generate_random_key();
    let opaque = seal(&k1, b"payload").unwrap();

    let result = open(&k2, &opaque);
    assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
}

#[test]
fn tampered_ciphertext_fails_authentication() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    let key = generate_random_key();
    let opaque = seal(&key, b"payload").unwrap();

    let mut combined = BASE64.decode(&opaque).unwrap();
    // Flip a byte past the nonce
    combined[NONCE_SIZE] ^= 0xFF;
    let tampered = BASE64.encode(combined);

    let result = open(&key, &tampered);
    assert!(matches!(result, Err(CryptoError::AuthenticationFailed)));
}

#[test]
fn each_seal_produces_different_output() {
    let key = generate_random_key();
    let a = seal(&key, b"same plaintext").unwrap();
    let b = seal(&key, b"same plaintext").unwrap();

    // Fresh nonce per call means differing opaque strings
    assert_ne!(a, b);
    assert_eq!(open(&key, &a).unwrap(), open(&key, &b).unwrap());
}

#[test]
fn garbage_base64_is_invalid_ciphertext() {
    let key = generate_random_key();
    let result = open(&key, "not base64 at all!!!");
    assert!(matches!(result, Err(CryptoError::InvalidCiphertext(_))));
}

#[test]
fn truncated_opaque_is_invalid_ciphertext() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    let key = generate_random_key();
    let short = BASE64.encode(vec![0u8; NONCE_SIZE + TAG_SIZE - 1]);
    let result = open(&key, &short);
    assert!(matches!(result, Err(CryptoError::InvalidCiphertext(_))));
}

#[test]
fn derive_key_is_deterministic() {
    let salt = Salt::random();
    let k1 = derive_key("correct horse", &salt, &fast_params()).unwrap();
    let k2 = derive_key("correct horse", &salt, &fast_params()).unwrap();
    assert_eq!(k1.as_bytes(), k2.as_bytes());
}

#[test]
fn different_salts_produce_different_keys() {
    let s1 = Salt::random();
    let s2 = Salt::random();
    assert_ne!(s1, s2);

    let k1 = derive_key("correct horse", &s1, &fast_params()).unwrap();
    let k2 = derive_key("correct horse", &s2, &fast_params()).unwrap();
    assert_ne!(k1.as_bytes(), k2.as_bytes());
}

#[test]
fn different_passwords_produce_different_keys() {
    let salt = Salt::random();
    let k1 = derive_key("password-one", &salt, &fast_params()).unwrap();
    let k2 = derive_key("password-two", &salt, &fast_params()).unwrap();
    assert_ne!(k1.as_bytes(), k2.as_bytes());
}

#[test]
fn salt_base64_roundtrip() {
    let salt = Salt::random();
    let encoded = salt.to_base64();
    let decoded = Salt::from_base64(&encoded).unwrap();
    assert_eq!(salt, decoded);
}

#[test]
fn salt_wrong_length_rejected() {
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;

    let encoded = BASE64.encode(vec![0u8; SALT_SIZE + 1]);
    let result = Salt::from_base64(&encoded);
    assert!(matches!(result, Err(CryptoError::InvalidSaltLength { .. })));
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn seal_open_always_roundtrips(plaintext in proptest::collection::vec(any::<u8>(), 0..512)) {
            let key = generate_random_key();
            let opaque = seal(&key, &plaintext).unwrap();
            let recovered = open(&key, &opaque).unwrap();
            prop_assert_eq!(recovered, plaintext);
        }

        #[test]
        fn wrong_key_never_opens(plaintext in proptest::collection::vec(any::<u8>(), 1..256)) {
            let k1 = generate_random_key();
            let k2 = generate_random_key();
            let opaque = seal(&k1, &plaintext).unwrap();
            prop_assert!(open(&k2, &opaque).is_err());
        }
    }
}
