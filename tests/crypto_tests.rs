//! Integration tests for the CredVault crypto module.

use credvault::crypto::kdf::{derive_key, generate_salt, KEY_LEN, SALT_LEN};
use credvault::crypto::{open, seal};
use credvault::errors::VaultError;

// ---------------------------------------------------------------------------
// Sealing round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip() {
    let key = [0xABu8; KEY_LEN];
    let plaintext = b"correct horse battery staple";

    let sealed = seal(&key, plaintext).expect("seal should succeed");

    // Sealed blob must be longer than plaintext (12-byte nonce + 16-byte tag).
    assert!(sealed.len() > plaintext.len());

    let recovered = open(&key, &sealed).expect("open should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn seal_produces_different_ciphertext_each_time() {
    let key = [0xCDu8; KEY_LEN];
    let plaintext = b"same plaintext";

    let ct1 = seal(&key, plaintext).expect("seal 1");
    let ct2 = seal(&key, plaintext).expect("seal 2");

    // Each call generates a new random nonce, so the output must differ.
    assert_ne!(ct1, ct2, "two seals of the same plaintext must differ");
}

#[test]
fn open_with_wrong_key_fails_authentication() {
    let key = [0x11u8; KEY_LEN];
    let wrong_key = [0x22u8; KEY_LEN];

    let sealed = seal(&key, b"secret").expect("seal");
    let result = open(&wrong_key, &sealed);

    assert!(
        matches!(result, Err(VaultError::DecryptionFailed)),
        "wrong key must surface as DecryptionFailed"
    );
}

#[test]
fn open_with_truncated_data_fails() {
    // Anything shorter than the 12-byte nonce must fail the same way.
    let key = [0xAAu8; KEY_LEN];
    let result = open(&key, &[0u8; 5]);
    assert!(matches!(result, Err(VaultError::DecryptionFailed)));
}

#[test]
fn open_with_corrupted_ciphertext_fails() {
    let key = [0xBBu8; KEY_LEN];

    let mut sealed = seal(&key, b"value").expect("seal");
    // Flip a byte in the ciphertext portion (after the 12-byte nonce).
    if let Some(byte) = sealed.get_mut(15) {
        *byte ^= 0xFF;
    }

    let result = open(&key, &sealed);
    assert!(
        matches!(result, Err(VaultError::DecryptionFailed)),
        "corrupted ciphertext must fail the auth check"
    );
}

// ---------------------------------------------------------------------------
// Key derivation (PBKDF2-HMAC-SHA256)
// ---------------------------------------------------------------------------

#[test]
fn derive_key_same_inputs_same_output() {
    let salt = generate_salt();

    let key1 = derive_key("my-secure-passphrase", &salt).expect("derive 1");
    let key2 = derive_key("my-secure-passphrase", &salt).expect("derive 2");

    assert_eq!(key1, key2, "same passphrase + salt must produce the same key");
}

#[test]
fn derive_key_different_salts_different_keys() {
    let salt1 = generate_salt();
    let salt2 = generate_salt();
    assert_ne!(salt1, salt2, "two generated salts must differ");

    let key1 = derive_key("same-passphrase", &salt1).expect("derive 1");
    let key2 = derive_key("same-passphrase", &salt2).expect("derive 2");

    assert_ne!(key1, key2, "different salts must produce different keys");
}

#[test]
fn derive_key_rejects_empty_salt() {
    let result = derive_key("passphrase", &[]);
    assert!(matches!(result, Err(VaultError::KeyDerivationFailed(_))));
}

#[test]
fn generated_salt_has_expected_length() {
    assert_eq!(generate_salt().len(), SALT_LEN);
}

// ---------------------------------------------------------------------------
// End-to-end: passphrase -> key -> seal/open
// ---------------------------------------------------------------------------

#[test]
fn full_crypto_pipeline_roundtrip() {
    let salt = generate_salt();
    let key = derive_key("hunter2", &salt).expect("derive");

    let sealed = seal(&key, b"p@ssw0rd!").expect("seal");
    let recovered = open(&key, &sealed).expect("open");

    assert_eq!(recovered, b"p@ssw0rd!");
}

#[test]
fn key_from_wrong_passphrase_fails_to_open() {
    let salt = generate_salt();
    let key = derive_key("right-passphrase", &salt).expect("derive right");
    let wrong = derive_key("wrong-passphrase", &salt).expect("derive wrong");

    let sealed = seal(&key, b"secret").expect("seal");
    let result = open(&wrong, &sealed);

    assert!(
        matches!(result, Err(VaultError::DecryptionFailed)),
        "a key derived from the wrong passphrase must fail authentication"
    );
}
