//! AES-256-GCM authenticated encryption of individual field values.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and prepends
//! it to the ciphertext, so the stored blob is self-describing and callers
//! never manage nonces themselves.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Seal `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
/// Non-deterministic: sealing the same plaintext twice yields different
/// blobs because the nonce varies.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Open a blob that was produced by `seal`.
///
/// Expects the first 12 bytes to be the nonce, followed by the ciphertext.
/// Every failure mode collapses to `DecryptionFailed`: a wrong key, a
/// flipped bit, and a truncated blob are indistinguishable to the caller,
/// and this single error kind is what the vault service treats as "wrong
/// master passphrase".
pub fn open(key: &[u8], sealed: &[u8]) -> Result<Vec<u8>> {
    if sealed.len() < NONCE_LEN {
        return Err(VaultError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| VaultError::DecryptionFailed)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| VaultError::DecryptionFailed)
}
