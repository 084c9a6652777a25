//! Passphrase-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The iteration count is fixed crate-wide: every record stores the salt it
//! was sealed with, and re-deriving its key only works if the parameters
//! never change. 480 000 iterations keeps a single derivation in the
//! hundreds-of-milliseconds range on current hardware, which is the point:
//! offline brute force against a stolen database stays expensive.

use pbkdf2::pbkdf2_hmac;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{Result, VaultError};

/// Length of the per-record salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Fixed PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 480_000;

/// Derive a 32-byte encryption key from a master passphrase and salt.
///
/// Deterministic: the same passphrase + salt always yields the same key.
/// The salt must be non-empty; a zero-length salt would silently collapse
/// every record onto the same key.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    if salt.is_empty() {
        return Err(VaultError::KeyDerivationFailed(
            "salt must not be empty".into(),
        ));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
///
/// Called once per saved record; salts are never reused across records.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rngs::OsRng.fill_bytes(&mut salt);
    salt
}
