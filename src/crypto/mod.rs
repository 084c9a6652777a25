//! Cryptographic primitives for CredVault.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening of field values (`encryption`)
//! - PBKDF2-HMAC-SHA256 passphrase-based key derivation (`kdf`)

pub mod encryption;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, generate_salt};
pub use encryption::{open, seal};
pub use kdf::{derive_key, generate_salt, KEY_LEN, SALT_LEN};
