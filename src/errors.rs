use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// The single signal for a wrong master passphrase. Also raised for
    /// tampered or truncated ciphertext, which is indistinguishable from a
    /// wrong key at the AEAD layer.
    #[error("Decryption failed: wrong master passphrase or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Input validation ---
    #[error("{0}")]
    Validation(String),

    // --- Account errors ---
    #[error("An account with this email or username already exists")]
    DuplicateUser,

    #[error("Not authenticated: no user is logged in")]
    NotAuthenticated,

    // --- Persistence errors ---
    #[error("Store error: {0}")]
    Store(#[from] rusqlite::Error),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, VaultError>;
