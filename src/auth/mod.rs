//! Registration and application-login authentication.
//!
//! The login password is hashed with a plain SHA-256 digest before it ever
//! reaches the store. This is deliberately a lower-value credential: it
//! gates access to the application, while field decryption is protected by
//! the PBKDF2-derived key path. Neither is ever derived from the other.

use sha2::{Digest, Sha256};

use crate::errors::{Result, VaultError};
use crate::store::{Store, UserRow};

/// User registration and credential checks against the store.
pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// SHA-256 hex digest of the login password's UTF-8 bytes.
    pub fn hash_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Register a new account. Returns the assigned user id.
    ///
    /// Failure kinds stay distinguishable: a duplicate email or username is
    /// `DuplicateUser`, an unreachable database is `Store`. Callers can
    /// surface the right message for each.
    pub fn register_user(&self, email: &str, username: &str, password: &str) -> Result<i64> {
        let password_hash = Self::hash_password(password);
        let id = self.store.create_user(email, username, &password_hash)?;
        tracing::debug!(user_id = id, "user registered");
        Ok(id)
    }

    /// Check login credentials. `identifier` may be the username or email.
    ///
    /// Returns `Ok(None)` when the credentials do not match any account;
    /// only store-level failures are errors.
    pub fn authenticate_user(&self, identifier: &str, password: &str) -> Result<Option<UserRow>> {
        let password_hash = Self::hash_password(password);
        self.store.find_user_by_credentials(identifier, &password_hash)
    }

    /// Validate registration input: all fields present, passwords matching.
    pub fn validate_registration(
        email: &str,
        username: &str,
        password: &str,
        password_repeat: &str,
    ) -> Result<()> {
        if email.is_empty() || username.is_empty() || password.is_empty() || password_repeat.is_empty()
        {
            return Err(VaultError::Validation("all fields are required".into()));
        }
        if password != password_repeat {
            return Err(VaultError::Validation("passwords do not match".into()));
        }
        Ok(())
    }

    /// Validate login input: identifier and password present.
    pub fn validate_login(identifier: &str, password: &str) -> Result<()> {
        if identifier.is_empty() || password.is_empty() {
            return Err(VaultError::Validation(
                "username and password are required".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_password_is_sha256_hex() {
        // SHA-256("abc") test vector.
        assert_eq!(
            AuthService::hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn validate_registration_rejects_missing_fields() {
        assert!(AuthService::validate_registration("", "alice", "pw", "pw").is_err());
        assert!(AuthService::validate_registration("a@x.com", "", "pw", "pw").is_err());
        assert!(AuthService::validate_registration("a@x.com", "alice", "", "").is_err());
    }

    #[test]
    fn validate_registration_rejects_mismatched_passwords() {
        let result = AuthService::validate_registration("a@x.com", "alice", "pw1", "pw2");
        assert!(matches!(result, Err(VaultError::Validation(_))));
    }

    #[test]
    fn validate_login_requires_both_fields() {
        assert!(AuthService::validate_login("alice", "pw").is_ok());
        assert!(AuthService::validate_login("", "pw").is_err());
        assert!(AuthService::validate_login("alice", "").is_err());
    }
}
