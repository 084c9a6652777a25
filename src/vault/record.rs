//! Plaintext record types used on either side of the cipher.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Input fields for a new record. Title and password are required;
/// everything else may stay empty.
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub title: String,
    pub username: String,
    pub password: String,
    pub two_fa_key: String,
    pub website: String,
    pub notes: String,
}

/// A fully decrypted record as returned by `VaultService::load_records`.
///
/// Lives only in memory; all string fields are wiped when the value is
/// dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct VaultRecord {
    #[zeroize(skip)]
    pub id: i64,
    pub title: String,
    pub username: String,
    pub password: String,
    pub two_fa_key: String,
    pub website: String,
    pub notes: String,
}

// No Debug derive: it would print the decrypted password and TOTP seed.
impl std::fmt::Debug for VaultRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultRecord")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("two_fa_key", &"<redacted>")
            .field("website", &self.website)
            .field("notes", &self.notes)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret_fields() {
        let record = VaultRecord {
            id: 1,
            title: "Mail".into(),
            username: "alice".into(),
            password: "supersecret".into(),
            two_fa_key: "JBSWY3DPEHPK3PXP".into(),
            website: String::new(),
            notes: String::new(),
        };

        let rendered = format!("{record:?}");
        assert!(!rendered.contains("supersecret"));
        assert!(!rendered.contains("JBSWY3DPEHPK3PXP"));
        assert!(rendered.contains("Mail"));
    }
}
