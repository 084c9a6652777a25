//! High-level vault operations.
//!
//! `VaultService` is the one component a presentation layer talks to for
//! record management. It owns the transient plaintext during a call and
//! never retains it: keys are derived, fields sealed or opened, and the
//! derived key is zeroized before the call returns.

use zeroize::Zeroize;

use crate::crypto::encryption::{open, seal};
use crate::crypto::kdf::{derive_key, generate_salt};
use crate::errors::{Result, VaultError};
use crate::store::{EncryptedRecord, RecordBrief, RecordRow, Store};

use super::record::{RecordInput, VaultRecord};

/// Orchestrates key derivation, sealing, and persistence.
pub struct VaultService<'a> {
    store: &'a Store,
}

impl<'a> VaultService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Seal and persist a new record. Returns the assigned record id.
    ///
    /// Validation runs before any cryptographic work. One fresh salt is
    /// generated for the record and every field is sealed independently
    /// under the same derived key, so list views can later decrypt the
    /// title and username without touching the password blob.
    pub fn save_record(
        &self,
        user_id: i64,
        master_passphrase: &str,
        input: &RecordInput,
    ) -> Result<i64> {
        validate_record_input(&input.title, &input.password)?;

        let salt = generate_salt();
        let mut key = derive_key(master_passphrase, &salt)?;

        let sealed = seal_fields(&key, input, &salt);

        // Zeroize the key before propagating any sealing error.
        key.zeroize();
        let record = sealed?;

        let id = self.store.insert_record(user_id, &record)?;
        tracing::debug!(record_id = id, user_id, "record sealed and stored");
        Ok(id)
    }

    /// Load and decrypt all records for a user.
    ///
    /// Each row's key is re-derived from that row's own salt. A row whose
    /// fields fail authentication under this passphrase is skipped rather
    /// than reported: a stale or wrong passphrase simply yields fewer (or
    /// zero) records. Store failures still propagate. Returned order is
    /// the store's row order.
    pub fn load_records(&self, user_id: i64, master_passphrase: &str) -> Result<Vec<VaultRecord>> {
        let rows = self.store.list_records_full(user_id)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            let mut key = derive_key(master_passphrase, &row.salt)?;
            let opened = open_row(&key, &row);
            key.zeroize();

            match opened {
                Ok(record) => records.push(record),
                Err(VaultError::DecryptionFailed) => {
                    tracing::warn!(record_id = row.id, "record failed authentication, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(records)
    }

    /// Decrypted `(title, username)` pairs for list views.
    ///
    /// Works from the brief row form, so password/2FA/website/notes
    /// ciphertext is never read, let alone decrypted. Same skip-on-failure
    /// semantics as `load_records`.
    pub fn get_overview(
        &self,
        user_id: i64,
        master_passphrase: &str,
    ) -> Result<Vec<(String, String)>> {
        let rows = self.store.list_records_brief(user_id)?;

        let mut overview = Vec::with_capacity(rows.len());
        for row in rows {
            let mut key = derive_key(master_passphrase, &row.salt)?;
            let opened = open_brief(&key, &row);
            key.zeroize();

            match opened {
                Ok(pair) => overview.push(pair),
                Err(VaultError::DecryptionFailed) => {
                    tracing::warn!(record_id = row.id, "record failed authentication, skipping");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(overview)
    }

    /// Delete a record by id. Pass-through to the store; `false` means the
    /// id did not exist. Authorization (an active session) is the caller's
    /// responsibility.
    pub fn delete_record(&self, record_id: i64) -> Result<bool> {
        let deleted = self.store.delete_record(record_id)?;
        if deleted {
            tracing::debug!(record_id, "record deleted");
        }
        Ok(deleted)
    }
}

/// Find a record by exact title and username among already-decrypted
/// records.
///
/// If several records share both fields, the first in sequence order wins;
/// ties are not disambiguated further.
pub fn find_record<'r>(
    records: &'r [VaultRecord],
    title: &str,
    username: &str,
) -> Option<&'r VaultRecord> {
    records
        .iter()
        .find(|r| r.title == title && r.username == username)
}

/// The only structural validation the core performs: title and password
/// must be non-empty. No strength policy is enforced here.
pub fn validate_record_input(title: &str, password: &str) -> Result<()> {
    if title.is_empty() || password.is_empty() {
        return Err(VaultError::Validation(
            "title and password are required".into(),
        ));
    }
    Ok(())
}

/// Seal every input field independently under one key.
fn seal_fields(key: &[u8], input: &RecordInput, salt: &[u8]) -> Result<EncryptedRecord> {
    Ok(EncryptedRecord {
        title: seal(key, input.title.as_bytes())?,
        username: seal(key, input.username.as_bytes())?,
        password: seal(key, input.password.as_bytes())?,
        two_fa_key: seal(key, input.two_fa_key.as_bytes())?,
        website: seal(key, input.website.as_bytes())?,
        notes: seal(key, input.notes.as_bytes())?,
        salt: salt.to_vec(),
    })
}

/// Open just the title and username of a brief row.
fn open_brief(key: &[u8], row: &RecordBrief) -> Result<(String, String)> {
    Ok((
        open_string(key, &row.title)?,
        open_string(key, &row.username)?,
    ))
}

/// Open every field of a stored row into a plaintext record.
fn open_row(key: &[u8], row: &RecordRow) -> Result<VaultRecord> {
    Ok(VaultRecord {
        id: row.id,
        title: open_string(key, &row.title)?,
        username: open_string(key, &row.username)?,
        password: open_string(key, &row.password)?,
        two_fa_key: open_string(key, &row.two_fa_key)?,
        website: open_string(key, &row.website)?,
        notes: open_string(key, &row.notes)?,
    })
}

/// Open one sealed field and decode it as UTF-8.
///
/// Fields are always sealed from valid UTF-8, so a decode failure means the
/// row is corrupt; it is folded into `DecryptionFailed` so the caller's
/// skip logic treats it like any other failed row.
fn open_string(key: &[u8], sealed: &[u8]) -> Result<String> {
    let plaintext = open(key, sealed)?;
    String::from_utf8(plaintext).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        VaultError::DecryptionFailed
    })
}
