//! SQLite persistence for user accounts and encrypted records.
//!
//! The store is pure persistence with no cryptographic awareness: record
//! fields arrive and leave as opaque byte blobs alongside the salt needed
//! to re-derive their key. A fresh connection is opened per call, so
//! concurrent callers never share a cursor; each operation is atomic on
//! its own.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use subtle::ConstantTimeEq;

use crate::errors::{Result, VaultError};

pub mod models;

pub use models::{EncryptedRecord, RecordBrief, RecordRow, UserRow};

/// Handle to the on-disk database. Cheap to clone conceptually (it only
/// holds the path); connections are opened per operation.
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        let conn = store.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS user (
                id       INTEGER PRIMARY KEY AUTOINCREMENT,
                email    TEXT UNIQUE NOT NULL,
                username TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS passwords (
                id         INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id    INTEGER,
                title      BLOB NOT NULL,
                username   BLOB NOT NULL,
                password   BLOB NOT NULL,
                two_fa_key BLOB,
                website    BLOB,
                notes      BLOB,
                salt       BLOB NOT NULL
            );",
        )?;

        // The database holds password hashes and ciphertext; keep it
        // owner-only like any other secret material.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            let _ = std::fs::set_permissions(&store.path, perms);
        }

        Ok(store)
    }

    /// Returns the path to the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).map_err(VaultError::Store)
    }

    // ------------------------------------------------------------------
    // User accounts
    // ------------------------------------------------------------------

    /// Insert a new user row. Returns the assigned id.
    ///
    /// A duplicate email or username maps to `DuplicateUser`; any other
    /// SQLite failure surfaces as `Store`.
    pub fn create_user(&self, email: &str, username: &str, password_hash: &str) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO user (email, username, password) VALUES (?1, ?2, ?3)",
            params![email, username, password_hash],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                VaultError::DuplicateUser
            }
            other => VaultError::Store(other),
        })?;
        Ok(conn.last_insert_rowid())
    }

    /// Look up a user by email or username and verify the login hash.
    ///
    /// The identifier can match up to two rows: one user by username and
    /// another by email (both columns are unique, but nothing stops one
    /// user's email equalling another user's username). Every candidate is
    /// hash-checked in constant time and the matching row wins, so such a
    /// collision never locks either user out. Returns `None` when no
    /// candidate's hash matches; "unknown user" and "wrong password" are
    /// not distinguished.
    pub fn find_user_by_credentials(
        &self,
        identifier: &str,
        password_hash: &str,
    ) -> Result<Option<UserRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, email, username, password FROM user
             WHERE username = ?1 OR email = ?1",
        )?;

        let candidates = stmt.query_map([identifier], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                username: row.get(2)?,
                password_hash: row.get(3)?,
            })
        })?;

        for candidate in candidates {
            let user = candidate?;
            if bool::from(
                user.password_hash
                    .as_bytes()
                    .ct_eq(password_hash.as_bytes()),
            ) {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    // ------------------------------------------------------------------
    // Encrypted records
    // ------------------------------------------------------------------

    /// Insert a sealed record for `user_id`. Returns the assigned row id.
    pub fn insert_record(&self, user_id: i64, record: &EncryptedRecord) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO passwords
                 (user_id, title, username, password, two_fa_key, website, notes, salt)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                user_id,
                record.title,
                record.username,
                record.password,
                record.two_fa_key,
                record.website,
                record.notes,
                record.salt,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// All stored rows for a user, every field included.
    pub fn list_records_full(&self, user_id: i64) -> Result<Vec<RecordRow>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, username, password, two_fa_key, website, notes, salt
             FROM passwords WHERE user_id = ?1",
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(RecordRow {
                id: row.get(0)?,
                title: row.get(1)?,
                username: row.get(2)?,
                password: row.get(3)?,
                two_fa_key: row.get(4)?,
                website: row.get(5)?,
                notes: row.get(6)?,
                salt: row.get(7)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(VaultError::Store)
    }

    /// The brief form for list views: id, title/username ciphertext, salt.
    pub fn list_records_brief(&self, user_id: i64) -> Result<Vec<RecordBrief>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, title, username, salt FROM passwords WHERE user_id = ?1",
        )?;

        let rows = stmt.query_map([user_id], |row| {
            Ok(RecordBrief {
                id: row.get(0)?,
                title: row.get(1)?,
                username: row.get(2)?,
                salt: row.get(3)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(VaultError::Store)
    }

    /// Delete a record by id. Returns `false` if no such row existed;
    /// deleting the same id twice is a defined no-op, not an error.
    pub fn delete_record(&self, record_id: i64) -> Result<bool> {
        let conn = self.connect()?;
        let affected = conn.execute("DELETE FROM passwords WHERE id = ?1", [record_id])?;
        Ok(affected > 0)
    }
}
