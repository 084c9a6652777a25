//! Row types returned by the store.
//!
//! Everything here is opaque bytes plus identifiers: the store has no idea
//! which cipher produced the blobs it holds.

/// A registered user account.
///
/// `password_hash` authenticates application login; it is unrelated to the
/// master passphrase that encrypts record fields.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// A record ready for insertion: six independently sealed fields plus the
/// one salt they were all sealed under.
#[derive(Debug, Clone)]
pub struct EncryptedRecord {
    pub title: Vec<u8>,
    pub username: Vec<u8>,
    pub password: Vec<u8>,
    pub two_fa_key: Vec<u8>,
    pub website: Vec<u8>,
    pub notes: Vec<u8>,
    pub salt: Vec<u8>,
}

/// A full stored record row.
#[derive(Debug, Clone)]
pub struct RecordRow {
    pub id: i64,
    pub title: Vec<u8>,
    pub username: Vec<u8>,
    pub password: Vec<u8>,
    pub two_fa_key: Vec<u8>,
    pub website: Vec<u8>,
    pub notes: Vec<u8>,
    pub salt: Vec<u8>,
}

/// The brief form used by list views: just enough ciphertext to decrypt a
/// title and username, without transferring password/2FA/notes blobs.
#[derive(Debug, Clone)]
pub struct RecordBrief {
    pub id: i64,
    pub title: Vec<u8>,
    pub username: Vec<u8>,
    pub salt: Vec<u8>,
}
