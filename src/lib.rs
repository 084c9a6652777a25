//! CredVault, a local encrypted credential vault.
//!
//! Stores per-user login records (title, username, password, optional TOTP
//! seed, website, notes) in a local SQLite database. Every field is sealed
//! with AES-256-GCM under a key derived from the user's master passphrase
//! via PBKDF2-HMAC-SHA256 and a fresh per-record salt, so only someone
//! holding the passphrase can read the stored values back.
//!
//! The crate exposes a small service surface for a host application:
//! - [`auth::AuthService`]: registration and login-credential checks
//! - [`vault::VaultService`]: save, load, overview, find, delete records
//! - [`session::Session`]: the currently authenticated identity
//!
//! There is no passphrase recovery: losing the master passphrase makes all
//! protected fields permanently unrecoverable.

pub mod auth;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod session;
pub mod store;
pub mod vault;
