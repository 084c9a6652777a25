//! Vault module: the orchestration layer a host application calls.
//!
//! This module provides:
//! - `VaultRecord` and `RecordInput` types (`record`)
//! - `VaultService` tying key derivation, sealing, and persistence
//!   together (`service`)

pub mod record;
pub mod service;

// Re-export the most commonly used items.
pub use record::{RecordInput, VaultRecord};
pub use service::{find_record, validate_record_input, VaultService};
