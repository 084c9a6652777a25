use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VaultError};

/// Host-level configuration, loaded from `credvault.toml`.
///
/// Every field has a default so the vault works out-of-the-box without any
/// config file. Crypto parameters are intentionally not configurable: the
/// KDF iteration count is baked into the crate because stored records can
/// only be re-opened with the parameters they were sealed under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Database file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,
}

fn default_database_file() -> String {
    "credvault.db".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the data directory.
    const FILE_NAME: &'static str = "credvault.toml";

    /// Load settings from `<data_dir>/credvault.toml`.
    ///
    /// If the file does not exist, defaults are returned. If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        toml::from_str(&contents).map_err(|e| {
            VaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })
    }

    /// Build the full path to the database file.
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }
}
