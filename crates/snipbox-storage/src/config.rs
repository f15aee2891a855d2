use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snipbox_core::storage_keys;

use crate::error::StorageError;
use crate::file::FileStorage;

/// Where and under which key the snippet collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub storage_key: String,
    /// Directory for the file backend. `None` means the platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: storage_keys::SNIPPETS.to_string(),
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StorageError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let config: StoreConfig = serde_json::from_str(&contents)?;
        tracing::debug!(path = %path.display(), key = %config.storage_key, "store config loaded");
        Ok(config)
    }

    pub fn resolve_data_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStorage::default_root(),
        }
    }
}
