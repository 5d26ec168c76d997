use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{StoreConfig, StoreResult, StoreType};

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Record store configuration
    pub store: StoreConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Create a configuration with default values (SQLite store, no path)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration backed by the in-memory store
    pub fn in_memory() -> Self {
        Self {
            store: StoreConfig {
                store_type: StoreType::Memory,
                path: None,
                create_if_missing: true,
            },
        }
    }

    /// Set the store configuration
    pub fn with_store(mut self, store: StoreConfig) -> Self {
        self.store = store;
        self
    }

    /// Set the store backend
    pub fn with_store_type(mut self, store_type: StoreType) -> Self {
        self.store.store_type = store_type;
        self
    }

    /// Set the store path
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.store.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether a missing database file is created on open
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.store.create_if_missing = create;
        self
    }

    /// Read a configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Write the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> StoreResult<PathBuf> {
        let path = path.as_ref().to_path_buf();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
