use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::backend::KeyValueStore;
use crate::error::StorageError;

/// In-process backend. Used by tests and by hosts with no durable storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
    /// Maximum bytes (key + value) a single slot may hold.
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes larger than `bytes`, like a browser over its storage quota.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// A backend that fails every call, like storage disabled by the host.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Write directly, bypassing the quota. Handy for seeding fixtures.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
    }

    fn slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable("storage is disabled".to_string()));
        }
        self.slots
            .lock()
            .map_err(|_| StorageError::Unavailable("storage lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots()?;

        let needed = key.len() + value.len();
        if let Some(limit) = self.quota.filter(|&limit| needed > limit) {
            return Err(StorageError::QuotaExceeded {
                key: key.to_string(),
                needed,
                limit,
            });
        }

        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
