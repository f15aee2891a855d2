//! The snippet store: sole gateway to the persisted snippet collection.
//!
//! The collection lives in one slot as a JSON array, newest first. Reads and
//! writes are lenient by default: a missing or unreadable slot loads as an
//! empty collection, and a failed write is logged and otherwise ignored.
//! `try_*` variants surface those errors for callers that care.
//!
//! `create` serializes its read-modify-write behind a mutex, so callers
//! sharing one store never drop each other's additions. There is no
//! synchronization across processes: two stores pointed at the same slot
//! race, and the last write wins.

use std::sync::{Mutex, PoisonError};

use snipbox_core::models::category::CategoryFilter;
use snipbox_core::models::snippet::{NewSnippet, Snippet};
use snipbox_core::storage_keys;
use uuid::Uuid;

use crate::backend::KeyValueStore;
use crate::config::StoreConfig;
use crate::error::StorageError;
use crate::file::FileStorage;
use crate::state;

pub struct SnippetStore<S> {
    backend: S,
    key: String,
    write_lock: Mutex<()>,
}

impl SnippetStore<FileStorage> {
    /// File-backed store as described by `config`.
    pub fn open(config: &StoreConfig) -> Result<Self, StorageError> {
        let root = config.resolve_data_dir()?;
        tracing::debug!(root = %root.display(), key = %config.storage_key, "opening snippet store");
        Ok(Self::with_key(FileStorage::new(root), config.storage_key.clone()))
    }
}

impl<S: KeyValueStore> SnippetStore<S> {
    /// Store using the default `snippets_data` slot.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, storage_keys::SNIPPETS)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Every persisted snippet, newest first. Never fails: read and parse
    /// errors are logged and yield an empty collection.
    pub fn load_all(&self) -> Vec<Snippet> {
        match self.try_load_all() {
            Ok(snippets) => snippets,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to load snippets, starting empty");
                Vec::new()
            }
        }
    }

    /// Like [`load_all`](Self::load_all) but reports unreadable or corrupt
    /// data instead of hiding it. An absent slot is still an empty collection.
    pub fn try_load_all(&self) -> Result<Vec<Snippet>, StorageError> {
        match state::load_state::<Vec<Snippet>>(&self.backend, &self.key)? {
            Some(snippets) => {
                tracing::debug!(key = %self.key, count = snippets.len(), "snippets loaded");
                Ok(snippets)
            }
            None => {
                tracing::debug!(key = %self.key, "no stored snippets");
                Ok(Vec::new())
            }
        }
    }

    /// Replace the stored collection. Best-effort: a failed write is logged
    /// and the caller carries on with its in-memory state.
    pub fn persist(&self, snippets: &[Snippet]) {
        if let Err(e) = self.try_persist(snippets) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist snippets");
        }
    }

    pub fn try_persist(&self, snippets: &[Snippet]) -> Result<(), StorageError> {
        state::save_state(&self.backend, &self.key, snippets)?;
        tracing::debug!(key = %self.key, count = snippets.len(), "snippets persisted");
        Ok(())
    }

    /// Stamp `input` with a fresh id and the current time, prepend it to the
    /// stored collection and persist. The new snippet is returned even if
    /// the write fails.
    pub fn create(&self, input: NewSnippet) -> Snippet {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let snippet = input.into_snippet(Uuid::new_v4(), jiff::Timestamp::now());
        let mut snippets = self.load_all();
        snippets.insert(0, snippet.clone());
        self.persist(&snippets);

        tracing::info!(
            id = %snippet.id,
            category = %snippet.category,
            total = snippets.len(),
            "snippet created"
        );
        snippet
    }

    /// Stored snippets matching `filter`, in stored order.
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<Snippet> {
        let snippets = self.load_all();
        if filter == CategoryFilter::All {
            return snippets;
        }
        snippets
            .into_iter()
            .filter(|s| filter.matches(s.category))
            .collect()
    }
}
