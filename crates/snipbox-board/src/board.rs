use std::collections::HashMap;

use jiff::{SignedDuration, Timestamp};
use snipbox_core::models::category::CategoryFilter;
use snipbox_core::models::counts::CategoryCounts;
use snipbox_core::models::snippet::Snippet;
use snipbox_storage::backend::KeyValueStore;
use snipbox_storage::snippets::SnippetStore;
use uuid::Uuid;

use crate::empty_state::EmptyState;
use crate::error::FormError;
use crate::form::SnippetForm;

/// How long a card keeps showing its "copied" confirmation.
pub const COPIED_FEEDBACK: SignedDuration = SignedDuration::from_secs(2);

/// View state over a [`SnippetStore`].
///
/// Holds a read-only cached copy of the collection plus the active filter.
/// The store stays the only writer; the board just mirrors what it created.
pub struct Board<S> {
    store: SnippetStore<S>,
    snippets: Vec<Snippet>,
    active_filter: CategoryFilter,
    loading: bool,
    /// When each card's code was last copied.
    copied: HashMap<Uuid, Timestamp>,
}

impl<S: KeyValueStore> Board<S> {
    pub fn new(store: SnippetStore<S>) -> Self {
        Self {
            store,
            snippets: Vec::new(),
            active_filter: CategoryFilter::All,
            loading: true,
            copied: HashMap::new(),
        }
    }

    /// Load the collection into the cache. Only the first call reads.
    pub fn mount(&mut self) {
        if !self.loading {
            return;
        }
        self.snippets = self.store.load_all();
        self.loading = false;
        tracing::debug!(count = self.snippets.len(), "board mounted");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn store(&self) -> &SnippetStore<S> {
        &self.store
    }

    /// The whole cached collection, newest first.
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.active_filter = filter;
    }

    /// Cached snippets selected by the active filter.
    pub fn visible(&self) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| self.active_filter.matches(s.category))
            .collect()
    }

    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts::from_snippets(&self.snippets)
    }

    pub fn heading(&self) -> String {
        match self.active_filter.category() {
            Some(category) => format!("My Snippets - {category}"),
            None => "My Snippets".to_string(),
        }
    }

    pub fn total_label(&self) -> String {
        match self.snippets.len() {
            1 => "1 snippet".to_string(),
            n => format!("{n} snippets"),
        }
    }

    /// `None` while loading or when the active filter selects something.
    pub fn empty_state(&self) -> Option<EmptyState> {
        let any_visible = self
            .snippets
            .iter()
            .any(|s| self.active_filter.matches(s.category));
        if self.loading || any_visible {
            return None;
        }
        Some(EmptyState::for_filter(self.active_filter))
    }

    /// Validate the form, create the snippet through the store and put it
    /// at the front of the cache. The form is cleared on success and left
    /// untouched on error.
    pub fn submit(&mut self, form: &mut SnippetForm) -> Result<Snippet, FormError> {
        let input = form.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "snippet form rejected");
        })?;

        self.mount();
        let snippet = self.store.create(input);
        self.snippets.insert(0, snippet.clone());
        form.reset();
        Ok(snippet)
    }

    /// Code payload of a cached snippet, for the host to put on its
    /// clipboard. Marks the card as copied. `None` if no cached snippet has
    /// that id.
    pub fn copy_code(&mut self, id: Uuid) -> Option<&str> {
        self.copy_code_at(id, Timestamp::now())
    }

    pub fn copy_code_at(&mut self, id: Uuid, now: Timestamp) -> Option<&str> {
        let Some(index) = self.snippets.iter().position(|s| s.id == id) else {
            tracing::warn!(%id, "copy requested for unknown snippet");
            return None;
        };
        self.copied.insert(id, now);
        tracing::debug!(%id, "snippet code copied");
        Some(&self.snippets[index].code)
    }

    /// Whether the card still shows its copied confirmation.
    pub fn is_copied(&self, id: Uuid) -> bool {
        self.is_copied_at(id, Timestamp::now())
    }

    pub fn is_copied_at(&self, id: Uuid, now: Timestamp) -> bool {
        self.copied
            .get(&id)
            .is_some_and(|&at| now.duration_since(at) < COPIED_FEEDBACK)
    }
}
