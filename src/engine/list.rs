//! One document list instance: documents, filter store and cached view.
//!
//! [`DocumentList`] ties the pieces together the way a rendered list on a page
//! uses them: the document collection is fixed for the lifetime of the list,
//! the store owns the filter state, and [`view`](DocumentList::view) re-derives
//! lazily whenever the state has changed since the last request.

use super::cache::DerivationCache;
use super::view::{category_counts, DerivedView};
use crate::app::{handle_event, Event, FilterState, FilterStore, InitialFilter};
use crate::domain::{Category, Document, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A filterable, sortable list over a fixed document collection.
///
/// # Example
///
/// ```rust
/// use doclist::app::InitialFilter;
/// use doclist::domain::{Category, Document};
/// use doclist::engine::DocumentList;
///
/// let mut list = DocumentList::new(
///     vec![
///         Document::new("1", "Rollover Form", Category::Form, 2025, "/1"),
///         Document::new("2", "Annual Report 2024", Category::Report, 2024, "/2"),
///     ],
///     InitialFilter::default(),
/// );
///
/// assert_eq!(list.view().ids(), ["2", "1"]);
/// list.store_mut().toggle_category(Category::Form);
/// assert_eq!(list.view().ids(), ["1"]);
/// ```
#[derive(Debug)]
pub struct DocumentList {
    documents: Arc<[Document]>,
    store: FilterStore,
    cache: DerivationCache,
}

impl DocumentList {
    /// Creates a list over `documents` with a store seeded from `initial`.
    #[must_use]
    pub fn new(documents: impl Into<Arc<[Document]>>, initial: InitialFilter) -> Self {
        Self::with_store(documents, FilterStore::new(initial))
    }

    /// Creates a list around an existing store (for example one built by
    /// [`initialize`](crate::initialize)).
    #[must_use]
    pub fn with_store(documents: impl Into<Arc<[Document]>>, store: FilterStore) -> Self {
        let documents = documents.into();
        tracing::debug!(documents = documents.len(), "document list created");
        Self {
            documents,
            store,
            cache: DerivationCache::new(),
        }
    }

    /// The full, unfiltered collection.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub const fn store(&self) -> &FilterStore {
        &self.store
    }

    /// Mutable access to the store, for applying control input.
    pub fn store_mut(&mut self) -> &mut FilterStore {
        &mut self.store
    }

    /// Shorthand for [`FilterStore::get_state`].
    #[must_use]
    pub fn state(&self) -> FilterState {
        self.store.get_state()
    }

    /// Applies a control event to this list's store.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`handle_event`]; the state is
    /// unchanged in that case.
    pub fn apply(&mut self, event: &Event) -> Result<bool> {
        handle_event(&mut self.store, event)
    }

    /// Returns the view for the current state, deriving only if it changed.
    pub fn view(&mut self) -> &DerivedView {
        self.cache.get_or_derive(&self.documents, self.store.state())
    }

    /// Per-category counts under the current query.
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        category_counts(&self.documents, self.store.state())
    }
}
