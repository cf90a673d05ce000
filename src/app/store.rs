//! Filter state store.
//!
//! [`FilterStore`] is the single source of truth for user-controlled list
//! filtering. It owns one [`FilterState`], applies the three mutations the
//! controls can issue (set query, toggle category, set sort mode), and notifies
//! at most one listener synchronously after each mutation.
//!
//! # Mutation Model
//!
//! Every mutation builds the next state from a clone of the current one and
//! swaps it in, so a listener always observes a complete state and readers
//! holding a [`get_state`](FilterStore::get_state) clone are unaffected.
//!
//! ```text
//! set_query / toggle_category / set_sort_mode
//!        │
//!        ▼
//!   next = current.clone(); mutate(next)
//!        │
//!        ▼
//!   current = next  ──►  listener(&current)
//! ```
//!
//! The listener receives `&FilterState` while the store is mutably borrowed,
//! so it cannot call back into the store's mutators.
//!
//! # Example
//!
//! ```rust
//! use doclist::app::{FilterStore, SortMode};
//! use doclist::domain::Category;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//!
//! let mut store = FilterStore::with_defaults();
//! store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
//!
//! store.set_query("annual");
//! store.toggle_category(Category::Report);
//! store.set_sort_mode(SortMode::YearDesc);
//!
//! assert_eq!(seen.borrow().len(), 3);
//! assert_eq!(store.get_state().sort, SortMode::YearDesc);
//! ```

use super::modes::SortMode;
use super::state::{FilterState, InitialFilter};
use crate::domain::{Category, Result};
use std::fmt;

/// Callback invoked with the full new state after every mutation.
pub type Listener = Box<dyn FnMut(&FilterState)>;

/// Owner of the live [`FilterState`].
pub struct FilterStore {
    state: FilterState,
    listener: Option<Listener>,
}

impl fmt::Debug for FilterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStore")
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl FilterStore {
    /// Creates a store seeded from caller-supplied initial values.
    #[must_use]
    pub fn new(initial: InitialFilter) -> Self {
        let state = initial.into_state();
        tracing::debug!(
            query = %state.query,
            categories = ?state.categories,
            sort = %state.sort,
            "filter store created"
        );
        Self {
            state,
            listener: None,
        }
    }

    /// Creates a store with an empty query, no category filter and the default sort.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(InitialFilter::default())
    }

    /// Registers the change listener, replacing any previous one.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&FilterState) + 'static,
    {
        if self.listener.is_some() {
            tracing::debug!("replacing existing filter listener");
        }
        self.listener = Some(Box::new(listener));
    }

    /// Removes the change listener, if any.
    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    /// Returns a copy of the current state.
    ///
    /// Mutating the returned value has no effect on the store.
    #[must_use]
    pub fn get_state(&self) -> FilterState {
        self.state.clone()
    }

    /// Borrows the current state without copying.
    #[must_use]
    pub const fn state(&self) -> &FilterState {
        &self.state
    }

    /// Replaces the query verbatim and notifies the listener.
    ///
    /// No trimming happens here; the derivation step trims when matching.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(query = %text, "set query");
        self.commit(|next| next.query = text);
    }

    /// Adds `category` to the selection if absent, removes it if present.
    ///
    /// Toggling the same category twice restores the original selection.
    pub fn toggle_category(&mut self, category: Category) {
        self.commit(|next| {
            let selected = if next.categories.remove(&category) {
                false
            } else {
                next.categories.insert(category);
                true
            };
            tracing::debug!(%category, selected, "toggle category");
        });
    }

    /// Replaces the sort mode and notifies the listener.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        tracing::debug!(sort = %mode, "set sort mode");
        self.commit(|next| next.sort = mode);
    }

    /// Clears the query and category selection, keeping the sort mode.
    ///
    /// Notifies the listener once.
    pub fn clear_filters(&mut self) {
        tracing::debug!("clear filters");
        self.commit(|next| {
            next.query.clear();
            next.categories.clear();
        });
    }

    /// Parses `raw` as a category and toggles it.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::InvalidCategory`](crate::domain::DoclistError::InvalidCategory)
    /// if `raw` is not a known category. The state is left unchanged and the
    /// listener is not called.
    pub fn toggle_category_str(&mut self, raw: &str) -> Result<()> {
        let category = raw.parse::<Category>().map_err(|e| {
            tracing::warn!(value = %raw, error = %e, "rejected category toggle");
            e
        })?;
        self.toggle_category(category);
        Ok(())
    }

    /// Parses `raw` as a sort mode and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::InvalidSortMode`](crate::domain::DoclistError::InvalidSortMode)
    /// if `raw` is not a known sort mode. The state is left unchanged and the
    /// listener is not called.
    pub fn set_sort_mode_str(&mut self, raw: &str) -> Result<()> {
        let mode = raw.parse::<SortMode>().map_err(|e| {
            tracing::warn!(value = %raw, error = %e, "rejected sort mode");
            e
        })?;
        self.set_sort_mode(mode);
        Ok(())
    }

    fn commit(&mut self, mutate: impl FnOnce(&mut FilterState)) {
        let mut next = self.state.clone();
        mutate(&mut next);
        self.state = next;

        if let Some(listener) = self.listener.as_mut() {
            listener(&self.state);
        }
    }
}
