//! Memoization of derived views.
//!
//! Deriving is cheap, but a presentation layer may ask for the view many times
//! between state changes. [`DerivationCache`] remembers the last result keyed by
//! the identity of the shared document collection and the filter state value.
//! A hit returns exactly what [`DerivedView::compute`] would.

use super::view::DerivedView;
use crate::app::FilterState;
use crate::domain::Document;
use std::sync::Arc;

#[derive(Debug)]
struct Entry {
    documents: Arc<[Document]>,
    state: FilterState,
    view: DerivedView,
}

/// Single-entry cache of the most recent derivation.
#[derive(Debug, Default)]
pub struct DerivationCache {
    entry: Option<Entry>,
    hits: u64,
    misses: u64,
}

impl DerivationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the view for `(documents, state)`, deriving only on a miss.
    ///
    /// Collections are compared by pointer, so a different `Arc` holding equal
    /// documents is a miss. The `Arc` keeps the cached collection immutable.
    pub fn get_or_derive(&mut self, documents: &Arc<[Document]>, state: &FilterState) -> &DerivedView {
        let hit = self
            .entry
            .as_ref()
            .is_some_and(|e| Arc::ptr_eq(&e.documents, documents) && e.state == *state);

        let entry = match self.entry.take() {
            Some(entry) if hit => {
                self.hits += 1;
                tracing::trace!(hits = self.hits, "derivation cache hit");
                entry
            }
            _ => {
                self.misses += 1;
                tracing::trace!(misses = self.misses, "derivation cache miss");
                Entry {
                    documents: Arc::clone(documents),
                    state: state.clone(),
                    view: DerivedView::compute(documents, state),
                }
            }
        };

        &self.entry.insert(entry).view
    }

    /// Drops the cached view.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Returns `(hits, misses)` since creation.
    #[must_use]
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
