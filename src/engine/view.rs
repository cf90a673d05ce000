//! Derivation of the visible document list.
//!
//! [`derive`] is the core transform: `(documents, state) → ordered visible
//! subset`. It never mutates its inputs, and equal inputs always give equal
//! output. [`DerivedView`] packages the result with the counts a list header
//! needs.

use super::filter::{matches_categories, matches_query, normalize_query};
use super::sort::sort_documents;
use crate::app::FilterState;
use crate::domain::{Category, Document};
use std::collections::BTreeMap;

/// Returns the documents visible under `state`, in display order.
///
/// # Algorithm
///
/// 1. **Text filter**: if the trimmed, lower-cased query is non-empty, keep
///    documents whose searchable text contains it
/// 2. **Category filter**: if any categories are selected, keep documents in
///    one of them
/// 3. **Sort**: stable sort by `state.sort`
///
/// Runs in O(n log n). An empty input gives an empty output.
///
/// # Example
///
/// ```rust
/// use doclist::app::{FilterState, SortMode};
/// use doclist::domain::{Category, Document};
/// use doclist::engine::derive;
///
/// let docs = vec![
///     Document::new("1", "Rollover Form", Category::Form, 2025, "/1"),
///     Document::new("2", "Annual Report 2024", Category::Report, 2024, "/2"),
/// ];
/// let state = FilterState { query: "report".into(), ..Default::default() };
///
/// let visible = derive(&docs, &state);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, "2");
/// ```
#[must_use]
pub fn derive<'a>(documents: &'a [Document], state: &FilterState) -> Vec<&'a Document> {
    let _span = tracing::debug_span!(
        "derive",
        total = documents.len(),
        query_len = state.query.len(),
        categories = state.categories.len(),
        sort = %state.sort
    )
    .entered();

    let query = normalize_query(&state.query);

    let mut visible: Vec<&Document> = documents
        .iter()
        .filter(|doc| query.as_deref().map_or(true, |q| matches_query(doc, q)))
        .filter(|doc| matches_categories(doc, &state.categories))
        .collect();

    sort_documents(&mut visible, state.sort);

    tracing::debug!(visible = visible.len(), "derivation complete");
    visible
}

/// Per-category count of documents passing the text filter alone.
///
/// The category selection is deliberately ignored so toggle buttons can show
/// how many documents each would contribute. Every category is present in the
/// result, zero counts included.
///
/// ```
/// use doclist::app::FilterState;
/// use doclist::domain::{Category, Document};
/// use doclist::engine::category_counts;
///
/// let docs = vec![Document::new("1", "Rollover Form", Category::Form, 2025, "/1")];
/// let counts = category_counts(&docs, &FilterState::default());
/// assert_eq!(counts[&Category::Form], 1);
/// assert_eq!(counts[&Category::Pds], 0);
/// ```
#[must_use]
pub fn category_counts(documents: &[Document], state: &FilterState) -> BTreeMap<Category, usize> {
    let query = normalize_query(&state.query);
    let mut counts: BTreeMap<Category, usize> = Category::ALL.iter().map(|c| (*c, 0)).collect();

    for doc in documents {
        if query.as_deref().map_or(true, |q| matches_query(doc, q)) {
            *counts.entry(doc.category).or_insert(0) += 1;
        }
    }

    counts
}

/// The visible documents for one filter state, with counts.
///
/// Recomputed whenever the state changes; never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView {
    /// Visible documents in display order.
    pub documents: Vec<Document>,

    /// Size of the full collection.
    pub total: usize,

    /// Number of visible documents.
    pub visible: usize,
}

impl DerivedView {
    /// Derives the view for `state` over `documents`.
    #[must_use]
    pub fn compute(documents: &[Document], state: &FilterState) -> Self {
        let visible: Vec<Document> = derive(documents, state).into_iter().cloned().collect();
        Self {
            total: documents.len(),
            visible: visible.len(),
            documents: visible,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the visible document ids in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.id.as_str()).collect()
    }
}
