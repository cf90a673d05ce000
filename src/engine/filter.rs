//! Text and category predicates.
//!
//! Both predicates are pure. A document is visible when it passes both.

use crate::app::FilterState;
use crate::domain::{Category, Document};
use std::collections::BTreeSet;

/// Normalizes a raw query for matching: trimmed and lower-cased.
///
/// Returns `None` when nothing is left, meaning "no text filter".
#[must_use]
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Builds the lower-cased text a query is matched against.
///
/// Title, description (when present), category label and tags, joined by
/// single spaces.
#[must_use]
pub fn haystack(doc: &Document) -> String {
    let mut text = String::with_capacity(doc.title.len() + 32);
    text.push_str(&doc.title);
    if let Some(description) = &doc.description {
        text.push(' ');
        text.push_str(description);
    }
    text.push(' ');
    text.push_str(doc.category.as_str());
    if !doc.tags.is_empty() {
        text.push(' ');
        text.push_str(&doc.tags.join(" "));
    }
    text.to_lowercase()
}

/// Returns `true` if the document contains `query` as a substring.
///
/// `query` must already be normalized with [`normalize_query`]. This is plain
/// containment; there is no tokenizing or word-boundary matching.
#[must_use]
pub fn matches_query(doc: &Document, query: &str) -> bool {
    haystack(doc).contains(query)
}

/// Returns `true` if `selected` is empty or contains the document's category.
#[must_use]
pub fn matches_categories(doc: &Document, selected: &BTreeSet<Category>) -> bool {
    selected.is_empty() || selected.contains(&doc.category)
}

/// Returns `true` if the document passes both filters of `state`.
#[must_use]
pub fn is_visible(doc: &Document, state: &FilterState) -> bool {
    let text_ok = normalize_query(&state.query).map_or(true, |q| matches_query(doc, &q));
    text_ok && matches_categories(doc, &state.categories)
}
