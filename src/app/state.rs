//! Filter state value types.
//!
//! [`FilterState`] is the three-field value that drives list derivation: the
//! free-text query, the selected categories and the sort mode. It is a plain
//! value. The [`FilterStore`](crate::app::FilterStore) owns the live copy and
//! replaces it wholesale on every mutation; everything else sees clones.
//!
//! [`InitialFilter`] is the partial seed a caller may supply when creating a
//! store. Unset fields fall back to the defaults.

use super::modes::SortMode;
use crate::domain::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current user-controlled filtering and sorting.
///
/// The category set can only hold members of the closed [`Category`] enum, and
/// the query is never absent: the empty string means "no text filter". An
/// empty category set means "no category filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query, stored verbatim (trimming happens at derivation time).
    #[serde(default)]
    pub query: String,

    /// Selected categories; empty shows every category.
    #[serde(default)]
    pub categories: BTreeSet<Category>,

    /// Active ordering.
    #[serde(default)]
    pub sort: SortMode,
}

impl FilterState {
    /// Returns `true` if neither the query nor the category filter excludes anything.
    ///
    /// ```
    /// use doclist::app::FilterState;
    ///
    /// let mut state = FilterState::default();
    /// assert!(state.is_unfiltered());
    /// state.query = "   ".to_string();
    /// assert!(state.is_unfiltered());
    /// ```
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.categories.is_empty()
    }

    /// Returns `true` if `category` is currently selected.
    #[must_use]
    pub fn is_selected(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}

/// Optional seed values for a new store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialFilter {
    pub query: Option<String>,
    pub categories: Option<BTreeSet<Category>>,
    pub sort: Option<SortMode>,
}

impl InitialFilter {
    /// Resolves the seed into a full state, filling gaps with defaults.
    ///
    /// ```
    /// use doclist::app::{FilterState, InitialFilter, SortMode};
    ///
    /// let seed = InitialFilter { sort: Some(SortMode::Recency), ..Default::default() };
    /// let state = seed.into_state();
    /// assert_eq!(state.sort, SortMode::Recency);
    /// assert!(state.query.is_empty());
    /// ```
    #[must_use]
    pub fn into_state(self) -> FilterState {
        FilterState {
            query: self.query.unwrap_or_default(),
            categories: self.categories.unwrap_or_default(),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

impl From<FilterState> for InitialFilter {
    fn from(state: FilterState) -> Self {
        Self {
            query: Some(state.query),
            categories: Some(state.categories),
            sort: Some(state.sort),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_seed_yields_defaults() {
        assert_eq!(InitialFilter::default().into_state(), FilterState::default());
    }

    #[test]
    fn seed_round_trips_through_state() {
        let state = FilterState {
            query: "fees".to_string(),
            categories: BTreeSet::from([Category::Pds, Category::Guide]),
            sort: SortMode::YearDesc,
        };
        assert_eq!(InitialFilter::from(state.clone()).into_state(), state);
    }

    #[test]
    fn selected_categories_are_reported() {
        let state = FilterState {
            categories: BTreeSet::from([Category::Form]),
            ..FilterState::default()
        };
        assert!(state.is_selected(Category::Form));
        assert!(!state.is_selected(Category::Report));
        assert!(!state.is_unfiltered());
    }

    #[test]
    fn deserializes_partial_state() {
        let state: FilterState = serde_json::from_str(r#"{"sort":"recency"}"#).unwrap();
        assert_eq!(state.sort, SortMode::Recency);
        assert!(state.categories.is_empty());
    }
}
