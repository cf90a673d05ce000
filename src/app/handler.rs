//! Event handling for the filter controls.
//!
//! This module translates input from the presentation layer (typing in the
//! search box, pressing a category toggle, picking a sort order) into store
//! mutations. It is the only place raw control values are validated, so a
//! control bound to stale or hand-written data cannot push the store into an
//! invalid state.
//!
//! # Event Flow
//!
//! ```text
//! Control input → Event → handle_event → FilterStore mutation → listener
//!                                  │
//!                                  └── Ok(true): re-derive and re-render
//! ```
//!
//! # Example
//!
//! ```rust
//! use doclist::app::{handle_event, Event, FilterStore};
//!
//! let mut store = FilterStore::with_defaults();
//! let rerender = handle_event(&mut store, &Event::QueryChanged("rollover".into()))?;
//! assert!(rerender);
//! assert_eq!(store.state().query, "rollover");
//! # Ok::<(), doclist::DoclistError>(())
//! ```

use crate::app::FilterStore;
use crate::domain::error::Result;

/// Input from the list controls.
///
/// Category and sort values arrive as the raw strings the controls carry and
/// are parsed when handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box text changed.
    QueryChanged(String),
    /// A category toggle button was activated.
    CategoryToggled(String),
    /// The sort selector changed.
    SortChanged(String),
    /// The "clear filters" control was activated.
    ClearFilters,
}

/// Applies an event to the store.
///
/// # Returns
///
/// `Ok(true)` if the state changed and the list should be re-derived,
/// `Ok(false)` if the event was a no-op (same query, same sort, or nothing to
/// clear). The listener is still notified for every applied mutation.
///
/// # Errors
///
/// Returns [`DoclistError::InvalidCategory`](crate::DoclistError::InvalidCategory)
/// or [`DoclistError::InvalidSortMode`](crate::DoclistError::InvalidSortMode)
/// for values outside the closed sets. The store is unchanged in that case.
pub fn handle_event(store: &mut FilterStore, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = store.get_state();

    match event {
        Event::QueryChanged(text) => store.set_query(text.as_str()),
        Event::CategoryToggled(raw) => store.toggle_category_str(raw)?,
        Event::SortChanged(raw) => store.set_sort_mode_str(raw)?,
        Event::ClearFilters => {
            if before.query.is_empty() && before.categories.is_empty() {
                tracing::debug!("nothing to clear");
                return Ok(false);
            }
            store.clear_filters();
        }
    }

    let changed = *store.state() != before;
    tracing::debug!(changed, "event handled");
    Ok(changed)
}
