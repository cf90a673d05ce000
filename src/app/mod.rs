//! Application layer: filter state, its store, and control events.
//!
//! This module owns everything the user can change about the list. It sits
//! between the presentation layer (which issues events) and the engine (which
//! derives the visible documents from the current state).
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Control input → Event → handle_event → FilterStore → listener
//!                                             │
//!                                             ▼
//!                              engine::derive(documents, state)
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and validation of raw control values
//! - [`modes`]: Sort mode enum
//! - [`state`]: `FilterState` value and its partial seed
//! - [`store`]: `FilterStore`, the owner of the live state
//!
//! # Example
//!
//! ```rust
//! use doclist::app::{handle_event, Event, FilterStore};
//!
//! let mut store = FilterStore::with_defaults();
//! handle_event(&mut store, &Event::CategoryToggled("PDS".into()))?;
//! # Ok::<(), doclist::DoclistError>(())
//! ```

pub mod handler;
pub mod modes;
pub mod state;
pub mod store;

pub use handler::{handle_event, Event};
pub use modes::SortMode;
pub use state::{FilterState, InitialFilter};
pub use store::{FilterStore, Listener};
