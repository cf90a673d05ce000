//! Derivation engine: from documents and filter state to the visible list.
//!
//! Everything here is synchronous and pure apart from the cache, which only
//! memoizes results and never changes what callers observe.
//!
//! # Modules
//!
//! - [`filter`]: Text and category predicates
//! - [`sort`]: Locale-aware collation and the three sort modes
//! - [`view`]: `derive`, `DerivedView` and per-category counts
//! - [`cache`]: Single-entry memoization of derived views
//! - [`list`]: `DocumentList`, one list instance wiring store, documents and cache

pub mod cache;
pub mod filter;
pub mod list;
pub mod sort;
pub mod view;

pub use cache::DerivationCache;
pub use list::DocumentList;
pub use view::{category_counts, derive, DerivedView};
