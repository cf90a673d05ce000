//! Doclist: a filterable, sortable document list engine.
//!
//! Doclist powers the document library of a fund website: a list of
//! disclosure statements, forms, reports and guides that visitors narrow down
//! with a search box and category toggles, and reorder with a sort selector.
//! It provides:
//! - A filter state store with copy-on-write mutations and change notification
//! - A pure derivation from (documents, filter state) to the ordered visible list
//! - Locale-aware title ordering and three sort modes
//! - Per-category counts for toggle badges
//! - A JSON catalog reader, view models and a plain-text renderer

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Filter state
//! │  - Control events                                   │
//! │  - FilterStore + listener                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ Catalog       │   │ UI            │
//! │ (engine/)     │   │ (catalog/)    │   │ (ui/)         │
//! │ - Filter      │   │ - JSON reader │   │ - View model  │
//! │ - Sort        │   │ - Trait API   │   │ - Formatting  │
//! │ - Cache       │   │               │   │ - Renderer    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Document, Category                               │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Filter state, store and control events
//! - [`domain`]: Core domain types (Document, Category, errors)
//! - [`engine`]: Derivation of the visible list
//! - [`catalog`]: Read-only document sources
//! - [`ui`]: View models, formatting and rendering
//! - [`observability`]: `tracing` subscriber setup
//!
//! # Control Flow
//!
//! 1. A control emits an [`Event`] (query typed, toggle pressed, sort picked)
//! 2. [`handle_event`] validates it and mutates the [`FilterStore`]
//! 3. The store notifies its listener with the new [`FilterState`]
//! 4. [`derive`] recomputes the visible documents for the new state
//!
//! # Example
//!
//! ```rust
//! use doclist::{derive, handle_event, initialize, Category, Config, Document, Event};
//!
//! let documents = vec![
//!     Document::new("ar-2024", "Annual Report 2024", Category::Report, 2024, "/ar-2024.pdf"),
//!     Document::new("rollover", "Rollover Form", Category::Form, 2025, "/rollover.pdf"),
//! ];
//!
//! let mut store = initialize(&Config::default())?;
//! handle_event(&mut store, &Event::SortChanged("year-desc".into()))?;
//!
//! let visible = derive(&documents, store.state());
//! assert_eq!(visible[0].title, "Rollover Form");
//! # Ok::<(), doclist::DoclistError>(())
//! ```
//!
//! # Concurrency
//!
//! None. Every operation is synchronous and completes before returning; a
//! store and its list belong to one logical session.

pub mod app;
pub mod catalog;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Event, FilterState, FilterStore, InitialFilter, SortMode};
pub use domain::{Category, DoclistError, Document, Result};
pub use engine::{derive, DerivedView, DocumentList};

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

const OVERRIDE_KEYS: [&str; 5] = ["catalog", "query", "categories", "sort", "trace_level"];

/// Engine configuration.
///
/// Values can come from a key/value map, a TOML file, or command-line flags;
/// [`Config::overlay`] combines them.
///
/// # Example
///
/// ```toml
/// catalog = "documents.json"
/// query = "insurance"
/// categories = ["PDS", "Guide"]
/// sort = "year-desc"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to a JSON document catalog.
    #[serde(rename = "catalog")]
    pub catalog_path: Option<PathBuf>,

    /// Initial search query.
    pub query: Option<String>,

    /// Initially selected category labels.
    pub categories: Vec<String>,

    /// Initial sort mode identifier (`title`, `year-desc`, `recency`).
    pub sort: Option<String>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog`: String → `Option<PathBuf>`
    /// - `query`: String → `Option<String>`
    /// - `categories`: Comma-separated string → `Vec<String>` (filters empty values)
    /// - `sort`: String → `Option<String>`
    /// - `trace_level`: String → `Option<String>`
    ///
    /// Values are not validated here; see [`Config::initial_filter`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use doclist::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("categories".to_string(), "PDS, Form".to_string());
    /// map.insert("sort".to_string(), "recency".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.categories, vec!["PDS", "Form"]);
    /// assert_eq!(config.sort.as_deref(), Some("recency"));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let categories = config
            .get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Self {
            catalog_path: config.get("catalog").map(PathBuf::from),
            query: config.get("query").cloned(),
            categories,
            sort: config.get("sort").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Parses `KEY=VALUE` overrides, as given on the command line.
    ///
    /// Keys are those accepted by [`Config::from_map`]. A later assignment to
    /// the same key wins.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::Config`] for an entry without `=` or an unknown key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use doclist::Config;
    ///
    /// let config = Config::from_overrides(["sort=recency", "categories=PDS,Guide"])?;
    /// assert_eq!(config.sort.as_deref(), Some("recency"));
    /// assert_eq!(config.categories, vec!["PDS", "Guide"]);
    /// # Ok::<(), doclist::DoclistError>(())
    /// ```
    pub fn from_overrides<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (key, value) = entry
                .split_once('=')
                .ok_or_else(|| DoclistError::Config(format!("expected KEY=VALUE, got {entry:?}")))?;
            let key = key.trim();
            if !OVERRIDE_KEYS.contains(&key) {
                return Err(DoclistError::Config(format!("unknown configuration key {key:?}")));
            }
            map.insert(key.to_string(), value.to_string());
        }
        Ok(Self::from_map(&map))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::Config`] for malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| DoclistError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`DoclistError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Combines two configurations, with set values in `other` winning.
    ///
    /// A non-empty `other.categories` replaces the base list entirely.
    #[must_use]
    pub fn overlay(self, other: Self) -> Self {
        Self {
            catalog_path: other.catalog_path.or(self.catalog_path),
            query: other.query.or(self.query),
            categories: if other.categories.is_empty() {
                self.categories
            } else {
                other.categories
            },
            sort: other.sort.or(self.sort),
            trace_level: other.trace_level.or(self.trace_level),
        }
    }

    /// Validates the filter-related values into a store seed.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::InvalidCategory`] or
    /// [`DoclistError::InvalidSortMode`] for values outside the closed sets.
    pub fn initial_filter(&self) -> Result<InitialFilter> {
        let categories = if self.categories.is_empty() {
            None
        } else {
            Some(
                self.categories
                    .iter()
                    .map(|c| c.parse::<Category>())
                    .collect::<Result<BTreeSet<_>>>()?,
            )
        };

        let sort = self.sort.as_deref().map(str::parse::<SortMode>).transpose()?;

        Ok(InitialFilter {
            query: self.query.clone(),
            categories,
            sort,
        })
    }
}

/// Creates a filter store seeded from configuration.
///
/// # Errors
///
/// Returns an error if the configured categories or sort mode are invalid.
///
/// # Example
///
/// ```rust
/// use doclist::{initialize, Config, SortMode};
///
/// let config = Config {
///     sort: Some("recency".to_string()),
///     ..Default::default()
/// };
///
/// let store = initialize(&config)?;
/// assert_eq!(store.state().sort, SortMode::Recency);
/// # Ok::<(), doclist::DoclistError>(())
/// ```
pub fn initialize(config: &Config) -> Result<FilterStore> {
    tracing::debug!("initializing filter store");
    let initial = config.initial_filter()?;
    Ok(FilterStore::new(initial))
}
