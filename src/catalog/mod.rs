//! Catalog layer: where document collections come from.
//!
//! # Modules
//!
//! - `backend`: `Catalog` trait and the in-memory implementation
//! - `json`: JSON file reader

pub mod backend;
pub mod json;

pub use backend::{Catalog, StaticCatalog};
pub use json::JsonCatalog;
