//! Catalog source abstraction.
//!
//! This module defines the [`Catalog`] trait: anything that can produce the
//! document collection a list is built over. The engine itself never loads
//! documents; catalogs are read-only and nothing is ever written back.

use crate::domain::error::Result;
use crate::domain::Document;

/// A read-only source of documents.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::catalog::JsonCatalog): Reads a JSON file
/// - [`StaticCatalog`]: Wraps an in-memory collection
///
/// # Examples
///
/// ```no_run
/// use doclist::catalog::{Catalog, JsonCatalog};
///
/// let catalog = JsonCatalog::new("documents.json");
/// let documents = catalog.documents()?;
/// # Ok::<(), doclist::DoclistError>(())
/// ```
pub trait Catalog {
    /// Returns every document in the catalog, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or decoded.
    fn documents(&self) -> Result<Vec<Document>>;
}

/// An in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    documents: Vec<Document>,
}

impl StaticCatalog {
    #[must_use]
    pub const fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

impl Catalog for StaticCatalog {
    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.documents.clone())
    }
}
