//! JSON file catalog.
//!
//! Reads a document collection from a human-readable JSON file. Two layouts
//! are accepted:
//!
//! ```json
//! [
//!   { "id": "pds-2025", "title": "Product Disclosure Statement", "category": "PDS",
//!     "year": 2025, "url": "/docs/pds.pdf", "lastUpdated": "2025-03-01" }
//! ]
//! ```
//!
//! or the same array wrapped in an object with a format version:
//!
//! ```json
//! { "version": 1, "documents": [ ... ] }
//! ```

use crate::catalog::backend::Catalog;
use crate::domain::error::{DoclistError, Result};
use crate::domain::Document;
use serde::Deserialize;
use std::path::PathBuf;

/// Highest catalog format version this reader understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Document>),
    Wrapped {
        #[serde(default = "default_version")]
        version: u32,
        documents: Vec<Document>,
    },
}

const fn default_version() -> u32 {
    SUPPORTED_VERSION
}

/// Catalog backed by a JSON file on disk.
///
/// The file is re-read on every call to [`Catalog::documents`].
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    file_path: PathBuf,
}

impl JsonCatalog {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Decodes a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DoclistError::Catalog`] if the text is not valid JSON, does not
    /// match either layout, or declares an unsupported version.
    pub fn parse(contents: &str) -> Result<Vec<Document>> {
        let file: CatalogFile = serde_json::from_str(contents)
            .map_err(|e| DoclistError::Catalog(format!("failed to parse JSON: {e}")))?;

        match file {
            CatalogFile::Bare(documents) => Ok(documents),
            CatalogFile::Wrapped { version, documents } => {
                if version > SUPPORTED_VERSION {
                    return Err(DoclistError::Catalog(format!(
                        "unsupported catalog version {version} (max {SUPPORTED_VERSION})"
                    )));
                }
                Ok(documents)
            }
        }
    }
}

impl Catalog for JsonCatalog {
    fn documents(&self) -> Result<Vec<Document>> {
        tracing::debug!(path = ?self.file_path, "loading catalog");

        let contents = std::fs::read_to_string(&self.file_path)?;
        let documents = Self::parse(&contents)?;

        tracing::debug!(documents = documents.len(), "catalog loaded");
        Ok(documents)
    }
}
