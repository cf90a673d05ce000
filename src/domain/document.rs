//! Document domain model.
//!
//! This module defines the [`Document`] type: one immutable, listable entry in a
//! fund's document library (a disclosure statement, a form, an annual report).
//! Documents are supplied by the caller and never mutated by the engine; the
//! filtering and sorting code only borrows them.

use crate::domain::category::Category;
use serde::{Deserialize, Serialize};

/// One listable document.
///
/// `id` is expected to be unique within a collection. The engine relies on that
/// for stable keying but does not enforce it.
///
/// # Fields
///
/// - `id`: Unique key within the catalog
/// - `title`: Display title
/// - `category`: Document kind from the closed [`Category`] set
/// - `year`: Publication or financial year
/// - `url`: Where the document lives
/// - `size`: Optional preformatted size label (`"1.2 MB"`)
/// - `last_updated`: Optional ISO 8601 date (`"2024-07-01"`)
/// - `tags`: Free-text tags, empty when absent
/// - `description`: Optional summary line
/// - `external`: Whether `url` points off-site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub year: i32,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub external: bool,
}

impl Document {
    /// Creates a document with the required fields and no optional metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use doclist::domain::{Category, Document};
    ///
    /// let doc = Document::new("ar-2024", "Annual Report 2024", Category::Report, 2024, "/docs/ar-2024.pdf");
    /// assert_eq!(doc.title, "Annual Report 2024");
    /// assert!(doc.tags.is_empty());
    /// assert!(!doc.external);
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        year: i32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            year,
            url: url.into(),
            size: None,
            last_updated: None,
            tags: Vec::new(),
            description: None,
            external: false,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn with_last_updated(mut self, date: impl Into<String>) -> Self {
        self.last_updated = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Returns the last-updated date, or `""` when none is recorded.
    ///
    /// Recency ordering treats a missing date as the oldest possible value.
    #[must_use]
    pub fn last_updated_or_empty(&self) -> &str {
        self.last_updated.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_shape() {
        let json = r#"{
            "id": "pds-2025",
            "title": "Product Disclosure Statement",
            "category": "PDS",
            "year": 2025,
            "url": "https://example.com/pds.pdf",
            "size": "2.4 MB",
            "lastUpdated": "2025-03-01",
            "tags": ["insurance", "fees"],
            "external": true
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.category, Category::Pds);
        assert_eq!(doc.last_updated.as_deref(), Some("2025-03-01"));
        assert_eq!(doc.tags, vec!["insurance", "fees"]);
        assert!(doc.description.is_none());
        assert!(doc.external);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{"id":"f1","title":"Rollover Form","category":"Form","year":2025,"url":"/f1"}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc, Document::new("f1", "Rollover Form", Category::Form, 2025, "/f1"));
    }

    #[test]
    fn missing_date_reads_as_empty() {
        let doc = Document::new("g", "Guide", Category::Guide, 2020, "/g");
        assert_eq!(doc.last_updated_or_empty(), "");
        assert_eq!(doc.with_last_updated("2021-01-01").last_updated_or_empty(), "2021-01-01");
    }
}
