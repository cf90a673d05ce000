//! Domain layer for the document list engine.
//!
//! This module contains the core domain types, independent of how documents are
//! loaded or rendered.
//!
//! # Organization
//!
//! - [`category`]: Closed set of document kinds
//! - [`document`]: Document record
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use doclist::domain::{Category, Document, Result};
//!
//! fn load_one() -> Result<Document> {
//!     let category = "Report".parse::<Category>()?;
//!     Ok(Document::new("ar-2024", "Annual Report 2024", category, 2024, "/ar-2024.pdf"))
//! }
//! # load_one().unwrap();
//! ```

pub mod category;
pub mod document;
pub mod error;

pub use category::Category;
pub use document::Document;
pub use error::{DoclistError, Result};
