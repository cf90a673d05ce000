//! Error types for the document list engine.
//!
//! This module defines the centralized error type [`DoclistError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for document list operations.
///
/// The filtering core performs no I/O, so the only errors it can raise are
/// caller-contract violations: a category or sort mode outside the closed set.
/// The remaining variants belong to the collaborators around the core (catalog
/// loading and configuration).
///
/// # Examples
///
/// ```
/// use doclist::domain::DoclistError;
///
/// fn validate_sort(raw: &str) -> Result<(), DoclistError> {
///     Err(DoclistError::InvalidSortMode(raw.to_string()))
/// }
///
/// assert!(validate_sort("by-size").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DoclistError {
    /// A category value outside the closed set was supplied.
    ///
    /// The store rejects the value and leaves its state untouched.
    #[error("Invalid category: {0:?}")]
    InvalidCategory(String),

    /// A sort mode outside the closed set was supplied.
    ///
    /// The store rejects the value and leaves its state untouched.
    #[error("Invalid sort mode: {0:?}")]
    InvalidSortMode(String),

    /// The document catalog could not be decoded.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for document list operations.
pub type Result<T> = std::result::Result<T, DoclistError>;
