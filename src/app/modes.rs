//! Sort mode state type for the document list.
//!
//! The list supports three orderings, selected by the user from a sort control:
//! - **Title**: alphabetical
//! - **`YearDesc`**: newest year first, alphabetical within a year
//! - **Recency**: most recently updated first, newest year within a date
//!
//! # Example
//!
//! ```rust
//! use doclist::app::SortMode;
//!
//! let mode: SortMode = "year-desc".parse()?;
//! assert_eq!(mode, SortMode::YearDesc);
//! assert_eq!(mode.as_str(), "year-desc");
//! # Ok::<(), doclist::DoclistError>(())
//! ```

use crate::domain::DoclistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the visible documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Ascending locale-aware title order; equal titles keep their input order.
    #[default]
    Title,

    /// Descending year, then ascending title.
    YearDesc,

    /// Descending last-updated date, then descending year.
    ///
    /// Documents without a date sort after every dated document.
    Recency,
}

impl SortMode {
    /// Every sort mode, in the order a sort selector lists them.
    pub const ALL: [Self; 3] = [Self::Title, Self::YearDesc, Self::Recency];

    /// Returns the identifier used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::YearDesc => "year-desc",
            Self::Recency => "recency",
        }
    }

    /// Returns the human-readable label for a sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title (A-Z)",
            Self::YearDesc => "Year (newest)",
            Self::Recency => "Recently updated",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DoclistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "by-title" => Ok(Self::Title),
            "year-desc" | "by-year-desc" | "year" => Ok(Self::YearDesc),
            "recency" | "by-recency" | "recent" => Ok(Self::Recency),
            _ => Err(DoclistError::InvalidSortMode(s.to_string())),
        }
    }
}
