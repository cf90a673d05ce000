//! Closed set of document kinds.

use crate::domain::error::DoclistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of a listed document.
///
/// The set is closed: every [`Document`](crate::domain::Document) carries exactly
/// one of these, and the category filter can only ever hold members of it.
/// Serialized using the canonical display labels (`"PDS"`, `"Fact Sheet"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Product disclosure statement.
    #[serde(rename = "PDS")]
    Pds,
    #[serde(rename = "Form")]
    Form,
    #[serde(rename = "Report")]
    Report,
    #[serde(rename = "Guide")]
    Guide,
    #[serde(rename = "Fact Sheet")]
    FactSheet,
    #[serde(rename = "Policy")]
    Policy,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Pds,
        Self::Form,
        Self::Report,
        Self::Guide,
        Self::FactSheet,
        Self::Policy,
    ];

    /// Returns the canonical display label.
    ///
    /// This is the value matched by text search and shown on filter toggles.
    ///
    /// ```
    /// use doclist::domain::Category;
    ///
    /// assert_eq!(Category::FactSheet.as_str(), "Fact Sheet");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pds => "PDS",
            Self::Form => "Form",
            Self::Report => "Report",
            Self::Guide => "Guide",
            Self::FactSheet => "Fact Sheet",
            Self::Policy => "Policy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DoclistError;

    /// Parses a category label, ignoring ASCII case and surrounding whitespace.
    ///
    /// `fact-sheet` and `factsheet` are accepted as aliases for `Fact Sheet`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pds" => Ok(Self::Pds),
            "form" => Ok(Self::Form),
            "report" => Ok(Self::Report),
            "guide" => Ok(Self::Guide),
            "fact sheet" | "fact-sheet" | "factsheet" => Ok(Self::FactSheet),
            "policy" => Ok(Self::Policy),
            _ => Err(DoclistError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn parsing_ignores_case_and_accepts_aliases() {
        assert_eq!("pds".parse::<Category>().unwrap(), Category::Pds);
        assert_eq!(" REPORT ".parse::<Category>().unwrap(), Category::Report);
        assert_eq!("fact-sheet".parse::<Category>().unwrap(), Category::FactSheet);
    }

    #[test]
    fn unknown_labels_are_rejected() {
        let err = "Memo".parse::<Category>().unwrap_err();
        assert!(matches!(err, DoclistError::InvalidCategory(ref v) if v == "Memo"));
    }

    #[test]
    fn serializes_as_display_label() {
        let json = serde_json::to_string(&Category::FactSheet).unwrap();
        assert_eq!(json, "\"Fact Sheet\"");
        let back: Category = serde_json::from_str("\"PDS\"").unwrap();
        assert_eq!(back, Category::Pds);
    }
}
