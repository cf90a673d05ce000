//! Deterministic formatting helpers for list display.
//!
//! All functions are pure: the same input always yields the same text, with no
//! dependence on the current time or locale settings.

use crate::domain::Document;
use chrono::{DateTime, NaiveDate};

/// Formats an ISO 8601 date as `"1 Jul 2024"`.
///
/// Accepts a plain date (`2024-07-01`) or a full RFC 3339 timestamp, in which
/// case the date part as written is used. Anything unparsable is returned
/// unchanged so a malformed catalog entry still shows something.
///
/// # Examples
///
/// ```
/// use doclist::ui::format::format_date;
///
/// assert_eq!(format_date("2024-07-01"), "1 Jul 2024");
/// assert_eq!(format_date("2025-03-15T09:30:00+10:00"), "15 Mar 2025");
/// assert_eq!(format_date("sometime"), "sometime");
/// ```
#[must_use]
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.date_naive()));

    date.map_or_else(|| iso.to_string(), |d| d.format("%-d %b %Y").to_string())
}

/// Returns `"Updated 1 Jul 2024"` for documents with a last-updated date.
#[must_use]
pub fn updated_label(doc: &Document) -> Option<String> {
    doc.last_updated
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(|d| format!("Updated {}", format_date(d)))
}

/// Formats a count with the singular or plural noun.
///
/// ```
/// use doclist::ui::format::pluralize;
///
/// assert_eq!(pluralize(1, "document", "documents"), "1 document");
/// assert_eq!(pluralize(0, "document", "documents"), "0 documents");
/// ```
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Summary line under the list, e.g. `"Showing 2 of 5 documents"`.
#[must_use]
pub fn results_summary(visible: usize, total: usize) -> String {
    if total == 0 {
        "No documents available".to_string()
    } else if visible == total {
        format!("Showing all {}", pluralize(total, "document", "documents"))
    } else {
        format!("Showing {visible} of {}", pluralize(total, "document", "documents"))
    }
}

/// Secondary line for a document row: category, year, size and update date.
///
/// ```
/// use doclist::domain::{Category, Document};
/// use doclist::ui::format::meta_line;
///
/// let doc = Document::new("1", "PDS", Category::Pds, 2025, "/1")
///     .with_size("2.4 MB")
///     .with_last_updated("2025-03-01");
/// assert_eq!(meta_line(&doc), "PDS · 2025 · 2.4 MB · Updated 1 Mar 2025");
/// ```
#[must_use]
pub fn meta_line(doc: &Document) -> String {
    let mut parts = vec![doc.category.as_str().to_string(), doc.year.to_string()];
    if let Some(size) = doc.size.as_deref().filter(|s| !s.trim().is_empty()) {
        parts.push(size.to_string());
    }
    if let Some(updated) = updated_label(doc) {
        parts.push(updated);
    }
    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn dates_drop_leading_zero_on_day() {
        assert_eq!(format_date("2024-01-05"), "5 Jan 2024");
        assert_eq!(format_date("2024-12-31"), "31 Dec 2024");
    }

    #[test]
    fn invalid_dates_pass_through() {
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn blank_update_dates_are_omitted() {
        let doc = Document::new("g", "Guide", Category::Guide, 2024, "/g").with_last_updated("  ");
        assert_eq!(updated_label(&doc), None);
        assert_eq!(meta_line(&doc), "Guide · 2024");
    }

    #[test]
    fn summaries_cover_all_cases() {
        assert_eq!(results_summary(0, 0), "No documents available");
        assert_eq!(results_summary(1, 1), "Showing all 1 document");
        assert_eq!(results_summary(5, 5), "Showing all 5 documents");
        assert_eq!(results_summary(2, 5), "Showing 2 of 5 documents");
        assert_eq!(results_summary(0, 5), "Showing 0 of 5 documents");
    }
}
