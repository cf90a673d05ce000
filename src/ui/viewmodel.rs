//! View model types representing renderable list state.
//!
//! This module defines immutable view models computed from a
//! [`DocumentList`], following the MVVM pattern. View models contain no business
//! logic, only display-ready data: formatted meta lines, query highlight ranges,
//! facet counts and the results summary.
//!
//! # Example
//!
//! ```rust
//! use doclist::app::InitialFilter;
//! use doclist::domain::{Category, Document};
//! use doclist::engine::DocumentList;
//! use doclist::ui::viewmodel::compute_viewmodel;
//!
//! let mut list = DocumentList::new(
//!     vec![Document::new("1", "Rollover Form", Category::Form, 2025, "/1")],
//!     InitialFilter::default(),
//! );
//! list.store_mut().set_query("roll");
//!
//! let vm = compute_viewmodel(&mut list);
//! assert_eq!(vm.rows[0].highlight_ranges, vec![(0, 4)]);
//! assert_eq!(vm.summary, "Showing all 1 document");
//! ```

use super::format::{meta_line, results_summary};
use crate::app::SortMode;
use crate::domain::{Category, Document};
use crate::engine::filter::normalize_query;
use crate::engine::DocumentList;

/// Complete list view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    /// Header information (title with counts).
    pub header: HeaderInfo,

    /// Search box state.
    pub search_bar: SearchBarInfo,

    /// Sort selector state.
    pub sort: SortInfo,

    /// One entry per category toggle, in category order.
    pub facets: Vec<FacetInfo>,

    /// Visible rows in display order.
    pub rows: Vec<DisplayRow>,

    /// Summary line (e.g. "Showing 2 of 5 documents").
    pub summary: String,

    /// Shown instead of rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single document row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub id: String,
    pub title: String,

    /// Category, year, size and update date joined for the secondary line.
    pub meta: String,

    pub url: String,

    /// Whether the link leaves the site.
    pub external: bool,

    /// Character ranges of the title matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Query exactly as typed.
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortInfo {
    pub active: SortMode,
    pub label: &'static str,
}

/// One category toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetInfo {
    pub category: Category,
    pub label: &'static str,

    /// Documents of this category matching the current query.
    pub count: usize,
    pub selected: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No documents found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Computes the view model for the list's current state.
///
/// Takes `&mut` because the derived view is served from the list's cache.
pub fn compute_viewmodel(list: &mut DocumentList) -> ListViewModel {
    let state = list.state();
    let counts = list.category_counts();
    let query = normalize_query(&state.query);

    let facets = Category::ALL
        .iter()
        .map(|&category| FacetInfo {
            category,
            label: category.as_str(),
            count: counts.get(&category).copied().unwrap_or(0),
            selected: state.is_selected(category),
        })
        .collect();

    let view = list.view();

    let rows: Vec<DisplayRow> = view
        .documents
        .iter()
        .map(|doc| compute_display_row(doc, query.as_deref()))
        .collect();

    let empty_state = if rows.is_empty() {
        Some(compute_empty_state(view.total, state.is_unfiltered()))
    } else {
        None
    };

    ListViewModel {
        header: HeaderInfo {
            title: format!(" Documents ({}/{}) ", view.visible, view.total),
        },
        search_bar: SearchBarInfo {
            query: state.query.clone(),
        },
        sort: SortInfo {
            active: state.sort,
            label: state.sort.label(),
        },
        facets,
        rows,
        summary: results_summary(view.visible, view.total),
        empty_state,
    }
}

fn compute_display_row(doc: &Document, query: Option<&str>) -> DisplayRow {
    DisplayRow {
        id: doc.id.clone(),
        title: doc.title.clone(),
        meta: meta_line(doc),
        url: doc.url.clone(),
        external: doc.external,
        highlight_ranges: query.map_or_else(Vec::new, |q| compute_highlight_ranges(&doc.title, q)),
    }
}

fn compute_empty_state(total: usize, unfiltered: bool) -> EmptyState {
    if total == 0 {
        EmptyState {
            message: "No documents available".to_string(),
            subtitle: "The document library is empty".to_string(),
        }
    } else if unfiltered {
        EmptyState {
            message: "No documents found".to_string(),
            subtitle: String::new(),
        }
    } else {
        EmptyState {
            message: "No documents match your filters".to_string(),
            subtitle: "Try a different search or clear the filters".to_string(),
        }
    }
}

/// Finds the non-overlapping occurrences of `query` in `text`, case-insensitively.
///
/// `query` must already be lower-cased. Ranges are in character indices of the
/// original text; adjacent matches are coalesced.
fn compute_highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    // Lower-casing may expand one char into several; keep the source index of each.
    let mut lowered = Vec::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origin.push(idx);
        }
    }

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut i = 0;
    while i + needle.len() <= lowered.len() {
        if lowered[i..i + needle.len()] == needle[..] {
            let start = origin[i];
            let end = origin[i + needle.len() - 1] + 1;
            match ranges.last_mut() {
                Some(last) if last.1 >= start => last.1 = last.1.max(end),
                _ => ranges.push((start, end)),
            }
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::InitialFilter;

    fn list() -> DocumentList {
        DocumentList::new(
            vec![
                Document::new("a", "Annual Report 2024", Category::Report, 2024, "/a")
                    .with_last_updated("2024-10-01"),
                Document::new("r", "Rollover Form", Category::Form, 2025, "https://ato.gov.au/r")
                    .external(),
            ],
            InitialFilter::default(),
        )
    }

    #[test]
    fn highlights_every_occurrence() {
        assert_eq!(compute_highlight_ranges("Report on reports", "report"), vec![(0, 6), (10, 16)]);
        assert_eq!(compute_highlight_ranges("aaaa", "aa"), vec![(0, 4)]);
        assert!(compute_highlight_ranges("Form", "x").is_empty());
    }

    #[test]
    fn highlights_use_character_indices() {
        assert_eq!(compute_highlight_ranges("Épargne Guide", "guide"), vec![(8, 13)]);
    }

    #[test]
    fn rows_carry_formatted_metadata() {
        let mut list = list();
        let vm = compute_viewmodel(&mut list);

        assert_eq!(vm.header.title, " Documents (2/2) ");
        assert_eq!(vm.rows.len(), 2);
        assert_eq!(vm.rows[0].meta, "Report · 2024 · Updated 1 Oct 2024");
        assert!(vm.rows[1].external);
        assert!(vm.rows[0].highlight_ranges.is_empty());
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn facets_reflect_selection_and_counts() {
        let mut list = list();
        list.store_mut().toggle_category(Category::Form);
        let vm = compute_viewmodel(&mut list);

        let form = vm.facets.iter().find(|f| f.category == Category::Form).unwrap();
        assert!(form.selected);
        assert_eq!(form.count, 1);
        let report = vm.facets.iter().find(|f| f.category == Category::Report).unwrap();
        assert!(!report.selected);
        assert_eq!(report.count, 1);
        assert_eq!(vm.summary, "Showing 1 of 2 documents");
    }

    #[test]
    fn empty_results_explain_why() {
        let mut list = list();
        list.store_mut().toggle_category(Category::Pds);
        let vm = compute_viewmodel(&mut list);

        assert!(vm.rows.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No documents match your filters");

        let mut empty_list = DocumentList::new(Vec::<Document>::new(), InitialFilter::default());
        let vm = compute_viewmodel(&mut empty_list);
        assert_eq!(vm.empty_state.unwrap().message, "No documents available");
    }
}
