//! Plain-text rendering of a list view model.
//!
//! The renderer turns a [`ListViewModel`] into lines of text. It performs no
//! filtering or formatting decisions of its own; everything it prints comes
//! from the view model.
//!
//! # Layout
//!
//! ```text
//!  Documents (1/2)
//! Search: "roll"   Sort: Title (A-Z)
//! Filters: [ ] PDS (0)  [x] Form (1)  ...
//! ────────────────────────────────────────
//! [Roll]over Form ↗
//!   Form · 2025
//!   https://example.com/rollover.pdf
//! ────────────────────────────────────────
//! Showing 1 of 2 documents
//! ```

use super::viewmodel::{DisplayRow, ListViewModel};

/// Width of the horizontal separators.
const RULE_WIDTH: usize = 40;

/// Marker appended to titles of off-site documents.
const EXTERNAL_MARKER: &str = " ↗";

/// Renders the view model as a single string, one line per row element.
#[must_use]
pub fn render(vm: &ListViewModel) -> String {
    render_lines(vm).join("\n")
}

/// Renders the view model into lines.
#[must_use]
pub fn render_lines(vm: &ListViewModel) -> Vec<String> {
    let rule = "─".repeat(RULE_WIDTH);
    let mut lines = vec![vm.header.title.clone()];

    let search = if vm.search_bar.query.is_empty() {
        "Search: (none)".to_string()
    } else {
        format!("Search: {:?}", vm.search_bar.query)
    };
    lines.push(format!("{search}   Sort: {}", vm.sort.label));

    let facets: Vec<String> = vm
        .facets
        .iter()
        .map(|f| {
            let mark = if f.selected { 'x' } else { ' ' };
            format!("[{mark}] {} ({})", f.label, f.count)
        })
        .collect();
    lines.push(format!("Filters: {}", facets.join("  ")));
    lines.push(rule.clone());

    if let Some(empty) = &vm.empty_state {
        lines.push(empty.message.clone());
        if !empty.subtitle.is_empty() {
            lines.push(empty.subtitle.clone());
        }
    } else {
        for row in &vm.rows {
            render_row(row, &mut lines);
        }
    }

    lines.push(rule);
    lines.push(vm.summary.clone());
    lines
}

fn render_row(row: &DisplayRow, lines: &mut Vec<String>) {
    let mut title = highlight(&row.title, &row.highlight_ranges);
    if row.external {
        title.push_str(EXTERNAL_MARKER);
    }
    lines.push(title);
    lines.push(format!("  {}", row.meta));
    lines.push(format!("  {}", row.url));
}

/// Wraps highlighted character ranges in square brackets.
///
/// Ranges are character indices; out-of-bounds ends are clamped.
fn highlight(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut ranges = ranges.iter().peekable();
    let mut open_until: Option<usize> = None;
    let char_count = text.chars().count();

    for (idx, ch) in text.chars().enumerate() {
        if open_until.is_none() {
            if let Some(&&(start, end)) = ranges.peek() {
                if start == idx {
                    out.push('[');
                    open_until = Some(end.min(char_count));
                    ranges.next();
                }
            }
        }
        out.push(ch);
        if open_until == Some(idx + 1) {
            out.push(']');
            open_until = None;
        }
    }

    if open_until.is_some() {
        out.push(']');
    }
    out
}
