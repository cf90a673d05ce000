use doclist::engine::filter::is_visible;
use doclist::engine::sort::collate;
use doclist::{derive, Category, Document, FilterState, FilterStore, SortMode};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

fn category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

fn document() -> impl Strategy<Value = Document> {
    (
        prop::sample::select(vec![
            "Annual Report",
            "Rollover Form",
            "annual report",
            "Fees Guide",
            "Épargne",
            "E\u{301}pargne",
            "PDS",
            "Øresund Fund",
            "\u{201c}Quick\u{201d} Guide",
            "2024 Review",
        ]),
        category(),
        2015i32..2027,
        prop::option::of(prop::sample::select(vec!["2024-01-01", "2024-06-30", "2025-02-14"])),
        prop::collection::vec(prop::sample::select(vec!["fees", "insurance", "tax"]), 0..3),
        prop::option::of(prop::sample::select(vec!["How fees work", "Yearly results"])),
    )
        .prop_map(|(title, category, year, updated, tags, description)| {
            let mut doc = Document::new("", title, category, year, "/doc").with_tags(tags);
            doc.last_updated = updated.map(String::from);
            doc.description = description.map(String::from);
            doc
        })
}

/// Documents with ids unique by position.
fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(document(), 0..24).prop_map(|docs| {
        docs.into_iter()
            .enumerate()
            .map(|(i, mut d)| {
                d.id = format!("doc-{i}");
                d
            })
            .collect()
    })
}

fn filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::sample::select(vec!["", " ", "report", "FEES", "ann", "form ", "zzz", "e"]),
        prop::collection::btree_set(category(), 0..3),
        sort_mode(),
    )
        .prop_map(|(query, categories, sort)| FilterState {
            query: query.to_string(),
            categories,
            sort,
        })
}

fn position(docs: &[Document], id: &str) -> usize {
    docs.iter().position(|d| d.id == id).unwrap()
}

proptest! {
    #[test]
    fn output_is_exactly_the_visible_items(docs in documents(), state in filter_state()) {
        let visible = derive(&docs, &state);

        let visible_ids: BTreeSet<&str> = visible.iter().map(|d| d.id.as_str()).collect();
        prop_assert_eq!(visible_ids.len(), visible.len());

        for doc in &docs {
            prop_assert_eq!(visible_ids.contains(doc.id.as_str()), is_visible(doc, &state));
        }
    }

    #[test]
    fn derivation_is_deterministic(docs in documents(), state in filter_state()) {
        let snapshot = docs.clone();
        let first: Vec<String> = derive(&docs, &state).iter().map(|d| d.id.clone()).collect();
        let second: Vec<String> = derive(&docs, &state).iter().map(|d| d.id.clone()).collect();
        prop_assert_eq!(first, second);
        prop_assert_eq!(docs, snapshot);
    }

    #[test]
    fn title_sort_is_ascending_and_stable(docs in documents(), state in filter_state()) {
        let state = FilterState { sort: SortMode::Title, ..state };
        let visible = derive(&docs, &state);

        for pair in visible.windows(2) {
            let order = collate(&pair[0].title, &pair[1].title);
            prop_assert!(order != Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(position(&docs, &pair[0].id) < position(&docs, &pair[1].id));
            }
        }
    }

    #[test]
    fn year_desc_is_ordered_by_year(docs in documents(), state in filter_state()) {
        let state = FilterState { sort: SortMode::YearDesc, ..state };
        let visible = derive(&docs, &state);
        for pair in visible.windows(2) {
            prop_assert!(pair[0].year >= pair[1].year);
        }
    }

    #[test]
    fn recency_is_ordered_by_date_then_year(docs in documents(), state in filter_state()) {
        let state = FilterState { sort: SortMode::Recency, ..state };
        let visible = derive(&docs, &state);
        for pair in visible.windows(2) {
            let (a, b) = (pair[0].last_updated_or_empty(), pair[1].last_updated_or_empty());
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(pair[0].year >= pair[1].year);
            }
        }
    }

    #[test]
    fn empty_query_size_depends_only_on_categories(
        docs in documents(),
        categories in prop::collection::btree_set(category(), 0..3),
        sort in sort_mode(),
    ) {
        let state = FilterState { query: String::new(), categories: categories.clone(), sort };
        let expected = docs
            .iter()
            .filter(|d| categories.is_empty() || categories.contains(&d.category))
            .count();
        prop_assert_eq!(derive(&docs, &state).len(), expected);
    }

    #[test]
    fn toggling_twice_is_identity(
        initial in prop::collection::btree_set(category(), 0..4),
        toggled in category(),
    ) {
        let mut store = FilterStore::new(doclist::InitialFilter {
            categories: Some(initial.clone()),
            ..Default::default()
        });
        store.toggle_category(toggled);
        store.toggle_category(toggled);
        prop_assert_eq!(store.get_state().categories, initial);
    }
}
