use doclist::catalog::{Catalog, JsonCatalog, StaticCatalog};
use doclist::{
    derive, handle_event, Category, DerivedView, Document, DocumentList, Event, FilterState,
    FilterStore, InitialFilter, SortMode,
};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::Write;
use std::rc::Rc;

fn pair() -> Vec<Document> {
    vec![
        Document::new("ar-2024", "Annual Report 2024", Category::Report, 2024, "/ar-2024.pdf"),
        Document::new("rollover", "Rollover Form", Category::Form, 2025, "/rollover.pdf"),
    ]
}

fn titles(docs: &[&Document]) -> Vec<String> {
    docs.iter().map(|d| d.title.clone()).collect()
}

fn state(query: &str, categories: &[Category], sort: SortMode) -> FilterState {
    FilterState {
        query: query.to_string(),
        categories: categories.iter().copied().collect(),
        sort,
    }
}

#[test]
fn scenario_a_title_sort() {
    let docs = pair();
    let visible = derive(&docs, &state("", &[], SortMode::Title));
    assert_eq!(titles(&visible), ["Annual Report 2024", "Rollover Form"]);
}

#[test]
fn scenario_b_year_desc_sort() {
    let docs = pair();
    let visible = derive(&docs, &state("", &[], SortMode::YearDesc));
    assert_eq!(titles(&visible), ["Rollover Form", "Annual Report 2024"]);
}

#[test]
fn scenario_c_text_query() {
    let docs = pair();
    let visible = derive(&docs, &state("rollover", &[], SortMode::Title));
    assert_eq!(titles(&visible), ["Rollover Form"]);
}

#[test]
fn scenario_d_category_filter() {
    let docs = pair();
    let visible = derive(&docs, &state("", &[Category::Report], SortMode::Title));
    assert_eq!(titles(&visible), ["Annual Report 2024"]);
}

#[test]
fn scenario_e_unmatched_category_is_empty_not_error() {
    let docs = pair();
    let view = DerivedView::compute(&docs, &state("", &[Category::Pds], SortMode::Title));
    assert!(view.is_empty());
    assert_eq!(view.total, 2);
    assert_eq!(view.visible, 0);
}

#[test]
fn query_is_trimmed_and_case_folded_at_derivation() {
    let docs = pair();
    let visible = derive(&docs, &state("  ROLLOVER  ", &[], SortMode::Title));
    assert_eq!(titles(&visible), ["Rollover Form"]);
}

#[test]
fn listener_drives_rederivation() {
    let docs = pair();
    let views = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&views);
    let captured = docs.clone();

    let mut store = FilterStore::with_defaults();
    store.subscribe(move |s| {
        let ids: Vec<String> = derive(&captured, s).iter().map(|d| d.id.clone()).collect();
        sink.borrow_mut().push(ids);
    });

    handle_event(&mut store, &Event::SortChanged("year-desc".into())).unwrap();
    handle_event(&mut store, &Event::QueryChanged("report".into())).unwrap();
    handle_event(&mut store, &Event::ClearFilters).unwrap();

    assert_eq!(
        *views.borrow(),
        vec![
            vec!["rollover".to_string(), "ar-2024".to_string()],
            vec!["ar-2024".to_string()],
            vec!["rollover".to_string(), "ar-2024".to_string()],
        ]
    );
}

#[test]
fn rejected_event_keeps_list_consistent() {
    let mut list = DocumentList::new(
        pair(),
        InitialFilter {
            categories: Some(BTreeSet::from([Category::Form])),
            ..InitialFilter::default()
        },
    );
    let before = list.view().clone();

    assert!(list.apply(&Event::CategoryToggled("Newsletter".into())).is_err());
    assert!(list.apply(&Event::SortChanged("alphabetical".into())).is_err());

    assert_eq!(*list.view(), before);
    assert_eq!(list.state().sort, SortMode::Title);
}

#[test]
fn json_catalog_feeds_document_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "version": 1,
            "documents": [
                {{"id":"pds","title":"Product Disclosure Statement","category":"PDS","year":2025,"url":"/pds","lastUpdated":"2025-03-01"}},
                {{"id":"ins","title":"Insurance Guide","category":"Guide","year":2024,"url":"/ins","lastUpdated":"2025-05-20","tags":["cover"]}},
                {{"id":"tfn","title":"TFN Declaration","category":"Form","year":2023,"url":"https://ato.gov.au/tfn","external":true}}
            ]
        }}"#
    )
    .unwrap();

    let documents = JsonCatalog::new(file.path()).documents().unwrap();
    let mut list = DocumentList::new(documents, InitialFilter::default());

    list.apply(&Event::SortChanged("recency".into())).unwrap();
    assert_eq!(list.view().ids(), ["ins", "pds", "tfn"]);

    list.apply(&Event::QueryChanged("cover".into())).unwrap();
    assert_eq!(list.view().ids(), ["ins"]);
}

#[test]
fn static_catalog_returns_its_documents() {
    let catalog = StaticCatalog::new(pair());
    assert_eq!(catalog.documents().unwrap(), pair());
}
