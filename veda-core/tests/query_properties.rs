//! Property tests for filter and pagination invariants.

use proptest::prelude::*;
use veda_core::{
    DataElement, DataElementQuery, DataElementResult, InMemoryStore, LanguageCode, Page,
    PageRequest, Purpose, PurposeQuery, QueryEngine, Translations,
};

const DOMAINS: [&str; 4] = ["Identity", "Contact", "Financial", "contact details"];
const INDUSTRIES: [&str; 3] = ["Finance", "finance", "Retail"];

fn element_strategy() -> impl Strategy<Value = DataElement> {
    (0usize..20, 0usize..DOMAINS.len(), "[A-Za-z ]{0,12}").prop_map(|(id, domain, title)| {
        DataElement::new(
            format!("DE-{id}"),
            title,
            String::new(),
            Vec::new(),
            DOMAINS.get(domain).copied().unwrap_or_default().to_owned(),
            Translations::default(),
        )
    })
}

fn purpose_strategy() -> impl Strategy<Value = Purpose> {
    (0usize..20, 0usize..INDUSTRIES.len(), "[a-z ]{0,12}").prop_map(|(id, industry, title)| {
        let mut translations = Translations::default();
        translations.set(LanguageCode::Eng, title);
        Purpose {
            purpose_id: format!("P-{id}"),
            industry: INDUSTRIES.get(industry).copied().unwrap_or_default().to_owned(),
            sub_category: "General".to_owned(),
            data_elements: Vec::new(),
            translations,
        }
    })
}

fn list_page(engine: &QueryEngine<InMemoryStore>, query: &DataElementQuery) -> Page<DataElement> {
    match engine.data_elements(query) {
        DataElementResult::Page(page) => page,
        other => panic!("list mode returned {other:?}"),
    }
}

/// Whether `subset` appears in `superset` in the same relative order.
fn is_ordered_subsequence<T: PartialEq>(subset: &[T], superset: &[T]) -> bool {
    let mut remaining = superset.iter();
    subset
        .iter()
        .all(|item| remaining.by_ref().any(|candidate| candidate == item))
}

proptest! {
    #[test]
    fn data_element_pages_preserve_store_order(
        records in prop::collection::vec(element_strategy(), 0..40),
        domain in prop::sample::select(vec!["", "contact", "IDENT", "fin"]),
        offset in 0usize..50,
        limit in 0usize..50,
    ) {
        let engine = QueryEngine::new(InMemoryStore::with_records(records.clone(), Vec::new()));
        let mut query = DataElementQuery::default().with_page(PageRequest { offset, limit });
        if !domain.is_empty() {
            query = query.with_domain(domain);
        }
        let page = list_page(&engine, &query);

        let expected_total = records
            .iter()
            .filter(|r| domain.is_empty() || r.domain.to_lowercase().contains(&domain.to_lowercase()))
            .count();
        prop_assert_eq!(page.total, expected_total);
        prop_assert!(page.data.len() <= limit);
        prop_assert_eq!(page.offset, offset.min(expected_total));
        prop_assert!(is_ordered_subsequence(&page.data, &records));
        if offset >= expected_total {
            prop_assert!(page.data.is_empty());
        }

        let again = list_page(&engine, &query);
        prop_assert_eq!(again, page);
    }

    #[test]
    fn purpose_pages_never_exceed_the_ceiling(
        records in prop::collection::vec(purpose_strategy(), 0..150),
        limit in 0usize..2000,
    ) {
        let engine = QueryEngine::new(InMemoryStore::with_records(Vec::new(), records.clone()));
        let params = veda_core::QueryParams::from_pairs([("limit", limit.to_string())]);
        let page = engine.purposes(&PurposeQuery::from_params(&params));

        prop_assert_eq!(page.limit, limit.min(100));
        prop_assert!(page.data.len() <= 100);
        prop_assert_eq!(page.total, records.len());
        prop_assert!(is_ordered_subsequence(&page.data, &records));
    }

    #[test]
    fn purpose_filters_commute(
        records in prop::collection::vec(purpose_strategy(), 0..40),
        title in "[a-z]{0,2}",
    ) {
        let engine = QueryEngine::new(InMemoryStore::with_records(Vec::new(), records));
        let page_size = PageRequest { offset: 0, limit: 100 };
        let combined = engine.purposes(
            &PurposeQuery::default()
                .with_page(page_size)
                .with_industry("FINANCE")
                .with_title(&title),
        );
        let reversed = engine.purposes(
            &PurposeQuery::default()
                .with_page(page_size)
                .with_title(&title)
                .with_industry("finance"),
        );
        prop_assert_eq!(combined, reversed);
    }
}
