// crates/catalog-core/tests/query_engine_unit.rs
// ============================================================================
// Module: Query Engine Unit Tests
// Description: Validate filter composition, stable sorting, and pagination.
// Purpose: Ensure the query engine honors the conjunction, stability, and
//          pagination contracts.
// Dependencies: catalog-core
// ============================================================================

//! Query engine tests for filtering, sorting, and pagination behavior.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use catalog_core::FilterSpec;
use catalog_core::PageSpec;
use catalog_core::SortField;
use catalog_core::SortOrder;
use catalog_core::SortSpec;
use catalog_core::runtime::predicate;
use catalog_core::runtime::query::QueryError;
use catalog_core::runtime::query::find_record;
use catalog_core::runtime::query::query;
use catalog_core::runtime::query::sort_spec_from_params;

mod common;

#[test]
fn empty_filters_return_whole_snapshot() {
    let snapshot = common::sample_snapshot();
    let outcome = query(&snapshot, &FilterSpec::default(), &SortSpec::default(), &PageSpec::default());
    assert_eq!(outcome.total, snapshot.len());
    assert_eq!(outcome.data.len(), snapshot.len());
    assert!(!outcome.page_info.has_next);
    assert!(!outcome.page_info.has_previous);
}

#[test]
fn every_result_satisfies_every_predicate() {
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        min_rating: Some(4.6),
        payment: Some("visa".to_string()),
        license: Some("malta".to_string()),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert!(outcome.total > 0);

    let predicates = predicate::compile(&filters);
    for record in &outcome.data {
        for single in &predicates {
            assert!(single.matches(record), "record {} failed {single:?}", record.id);
        }
    }
}

#[test]
fn search_matches_name_features_and_categories() {
    let snapshot = common::sample_snapshot();

    let by_name = FilterSpec {
        search: Some("royal".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(query(&snapshot, &by_name, &SortSpec::default(), &PageSpec::default()).total, 1);

    let by_feature = FilterSpec {
        search: Some("vip program".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(query(&snapshot, &by_feature, &SortSpec::default(), &PageSpec::default()).total, 1);

    let by_category = FilterSpec {
        search: Some("sports betting".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(
        query(&snapshot, &by_category, &SortSpec::default(), &PageSpec::default()).total,
        1
    );
}

#[test]
fn bonus_type_filter_uses_structured_tag() {
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        bonus_type: Some("no_deposit".to_string()),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.data[0].name, "Lucky Spins");
}

#[test]
fn unrecognized_bonus_type_value_is_ignored() {
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        bonus_type: Some("cashback".to_string()),
        ..FilterSpec::default()
    };
    // Permissive surface: an unknown value compiles to no predicate.
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert_eq!(outcome.total, snapshot.len());
}

#[test]
fn max_min_deposit_filter_is_inclusive() {
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        max_min_deposit: Some(10),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert_eq!(outcome.total, 3);
    assert!(outcome.data.iter().all(|record| record.min_deposit <= 10));
}

#[test]
fn software_filter_matches_any_element_substring() {
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        software: Some("netent".to_string()),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert_eq!(outcome.total, 3);
}

#[test]
fn rating_scenario_returns_two_highest_with_next_page() {
    // Ratings [4.9, 4.7, 4.5, 4.8, 4.6, 4.9], min rating 4.7,
    // sort rating desc, limit 2, offset 0.
    let snapshot = common::sample_snapshot();
    let filters = FilterSpec {
        min_rating: Some(4.7),
        ..FilterSpec::default()
    };
    let sort = SortSpec {
        field: SortField::Rating,
        order: SortOrder::Desc,
    };
    let page = PageSpec { offset: 0, limit: 2 };
    let outcome = query(&snapshot, &filters, &sort, &page);

    assert_eq!(outcome.total, 4);
    assert_eq!(outcome.data.len(), 2);
    assert_eq!(outcome.data[0].rating, 4.9);
    assert_eq!(outcome.data[1].rating, 4.9);
    assert!(outcome.page_info.has_next);
    assert!(!outcome.page_info.has_previous);
    assert_eq!(outcome.page_info.current_page, 1);
    assert_eq!(outcome.page_info.total_pages, 2);
}

#[test]
fn descending_sort_keeps_tied_records_in_snapshot_order() {
    let snapshot = common::sample_snapshot();
    let sort = SortSpec {
        field: SortField::Rating,
        order: SortOrder::Desc,
    };
    let outcome = query(&snapshot, &FilterSpec::default(), &sort, &PageSpec::default());

    // Records 1 and 6 tie at 4.9; record 1 precedes record 6 in the snapshot
    // and must stay first because only the comparator is reversed.
    assert_eq!(outcome.data[0].id.get(), 1);
    assert_eq!(outcome.data[1].id.get(), 6);
}

#[test]
fn name_sort_is_case_insensitive() {
    let snapshot = common::sample_snapshot();
    let sort = SortSpec {
        field: SortField::Name,
        order: SortOrder::Asc,
    };
    let outcome = query(&snapshot, &FilterSpec::default(), &sort, &PageSpec::default());
    let names: Vec<&str> = outcome.data.iter().map(|record| record.name.as_str()).collect();
    let mut expected = names.clone();
    expected.sort_by_key(|name| name.to_lowercase());
    assert_eq!(names, expected);
}

#[test]
fn offset_past_end_yields_empty_page_not_error() {
    let snapshot = common::sample_snapshot();
    let page = PageSpec { offset: 100, limit: 10 };
    let outcome = query(&snapshot, &FilterSpec::default(), &SortSpec::default(), &page);
    assert_eq!(outcome.total, snapshot.len());
    assert!(outcome.data.is_empty());
    assert!(!outcome.page_info.has_next);
    assert!(outcome.page_info.has_previous);
}

#[test]
fn page_info_arithmetic_matches_contract() {
    let snapshot = common::sample_snapshot();
    let page = PageSpec { offset: 2, limit: 2 };
    let outcome = query(&snapshot, &FilterSpec::default(), &SortSpec::default(), &page);
    assert_eq!(outcome.page_info.current_page, 2);
    assert_eq!(outcome.page_info.total_pages, 3);
    assert!(outcome.page_info.has_next);
    assert!(outcome.page_info.has_previous);
}

#[test]
fn page_spec_normalization_clamps_limit() {
    let normalized = PageSpec { offset: 0, limit: 0 }.normalized(200);
    assert_eq!(normalized.limit, 1);

    let capped = PageSpec { offset: 0, limit: 10_000 }.normalized(200);
    assert_eq!(capped.limit, 200);
}

#[test]
fn unknown_sort_field_is_rejected() {
    let result = sort_spec_from_params("games", "desc");
    assert_eq!(
        result,
        Err(QueryError::InvalidSortField {
            field: "games".to_string()
        })
    );
}

#[test]
fn sort_params_default_order_to_descending() {
    let spec = sort_spec_from_params("rating", "sideways").unwrap();
    assert_eq!(spec.order, SortOrder::Desc);
    let spec = sort_spec_from_params("name", "asc").unwrap();
    assert_eq!(spec.order, SortOrder::Asc);
}

#[test]
fn find_record_hits_and_misses() {
    let snapshot = common::sample_snapshot();
    let found = find_record(&snapshot, common::record_id(3)).unwrap();
    assert_eq!(found.name, "Lucky Spins");

    let missing = find_record(&snapshot, common::record_id(99));
    assert_eq!(
        missing.unwrap_err(),
        QueryError::RecordNotFound {
            id: common::record_id(99)
        }
    );
}

#[test]
fn query_does_not_mutate_snapshot() {
    let snapshot = common::sample_snapshot();
    let before = snapshot.clone();
    let filters = FilterSpec {
        search: Some("spins".to_string()),
        min_rating: Some(4.0),
        ..FilterSpec::default()
    };
    let _ = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    assert_eq!(snapshot, before);
}
