// system-tests/tests/functional.rs
// ============================================================================
// Module: Catalog Functional Tests
// Description: Cross-engine scenarios over the shared fixture documents.
// Purpose: Exercise filter+sort+page flows, submissions feeding aggregates,
//          and query tracking the way a serving host composes them.
// Dependencies: catalog-config, catalog-core, system-tests
// ============================================================================

//! ## Overview
//! Each test composes several engines the way a request handler would,
//! asserting on the combined observable behavior rather than any single
//! engine in isolation.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use catalog_config::CatalogConfig;
use catalog_core::FilterSpec;
use catalog_core::PageSpec;
use catalog_core::QueryTracker;
use catalog_core::RecordId;
use catalog_core::ReviewStore;
use catalog_core::ReviewSubmission;
use catalog_core::SortSpec;
use catalog_core::Timestamp;
use catalog_core::runtime::InMemoryReviewStore;
use catalog_core::runtime::aggregate::review_stats;
use catalog_core::runtime::query::find_record;
use catalog_core::runtime::query::query;
use catalog_core::runtime::query::sort_spec_from_params;
use catalog_core::runtime::submission::submit_review;
use system_tests::fixtures;

#[test]
fn filtered_sorted_pages_walk_without_gaps() {
    let config = CatalogConfig::from_toml_str(fixtures::CONFIG_DOCUMENT).unwrap();
    let snapshot = fixtures::load_snapshot().unwrap();
    let filters = FilterSpec {
        license: Some("malta".to_string()),
        ..FilterSpec::default()
    };
    let sort = sort_spec_from_params("rating", "desc").unwrap();

    let mut seen: Vec<RecordId> = Vec::new();
    let mut offset = 0;
    loop {
        let page = PageSpec {
            offset,
            limit: config.pagination.default_limit,
        }
        .normalized(config.pagination.max_limit);
        let outcome = query(&snapshot, &filters, &sort, &page);
        if outcome.data.is_empty() {
            break;
        }
        seen.extend(outcome.data.iter().map(|record| record.id));
        offset += page.limit;
    }

    // Three Malta records, highest rating first, no duplicates.
    assert_eq!(seen.len(), 3);
    let ratings: Vec<f64> = seen
        .iter()
        .map(|id| find_record(&snapshot, *id).unwrap().rating)
        .collect();
    assert!(ratings.windows(2).all(|pair| pair[0] >= pair[1]));
    let mut deduped = seen.clone();
    deduped.dedup();
    assert_eq!(deduped, seen);
}

#[test]
fn bonus_tag_filter_uses_ingestion_classification() {
    let snapshot = fixtures::load_snapshot().unwrap();
    let filters = FilterSpec {
        bonus_type: Some("free_spins".to_string()),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
    // Only the plain free-spins record matches; the welcome bonus mentioning
    // free spins does not.
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.data[0].name, "Spin Palace");
}

#[test]
fn accepted_submission_is_visible_to_subsequent_reads() {
    let snapshot = fixtures::load_snapshot().unwrap();
    let mut store = InMemoryReviewStore::with_reviews(fixtures::load_reviews().unwrap());
    let record_id = RecordId::from_raw(4).unwrap();

    let before = review_stats(
        find_record(&snapshot, record_id).unwrap(),
        &store.all().unwrap(),
    );
    assert_eq!(before.total_reviews, 0);
    // Zero-review records report their static rating.
    assert_eq!(before.average_rating, 4.9);

    submit_review(
        &mut store,
        &snapshot,
        ReviewSubmission {
            record_id,
            rating: 3,
            author: "jo".to_string(),
            comment: "average tables".to_string(),
            submitted_at: Timestamp::from_unix_millis(4_000),
        },
    )
    .unwrap();

    let after = review_stats(
        find_record(&snapshot, record_id).unwrap(),
        &store.all().unwrap(),
    );
    assert_eq!(after.total_reviews, 1);
    assert_eq!(after.average_rating, 3.0);
}

#[test]
fn tracked_queries_accumulate_term_and_filter_usage() {
    let tracker = QueryTracker::new();
    let snapshot = fixtures::load_snapshot().unwrap();

    for term in ["live", "live", "crypto"] {
        let filters = FilterSpec {
            search: Some(term.to_string()),
            ..FilterSpec::default()
        };
        tracker.track(&filters);
        let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());
        assert!(outcome.total >= 1);
    }

    let stats = tracker.snapshot();
    assert_eq!(stats.total_queries, 3);
    assert_eq!(stats.top_queries["live"], 2);
    assert_eq!(stats.top_queries["crypto"], 1);
    assert_eq!(stats.filter_usage["search"], 3);
}
