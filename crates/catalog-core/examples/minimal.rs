// crates/catalog-core/examples/minimal.rs
// ============================================================================
// Module: Catalog Core Minimal Example
// Description: Minimal end-to-end catalog run using the in-memory store.
// Purpose: Demonstrate query/suggest/aggregate/submit against one snapshot.
// Dependencies: catalog-core, rand
// ============================================================================

//! ## Overview
//! Runs one query, one suggestion pass, one review submission, and a few
//! metrics ticks against an in-memory snapshot. This example is
//! backend-agnostic and suitable for quick verification.

use std::collections::BTreeMap;

use catalog_core::FilterSpec;
use catalog_core::MetricState;
use catalog_core::MetricsSimulator;
use catalog_core::PageSpec;
use catalog_core::Record;
use catalog_core::RecordId;
use catalog_core::ReviewStore;
use catalog_core::ReviewSubmission;
use catalog_core::SortSpec;
use catalog_core::Timestamp;
use catalog_core::runtime::InMemoryReviewStore;
use catalog_core::runtime::aggregate::review_stats;
use catalog_core::runtime::metrics::GaugeState;
use catalog_core::runtime::query::query;
use catalog_core::runtime::submission::submit_review;
use catalog_core::runtime::suggest::DEFAULT_MAX_SUGGESTIONS;
use catalog_core::runtime::suggest::suggest;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Builds a two-record snapshot with classified bonuses.
fn build_snapshot() -> Result<Vec<Record>, ExampleError> {
    let first = RecordId::from_raw(1).ok_or(ExampleError("record id must be nonzero"))?;
    let second = RecordId::from_raw(2).ok_or(ExampleError("record id must be nonzero"))?;
    Ok(vec![
        Record {
            id: first,
            name: "Royal Vegas".to_string(),
            rating: 4.9,
            bonus: "100% up to 1200 + 120 Free Spins".to_string(),
            bonus_type: None,
            min_deposit: 10,
            established_year: 2000,
            license: "Malta Gaming Authority".to_string(),
            features: vec!["Live Dealers".to_string(), "Mobile App".to_string()],
            payment_methods: vec!["Visa".to_string(), "PayPal".to_string()],
            software_providers: vec!["NetEnt".to_string()],
            categories: vec!["Slots".to_string(), "Live Casino".to_string()],
        }
        .with_classified_bonus(),
        Record {
            id: second,
            name: "Lucky Spins".to_string(),
            rating: 4.5,
            bonus: "No Deposit: 50 Free Spins".to_string(),
            bonus_type: None,
            min_deposit: 5,
            established_year: 2018,
            license: "Curacao eGaming".to_string(),
            features: vec!["No Deposit Bonus".to_string()],
            payment_methods: vec!["Bitcoin".to_string()],
            software_providers: vec!["Pragmatic Play".to_string()],
            categories: vec!["Slots".to_string()],
        }
        .with_classified_bonus(),
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = build_snapshot()?;

    let filters = FilterSpec {
        min_rating: Some(4.0),
        ..FilterSpec::default()
    };
    let outcome = query(&snapshot, &filters, &SortSpec::default(), &PageSpec::default());

    let suggestions = suggest(
        &snapshot,
        &["Free Spins".to_string(), "Live Dealers".to_string()],
        "spin",
        DEFAULT_MAX_SUGGESTIONS,
    );

    let mut store = InMemoryReviewStore::new();
    let record_id = RecordId::from_raw(1).ok_or(ExampleError("record id must be nonzero"))?;
    let review = submit_review(
        &mut store,
        &snapshot,
        ReviewSubmission {
            record_id,
            rating: 5,
            author: "guest".to_string(),
            comment: "smooth withdrawals".to_string(),
            submitted_at: Timestamp::from_unix_millis(1_000),
        },
    )?;
    let stats = review_stats(&snapshot[0], &store.all()?);

    let mut gauges = BTreeMap::new();
    gauges.insert(
        "current_visitors".to_string(),
        GaugeState {
            value: 250.0,
            min: 180.0,
            max: 320.0,
            max_step: 5.0,
        },
    );
    let simulator = MetricsSimulator::new(MetricState {
        gauges,
        counters: BTreeMap::new(),
    });
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5 {
        simulator.tick(&mut rng);
    }
    let metrics = simulator.snapshot();

    let _ = (outcome, suggestions, review, stats, metrics);
    Ok(())
}
