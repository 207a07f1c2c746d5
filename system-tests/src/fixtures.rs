// system-tests/src/fixtures.rs
// ============================================================================
// Module: System Test Fixtures
// Description: JSON and TOML documents plus typed loaders for system tests.
// Purpose: Model the on-disk data a catalog host reads at startup.
// Dependencies: catalog-core, serde_json
// ============================================================================

//! ## Overview
//! The documents here are deliberately kept as raw strings so the tests
//! exercise the same deserialize-then-classify ingestion path a host uses,
//! not hand-built structs.

use catalog_core::Record;
use catalog_core::RelatedReview;

/// Four-record snapshot document covering every bonus classification branch.
pub const SNAPSHOT_DOCUMENT: &str = r#"[
  {
    "id": 1,
    "name": "Royal Vegas",
    "rating": 4.9,
    "bonus": "100% up to 1200 + 120 Free Spins",
    "min_deposit": 10,
    "established_year": 2000,
    "license": "Malta Gaming Authority",
    "features": ["Live Dealers", "Mobile App"],
    "payment_methods": ["Visa", "PayPal"],
    "software_providers": ["NetEnt", "Evolution Gaming"],
    "categories": ["Slots", "Live Casino"]
  },
  {
    "id": 2,
    "name": "Lucky Spins",
    "rating": 4.5,
    "bonus": "No Deposit: 50 Free Spins",
    "min_deposit": 5,
    "established_year": 2018,
    "license": "Curacao eGaming",
    "features": ["No Deposit Bonus", "Crypto Support"],
    "payment_methods": ["Bitcoin", "Visa"],
    "software_providers": ["Pragmatic Play"],
    "categories": ["Slots", "Crypto Games"]
  },
  {
    "id": 3,
    "name": "Spin Palace",
    "rating": 4.7,
    "bonus": "Collect free spins every Friday",
    "min_deposit": 15,
    "established_year": 2001,
    "license": "Malta Gaming Authority",
    "features": ["24/7 Support"],
    "payment_methods": ["Visa", "Neteller"],
    "software_providers": ["Microgaming"],
    "categories": ["Slots", "Table Games"]
  },
  {
    "id": 4,
    "name": "Live Dealer Pro",
    "rating": 4.9,
    "bonus": "Weekly cashback on live tables",
    "min_deposit": 25,
    "established_year": 2017,
    "license": "Malta Gaming Authority",
    "features": ["HD Streaming"],
    "payment_methods": ["Visa", "Skrill"],
    "software_providers": ["Evolution Gaming"],
    "categories": ["Live Blackjack", "Game Shows"]
  }
]"#;

/// Reviews document: two reviews for record 1, one for record 2.
pub const REVIEWS_DOCUMENT: &str = r#"[
  {
    "id": 1,
    "record_id": 1,
    "rating": 5,
    "author": "alex",
    "comment": "fast payouts",
    "created_at": 1000,
    "verified": true,
    "helpful_votes": 3
  },
  {
    "id": 2,
    "record_id": 1,
    "rating": 4,
    "author": "sam",
    "comment": "good selection",
    "created_at": 2000,
    "verified": false,
    "helpful_votes": 0
  },
  {
    "id": 3,
    "record_id": 2,
    "rating": 5,
    "author": "kim",
    "comment": "great no deposit offer",
    "created_at": 3000,
    "verified": false,
    "helpful_votes": 1
  }
]"#;

/// Host configuration document exercising every section.
pub const CONFIG_DOCUMENT: &str = r#"
[pagination]
default_limit = 2
max_limit = 3

[suggestions]
min_term_length = 2
max_results = 5
vocabulary = ["Live Dealers", "Free Spins", "No Deposit Bonus", "Crypto Support"]

[metrics.gauges.current_visitors]
value = 250.0
min = 180.0
max = 320.0
max_step = 5.0

[metrics.counters.total_visitors]
value = 45723
max_step = 2
"#;

/// Parses and classifies the snapshot document.
///
/// # Errors
///
/// Returns the underlying error when the document is not a valid record
/// array.
pub fn load_snapshot() -> Result<Vec<Record>, serde_json::Error> {
    let records: Vec<Record> = serde_json::from_str(SNAPSHOT_DOCUMENT)?;
    Ok(records.into_iter().map(Record::with_classified_bonus).collect())
}

/// Parses the reviews document.
///
/// # Errors
///
/// Returns the underlying error when the document is not a valid review
/// array.
pub fn load_reviews() -> Result<Vec<RelatedReview>, serde_json::Error> {
    serde_json::from_str(REVIEWS_DOCUMENT)
}
