// crates/catalog-core/tests/common/mod.rs
// ============================================================================
// Module: Test Fixtures
// Description: Shared snapshot builders for catalog-core tests.
// Purpose: Provide a deterministic six-record snapshot with reviews.
// Dependencies: catalog-core
// ============================================================================

//! Shared fixtures: a six-record snapshot whose ratings and attributes cover
//! every filter and bucket boundary.

#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    reason = "Fixture helpers are shared across test binaries; each binary uses a subset."
)]

use catalog_core::Record;
use catalog_core::RecordId;
use catalog_core::RelatedReview;
use catalog_core::ReviewId;
use catalog_core::Timestamp;

/// Builds a record identifier from a raw value known to be non-zero.
///
/// # Panics
///
/// Panics when `raw` is zero; fixtures only pass literals >= 1.
#[must_use]
pub fn record_id(raw: u64) -> RecordId {
    RecordId::from_raw(raw).unwrap()
}

/// Builds a review identifier from a raw value known to be non-zero.
///
/// # Panics
///
/// Panics when `raw` is zero; fixtures only pass literals >= 1.
#[must_use]
pub fn review_id(raw: u64) -> ReviewId {
    ReviewId::from_raw(raw).unwrap()
}

/// Builds one fixture record and classifies its bonus description.
#[must_use]
#[allow(clippy::too_many_arguments, reason = "Fixture builder mirrors the record shape.")]
pub fn record(
    id: u64,
    name: &str,
    rating: f64,
    bonus: &str,
    min_deposit: u64,
    established_year: i32,
    license: &str,
    features: &[&str],
    payment_methods: &[&str],
    software_providers: &[&str],
    categories: &[&str],
) -> Record {
    Record {
        id: record_id(id),
        name: name.to_string(),
        rating,
        bonus: bonus.to_string(),
        bonus_type: None,
        min_deposit,
        established_year,
        license: license.to_string(),
        features: features.iter().map(ToString::to_string).collect(),
        payment_methods: payment_methods.iter().map(ToString::to_string).collect(),
        software_providers: software_providers.iter().map(ToString::to_string).collect(),
        categories: categories.iter().map(ToString::to_string).collect(),
    }
    .with_classified_bonus()
}

/// Six-record snapshot with ratings [4.9, 4.7, 4.5, 4.8, 4.6, 4.9].
#[must_use]
pub fn sample_snapshot() -> Vec<Record> {
    vec![
        record(
            1,
            "Royal Vegas",
            4.9,
            "100% up to 1200 + 120 Free Spins",
            10,
            2000,
            "Malta Gaming Authority",
            &["Live Dealers", "Mobile App", "Crypto Payments"],
            &["Visa", "Mastercard", "Bitcoin", "PayPal"],
            &["NetEnt", "Microgaming", "Evolution Gaming"],
            &["Slots", "Table Games", "Live Casino"],
        ),
        record(
            2,
            "Spin Palace",
            4.7,
            "100% up to 1000 + 100 Free Spins",
            15,
            2001,
            "Malta Gaming Authority",
            &["24/7 Support", "Fast Withdrawals"],
            &["Visa", "Mastercard", "PayPal", "Neteller"],
            &["Microgaming", "NetEnt", "Play'n GO"],
            &["Slots", "Progressive Jackpots", "Table Games"],
        ),
        record(
            3,
            "Lucky Spins",
            4.5,
            "No Deposit: 50 Free Spins",
            5,
            2018,
            "Curacao eGaming",
            &["No Deposit Bonus", "Sports Betting", "Crypto Support"],
            &["Bitcoin", "Ethereum", "Visa"],
            &["Pragmatic Play", "BGaming"],
            &["Slots", "Sports Betting", "Crypto Games"],
        ),
        record(
            4,
            "Diamond Elite",
            4.8,
            "200% up to 2000 + 200 Free Spins",
            20,
            2015,
            "Malta Gaming Authority",
            &["VIP Program", "Live Dealers", "Personal Manager"],
            &["Visa", "Mastercard", "Bitcoin", "Bank Transfer"],
            &["Evolution Gaming", "NetEnt", "Pragmatic Play"],
            &["Live Casino", "VIP Games", "Jackpots"],
        ),
        record(
            5,
            "Mega Slots",
            4.6,
            "150% up to 800 + 200 Free Spins",
            10,
            2019,
            "Curacao eGaming",
            &["3000+ Slots", "Daily Bonuses", "Tournament"],
            &["Visa", "Mastercard", "Bitcoin", "Dogecoin"],
            &["Pragmatic Play", "Red Tiger", "Yggdrasil"],
            &["Video Slots", "Classic Slots", "Tournaments"],
        ),
        record(
            6,
            "Live Dealer Pro",
            4.9,
            "Live Casino Cashback every week",
            25,
            2017,
            "Malta Gaming Authority",
            &["24/7 Live Dealers", "HD Streaming"],
            &["Visa", "Mastercard", "PayPal", "Skrill"],
            &["Evolution Gaming", "Ezugi"],
            &["Live Blackjack", "Live Roulette", "Game Shows"],
        ),
    ]
}

/// Builds one fixture review.
#[must_use]
pub fn review(id: u64, record: u64, rating: u8, created_at_millis: i64) -> RelatedReview {
    RelatedReview {
        id: review_id(id),
        record_id: record_id(record),
        rating,
        author: format!("user-{id}"),
        comment: format!("review {id}"),
        created_at: Timestamp::from_unix_millis(created_at_millis),
        verified: false,
        helpful_votes: 0,
    }
}

/// Reviews for records 1 and 2: two five-star and one four-star.
#[must_use]
pub fn sample_reviews() -> Vec<RelatedReview> {
    vec![
        review(1, 1, 5, 1_000),
        review(2, 1, 4, 2_000),
        review(3, 2, 5, 3_000),
    ]
}
