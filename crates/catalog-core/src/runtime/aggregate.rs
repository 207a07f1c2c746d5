// crates/catalog-core/src/runtime/aggregate.rs
// ============================================================================
// Module: Catalog Aggregation Engine
// Description: Review statistics, histograms, and analytics rollups.
// Purpose: Compute derived statistics over record and review snapshots.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Aggregation is pure, read-only, and deterministic given the same
//! snapshot. Reviews join to records by key scan; there is no back-reference
//! from record to review. Multi-valued histograms count each record at most
//! once per distinct element, even when a record's own collection repeats a
//! value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::BonusOffer;
use crate::core::PageSpec;
use crate::core::Record;
use crate::core::RecordId;
use crate::core::RelatedReview;

// ============================================================================
// SECTION: Per-Record Review Statistics
// ============================================================================

/// Derived review statistics for one record.
///
/// # Invariants
/// - `rating_distribution` always carries keys `1..=5`, even at count zero.
/// - `average_rating` falls back to the record's static rating when no
///   reviews match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Count of reviews owned by the record.
    pub total_reviews: usize,
    /// Mean review rating, or the record's static rating when none exist.
    pub average_rating: f64,
    /// Count of reviews per rating value `1..=5`.
    pub rating_distribution: BTreeMap<u8, u64>,
}

/// Computes review statistics for one record.
#[must_use]
pub fn review_stats(record: &Record, reviews: &[RelatedReview]) -> ReviewStats {
    let mut distribution: BTreeMap<u8, u64> = (1..=5).map(|rating| (rating, 0)).collect();
    let mut total = 0usize;
    let mut rating_sum = 0u64;

    for review in reviews.iter().filter(|review| review.record_id == record.id) {
        total += 1;
        rating_sum += u64::from(review.rating);
        if let Some(count) = distribution.get_mut(&review.rating) {
            *count += 1;
        }
    }

    let average_rating = if total == 0 {
        record.rating
    } else {
        precision_u64_to_f64(rating_sum) / precision_usize_to_f64(total)
    };

    ReviewStats {
        total_reviews: total,
        average_rating,
        rating_distribution: distribution,
    }
}

// ============================================================================
// SECTION: Global Histograms
// ============================================================================

/// Occurrence counts for a scalar record field.
///
/// Each record contributes exactly one occurrence of its field value.
#[must_use]
pub fn scalar_histogram<'snapshot>(
    snapshot: &'snapshot [Record],
    accessor: impl Fn(&'snapshot Record) -> &'snapshot str,
) -> BTreeMap<String, u64> {
    let mut histogram = BTreeMap::new();
    for record in snapshot {
        *histogram.entry(accessor(record).to_string()).or_insert(0) += 1;
    }
    histogram
}

/// Record counts per distinct element of a multi-valued field.
///
/// Each record contributes at most one count per distinct element, even when
/// its own collection duplicates a value.
#[must_use]
pub fn multi_value_histogram<'snapshot>(
    snapshot: &'snapshot [Record],
    accessor: impl Fn(&'snapshot Record) -> &'snapshot [String],
) -> BTreeMap<String, u64> {
    let mut histogram = BTreeMap::new();
    for record in snapshot {
        let distinct: BTreeSet<&str> =
            accessor(record).iter().map(String::as_str).collect();
        for element in distinct {
            *histogram.entry(element.to_string()).or_insert(0) += 1;
        }
    }
    histogram
}

// ============================================================================
// SECTION: Rating Buckets
// ============================================================================

/// Fixed rating-bucket histogram.
///
/// # Invariants
/// - Buckets are mutually exclusive and exhaustive; counts sum to the
///   snapshot length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingBuckets {
    /// Ratings >= 4.8.
    #[serde(rename = "5")]
    pub five: u64,
    /// Ratings in [4.0, 4.8).
    #[serde(rename = "4")]
    pub four: u64,
    /// Ratings in [3.0, 4.0).
    #[serde(rename = "3")]
    pub three: u64,
    /// Ratings in [2.0, 3.0).
    #[serde(rename = "2")]
    pub two: u64,
    /// Ratings below 2.0.
    #[serde(rename = "1")]
    pub one: u64,
}

impl RatingBuckets {
    /// Sum of all bucket counts.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.five + self.four + self.three + self.two + self.one
    }
}

/// Buckets every record's rating into the fixed boundaries.
#[must_use]
pub fn rating_buckets(snapshot: &[Record]) -> RatingBuckets {
    let mut buckets = RatingBuckets::default();
    for record in snapshot {
        if record.rating >= 4.8 {
            buckets.five += 1;
        } else if record.rating >= 4.0 {
            buckets.four += 1;
        } else if record.rating >= 3.0 {
            buckets.three += 1;
        } else if record.rating >= 2.0 {
            buckets.two += 1;
        } else {
            buckets.one += 1;
        }
    }
    buckets
}

// ============================================================================
// SECTION: Analytics Report
// ============================================================================

/// Snapshot-wide headline counts.
///
/// # Invariants
/// - `average_rating` is rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of records in the snapshot.
    pub total_records: usize,
    /// Number of reviews across all records.
    pub total_reviews: usize,
    /// Mean editorial rating, rounded to one decimal.
    pub average_rating: f64,
    /// Number of bonus offers.
    pub total_bonuses: usize,
}

/// Full analytics rollup over one snapshot.
///
/// # Invariants
/// - Histogram maps have stable key identity; ordering beyond that is
///   unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Headline counts.
    pub overview: Overview,
    /// Record counts per license value.
    pub licenses: BTreeMap<String, u64>,
    /// Record counts per payment method.
    pub payment_methods: BTreeMap<String, u64>,
    /// Record counts per software provider.
    pub software_providers: BTreeMap<String, u64>,
    /// Fixed rating-bucket histogram.
    pub rating_distribution: RatingBuckets,
}

/// Computes the full analytics rollup.
#[must_use]
pub fn analytics(
    snapshot: &[Record],
    reviews: &[RelatedReview],
    bonuses: &[BonusOffer],
) -> AnalyticsReport {
    let total_records = snapshot.len();
    let rating_sum: f64 = snapshot.iter().map(|record| record.rating).sum();
    let average_rating = if total_records == 0 {
        0.0
    } else {
        round_one_decimal(rating_sum / precision_usize_to_f64(total_records))
    };

    AnalyticsReport {
        overview: Overview {
            total_records,
            total_reviews: reviews.len(),
            average_rating,
            total_bonuses: bonuses.len(),
        },
        licenses: scalar_histogram(snapshot, |record| &record.license),
        payment_methods: multi_value_histogram(snapshot, |record| &record.payment_methods),
        software_providers: multi_value_histogram(snapshot, |record| &record.software_providers),
        rating_distribution: rating_buckets(snapshot),
    }
}

// ============================================================================
// SECTION: Review Listings
// ============================================================================

/// Returns a record's most recent reviews, newest first.
#[must_use]
pub fn recent_reviews(
    reviews: &[RelatedReview],
    record_id: RecordId,
    limit: usize,
) -> Vec<RelatedReview> {
    let mut matched: Vec<&RelatedReview> = reviews
        .iter()
        .filter(|review| review.record_id == record_id)
        .collect();
    matched.sort_by(|left, right| right.created_at.cmp(&left.created_at));
    matched.into_iter().take(limit).cloned().collect()
}

/// Filters and paginates reviews, newest first.
///
/// Returns the page and the total matched count before slicing.
#[must_use]
pub fn review_page(
    reviews: &[RelatedReview],
    record_id: Option<RecordId>,
    min_rating: Option<u8>,
    page: &PageSpec,
) -> (Vec<RelatedReview>, usize) {
    let mut matched: Vec<&RelatedReview> = reviews
        .iter()
        .filter(|review| record_id.is_none_or(|id| review.record_id == id))
        .filter(|review| min_rating.is_none_or(|min| review.rating >= min))
        .collect();
    matched.sort_by(|left, right| right.created_at.cmp(&left.created_at));

    let total = matched.len();
    let start = page.offset.min(total);
    let end = page.offset.saturating_add(page.limit).min(total);
    let data = matched[start..end].iter().map(|review| (*review).clone()).collect();
    (data, total)
}

// ============================================================================
// SECTION: Bonus Offers
// ============================================================================

/// Filters bonus offers by owning record and kind substring.
#[must_use]
pub fn bonus_offers(
    bonuses: &[BonusOffer],
    record_id: Option<RecordId>,
    kind: Option<&str>,
) -> Vec<BonusOffer> {
    let needle = kind.map(str::to_lowercase);
    bonuses
        .iter()
        .filter(|offer| record_id.is_none_or(|id| offer.record_id == id))
        .filter(|offer| {
            needle
                .as_deref()
                .is_none_or(|needle| offer.kind.to_lowercase().contains(needle))
        })
        .cloned()
        .collect()
}

// ============================================================================
// SECTION: Numeric Helpers
// ============================================================================

/// Rounds to one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a count to f64; counts in this domain stay far below 2^52.
#[allow(clippy::cast_precision_loss, reason = "Counts stay far below 2^52.")]
const fn precision_usize_to_f64(value: usize) -> f64 {
    value as f64
}

/// Converts a rating sum to f64; sums in this domain stay far below 2^52.
#[allow(clippy::cast_precision_loss, reason = "Rating sums stay far below 2^52.")]
const fn precision_u64_to_f64(value: u64) -> f64 {
    value as f64
}
