// crates/catalog-core/src/core/review.rs
// ============================================================================
// Module: Catalog Review Model
// Description: User-submitted reviews and submission inputs.
// Purpose: Define the append-only review log entries joined to records by key.
// Dependencies: crate::core::{identifiers, time}, serde
// ============================================================================

//! ## Overview
//! A [`RelatedReview`] belongs to exactly one record via `record_id`; the
//! record holds no back-reference, so the aggregation engine resolves the
//! association by scanning. Reviews are append-only and immutable once
//! created, except for `helpful_votes`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RecordId;
use crate::core::identifiers::ReviewId;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Reviews
// ============================================================================

/// User-submitted review associated with exactly one record.
///
/// # Invariants
/// - `rating` is within `1..=5`.
/// - Immutable once created, except `helpful_votes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedReview {
    /// Review identifier.
    pub id: ReviewId,
    /// Owning record identifier.
    pub record_id: RecordId,
    /// Integer rating in `1..=5`.
    pub rating: u8,
    /// Author display name.
    pub author: String,
    /// Review body.
    pub comment: String,
    /// Submission timestamp.
    pub created_at: Timestamp,
    /// Whether the reviewer was verified.
    pub verified: bool,
    /// Helpful-vote tally.
    pub helpful_votes: u64,
}

// ============================================================================
// SECTION: Submissions
// ============================================================================

/// Transient review submission input.
///
/// # Invariants
/// - Validated before any aggregate state changes; partial submissions never
///   partially apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Owning record identifier.
    pub record_id: RecordId,
    /// Integer rating in `1..=5`.
    pub rating: u8,
    /// Author display name.
    pub author: String,
    /// Review body.
    pub comment: String,
    /// Submission timestamp supplied by the caller.
    pub submitted_at: Timestamp,
}
