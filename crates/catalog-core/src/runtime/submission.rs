// crates/catalog-core/src/runtime/submission.rs
// ============================================================================
// Module: Catalog Review Submission
// Description: Validate and append user review submissions.
// Purpose: Reject invalid submissions before any aggregate state changes.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Submission validation runs completely before the store is touched, so a
//! rejected submission never partially applies. New reviews start unverified
//! with zero helpful votes.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::Record;
use crate::core::RecordId;
use crate::core::RelatedReview;
use crate::core::ReviewSubmission;
use crate::interfaces::ReviewStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Review submission errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Author name is missing or blank.
    #[error("submission missing author")]
    MissingAuthor,
    /// Comment body is missing or blank.
    #[error("submission missing comment")]
    MissingComment,
    /// Rating is outside `1..=5`.
    #[error("submission rating out of range: {rating}")]
    RatingOutOfRange {
        /// The rejected rating value.
        rating: u8,
    },
    /// The owning record does not exist in the snapshot.
    #[error("submission references unknown record: {id}")]
    UnknownRecord {
        /// The missing record identifier.
        id: RecordId,
    },
    /// The review store rejected the append.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Submission
// ============================================================================

/// Validates a submission and appends the resulting review.
///
/// # Errors
///
/// Returns [`SubmissionError`] when a required field is missing or blank,
/// the rating is out of range, the owning record is unknown, or the store
/// append fails. No state changes on rejection.
pub fn submit_review(
    store: &mut impl ReviewStore,
    snapshot: &[Record],
    submission: ReviewSubmission,
) -> Result<RelatedReview, SubmissionError> {
    validate(snapshot, &submission)?;

    let review = RelatedReview {
        id: store.next_id()?,
        record_id: submission.record_id,
        rating: submission.rating,
        author: submission.author,
        comment: submission.comment,
        created_at: submission.submitted_at,
        verified: false,
        helpful_votes: 0,
    };
    store.append(review.clone())?;
    Ok(review)
}

/// Checks every submission constraint without touching the store.
fn validate(snapshot: &[Record], submission: &ReviewSubmission) -> Result<(), SubmissionError> {
    if submission.author.trim().is_empty() {
        return Err(SubmissionError::MissingAuthor);
    }
    if submission.comment.trim().is_empty() {
        return Err(SubmissionError::MissingComment);
    }
    if !(1..=5).contains(&submission.rating) {
        return Err(SubmissionError::RatingOutOfRange {
            rating: submission.rating,
        });
    }
    if !snapshot.iter().any(|record| record.id == submission.record_id) {
        return Err(SubmissionError::UnknownRecord {
            id: submission.record_id,
        });
    }
    Ok(())
}
