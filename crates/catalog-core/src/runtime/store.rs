// crates/catalog-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Review Store
// Description: Reference review store backed by a Vec.
// Purpose: Provide the default single-process store and the seam for tests.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The in-memory store keeps reviews in append order and assigns 1-based
//! sequential identifiers. It is the reference implementation of
//! [`ReviewStore`] for single-process hosts and tests.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::num::NonZeroU64;

use crate::core::RelatedReview;
use crate::core::ReviewId;
use crate::interfaces::ReviewStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// Vec-backed append-only review store.
///
/// # Invariants
/// - Reviews keep append order; identifiers are sequential and 1-based.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewStore {
    /// Append-ordered review log.
    reviews: Vec<RelatedReview>,
}

impl InMemoryReviewStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with existing reviews.
    #[must_use]
    pub fn with_reviews(reviews: Vec<RelatedReview>) -> Self {
        Self { reviews }
    }

    /// Number of stored reviews.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether the store holds no reviews.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

impl ReviewStore for InMemoryReviewStore {
    fn next_id(&self) -> Result<ReviewId, StoreError> {
        let raw = self
            .reviews
            .iter()
            .map(|review| review.id.get())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::Store("review id space exhausted".to_string()))?;
        NonZeroU64::new(raw)
            .map(ReviewId::new)
            .ok_or_else(|| StoreError::Invalid("review id must be non-zero".to_string()))
    }

    fn append(&mut self, review: RelatedReview) -> Result<(), StoreError> {
        if self.reviews.iter().any(|existing| existing.id == review.id) {
            return Err(StoreError::Invalid(format!(
                "duplicate review id: {}",
                review.id
            )));
        }
        self.reviews.push(review);
        Ok(())
    }

    fn all(&self) -> Result<Vec<RelatedReview>, StoreError> {
        Ok(self.reviews.clone())
    }
}
