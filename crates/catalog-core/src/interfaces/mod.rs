// crates/catalog-core/src/interfaces/mod.rs
// ============================================================================
// Module: Catalog Interfaces
// Description: Backend-agnostic interfaces for review storage.
// Purpose: Define the contract surfaces used by the catalog runtime.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how the catalog engine integrates with external storage
//! without embedding backend-specific details. Implementations must be
//! deterministic; the engines themselves are pure reads over snapshots and
//! only review submission appends state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::RecordId;
use crate::core::RelatedReview;
use crate::core::ReviewId;

// ============================================================================
// SECTION: Review Store
// ============================================================================

/// Review store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("review store io error: {0}")]
    Io(String),
    /// Store data is invalid.
    #[error("review store invalid data: {0}")]
    Invalid(String),
    /// Store reported an error.
    #[error("review store error: {0}")]
    Store(String),
}

/// Append-only review store.
///
/// Reviews join to records by `record_id`; the store never holds a
/// back-reference from record to review.
pub trait ReviewStore {
    /// Returns the next unassigned review identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn next_id(&self) -> Result<ReviewId, StoreError>;

    /// Appends a review to the log.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the append fails. A failed append must
    /// leave the log unchanged.
    fn append(&mut self, review: RelatedReview) -> Result<(), StoreError>;

    /// Returns all reviews in append order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when reading fails.
    fn all(&self) -> Result<Vec<RelatedReview>, StoreError>;

    /// Returns reviews owned by one record, in append order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when reading fails.
    fn for_record(&self, record_id: RecordId) -> Result<Vec<RelatedReview>, StoreError> {
        Ok(self
            .all()?
            .into_iter()
            .filter(|review| review.record_id == record_id)
            .collect())
    }

    /// Reports store readiness for liveness/readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
