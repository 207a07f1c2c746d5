// crates/catalog-core/src/core/bonus.rs
// ============================================================================
// Module: Catalog Bonus Offers
// Description: Standalone bonus offers attached to records.
// Purpose: Model promotional offers filterable by owning record and kind.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Bonus offers are tracked separately from the record's inline bonus
//! description. They join to records by `record_id` the same way reviews do.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BonusId;
use crate::core::identifiers::RecordId;

// ============================================================================
// SECTION: Bonus Offers
// ============================================================================

/// Promotional offer belonging to exactly one record.
///
/// # Invariants
/// - `record_id` references the owning record; resolved by scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusOffer {
    /// Offer identifier.
    pub id: BonusId,
    /// Owning record identifier.
    pub record_id: RecordId,
    /// Offer kind label, e.g. "Welcome Bonus".
    pub kind: String,
    /// Offer headline.
    pub title: String,
    /// Whether the offer is currently active.
    pub active: bool,
}
