// crates/catalog-core/src/core/mod.rs
// ============================================================================
// Module: Catalog Core Model
// Description: Data model shared by the query, aggregation, and metrics engines.
// Purpose: Re-export the canonical entity and parameter types.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The core model is pure data: identifiers, entities, and per-query
//! parameter bundles. All evaluation logic lives in [`crate::runtime`].

/// Bonus offer entities.
pub mod bonus;
/// Canonical identifiers.
pub mod identifiers;
/// Query parameter and result shapes.
pub mod query;
/// Catalog record entities and bonus classification.
pub mod record;
/// Review entities and submissions.
pub mod review;
/// Timestamp representation.
pub mod time;

pub use bonus::BonusOffer;
pub use identifiers::BonusId;
pub use identifiers::RecordId;
pub use identifiers::ReviewId;
pub use query::DEFAULT_MAX_PAGE_LIMIT;
pub use query::DEFAULT_PAGE_LIMIT;
pub use query::FilterSpec;
pub use query::PageInfo;
pub use query::PageSpec;
pub use query::QueryOutcome;
pub use query::SortField;
pub use query::SortOrder;
pub use query::SortSpec;
pub use record::BonusType;
pub use record::Record;
pub use review::RelatedReview;
pub use review::ReviewSubmission;
pub use time::Timestamp;
