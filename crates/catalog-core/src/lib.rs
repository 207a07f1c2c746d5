// crates/catalog-core/src/lib.rs
// ============================================================================
// Module: Catalog Core
// Description: Query, suggestion, aggregation, and metrics engines for
//              catalog listing snapshots.
// Purpose: Provide the pure evaluation core consumed by transport layers.
// Dependencies: rand, serde, thiserror, time
// ============================================================================

//! ## Overview
//! `catalog-core` serves filtered, sorted, paginated views of an immutable
//! per-request snapshot of listing records, computes derived statistics
//! (review aggregates, categorical histograms), and exposes a bounded
//! random-walk metrics simulator. The crate receives already-parsed query
//! parameters and returns plain result structures; HTTP routing, storage
//! backends, and scheduling are host concerns behind the interfaces module.

/// Data model: identifiers, entities, parameter bundles.
pub mod core;
/// Backend-agnostic storage interfaces.
pub mod interfaces;
/// Evaluation engines.
pub mod runtime;

pub use core::BonusId;
pub use core::BonusOffer;
pub use core::BonusType;
pub use core::DEFAULT_MAX_PAGE_LIMIT;
pub use core::DEFAULT_PAGE_LIMIT;
pub use core::FilterSpec;
pub use core::PageInfo;
pub use core::PageSpec;
pub use core::QueryOutcome;
pub use core::Record;
pub use core::RecordId;
pub use core::RelatedReview;
pub use core::ReviewId;
pub use core::ReviewSubmission;
pub use core::SortField;
pub use core::SortOrder;
pub use core::SortSpec;
pub use core::Timestamp;
pub use interfaces::ReviewStore;
pub use interfaces::StoreError;
pub use runtime::InMemoryReviewStore;
pub use runtime::MetricState;
pub use runtime::MetricsSimulator;
pub use runtime::QueryError;
pub use runtime::QueryTracker;
pub use runtime::SubmissionError;
