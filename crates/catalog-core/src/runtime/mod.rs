// crates/catalog-core/src/runtime/mod.rs
// ============================================================================
// Module: Catalog Runtime
// Description: Evaluation engines over immutable snapshots.
// Purpose: Re-export the query, suggestion, aggregation, submission, and
//          metrics engines.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! Runtime engines are pure functions over snapshot slices, with two
//! exceptions: review submission appends through a [`ReviewStore`] and the
//! metrics simulator mutates its own state under a single-writer lock.
//!
//! [`ReviewStore`]: crate::interfaces::ReviewStore

/// Aggregation engine: review stats, histograms, analytics.
pub mod aggregate;
/// Bounded random-walk metrics simulator and query tracking.
pub mod metrics;
/// Predicate compiler for filter specifications.
pub mod predicate;
/// Query engine: filter, sort, paginate.
pub mod query;
/// In-memory review store.
pub mod store;
/// Review submission validation.
pub mod submission;
/// Suggestion engine.
pub mod suggest;

pub use aggregate::AnalyticsReport;
pub use aggregate::Overview;
pub use aggregate::RatingBuckets;
pub use aggregate::ReviewStats;
pub use metrics::CounterState;
pub use metrics::GaugeState;
pub use metrics::MetricState;
pub use metrics::MetricsSimulator;
pub use metrics::QueryStats;
pub use metrics::QueryTracker;
pub use predicate::Predicate;
pub use query::QueryError;
pub use store::InMemoryReviewStore;
pub use submission::SubmissionError;
pub use suggest::Suggestion;
pub use suggest::SuggestionKind;
