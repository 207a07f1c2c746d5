// crates/catalog-core/src/runtime/metrics.rs
// ============================================================================
// Module: Catalog Metrics Simulator
// Description: Bounded random-walk gauges, monotonic counters, query tracking.
// Purpose: Evolve process-wide metric state one tick at a time under a
//          single-writer discipline.
// Dependencies: crate::core, rand, serde
// ============================================================================

//! ## Overview
//! The simulator is the only component with mutable shared state. Each tick
//! perturbs every bounded gauge by a uniform random delta, clamped to its
//! configured range, and advances every monotonic counter by a non-negative
//! delta. Ticks serialize through a mutex; readers clone the whole state
//! under the lock, so they observe pre- or post-tick values but never a torn
//! update. Scheduling (timer vs. caller-driven) is a host concern; the core
//! only defines the effect of one tick.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

use crate::core::FilterSpec;

// ============================================================================
// SECTION: Metric State
// ============================================================================

/// Bounded gauge: wanders within `[min, max]`.
///
/// # Invariants
/// - `min <= value <= max`; ticks preserve this by clamping.
/// - `max_step > 0` (validated at configuration time).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaugeState {
    /// Current gauge value.
    pub value: f64,
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
    /// Maximum absolute per-tick delta.
    pub max_step: f64,
}

/// Monotonic counter: only increases.
///
/// # Invariants
/// - `value` never decreases across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current counter value.
    pub value: u64,
    /// Maximum per-tick increment.
    pub max_step: u64,
}

/// Complete metric state: named gauges and counters.
///
/// # Invariants
/// - Initialized once from seed configuration; mutated only by ticks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricState {
    /// Bounded gauges by metric name.
    pub gauges: BTreeMap<String, GaugeState>,
    /// Monotonic counters by metric name.
    pub counters: BTreeMap<String, CounterState>,
}

// ============================================================================
// SECTION: Simulator
// ============================================================================

/// Single-writer metrics simulator.
///
/// Concurrent `tick` invocations serialize on the internal mutex; `snapshot`
/// clones the full state under the same lock.
#[derive(Debug)]
pub struct MetricsSimulator {
    /// Shared metric state guarded by the single-writer lock.
    state: Mutex<MetricState>,
}

impl MetricsSimulator {
    /// Creates a simulator from seeded state.
    #[must_use]
    pub fn new(seed: MetricState) -> Self {
        Self {
            state: Mutex::new(seed),
        }
    }

    /// Advances all metrics by one bounded random-walk step.
    ///
    /// This subsystem cannot fail; out-of-range seeds are a configuration
    /// error caught at startup, not here.
    pub fn tick(&self, rng: &mut impl Rng) {
        let mut state = self.lock();
        for gauge in state.gauges.values_mut() {
            let delta = rng.gen_range(-gauge.max_step..=gauge.max_step);
            gauge.value = (gauge.value + delta).clamp(gauge.min, gauge.max);
        }
        for counter in state.counters.values_mut() {
            counter.value += rng.gen_range(0..=counter.max_step);
        }
    }

    /// Returns a consistent copy of the current metric state.
    #[must_use]
    pub fn snapshot(&self) -> MetricState {
        self.lock().clone()
    }

    /// Acquires the state lock, recovering from poisoning.
    ///
    /// Metric state stays structurally valid even if a holder panicked
    /// mid-tick, since gauges are clamped on every write.
    fn lock(&self) -> MutexGuard<'_, MetricState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// ============================================================================
// SECTION: Query Tracking
// ============================================================================

/// Cap on tracked distinct top query terms.
pub const MAX_TOP_QUERIES: usize = 10;

/// Usage statistics accumulated from executed queries.
///
/// # Invariants
/// - `top_queries` holds at most [`MAX_TOP_QUERIES`] distinct terms; terms
///   beyond the cap still count toward `total_queries`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryStats {
    /// Total tracked queries.
    pub total_queries: u64,
    /// Query-term counts, capped to the most recently established terms.
    pub top_queries: BTreeMap<String, u64>,
    /// Usage count per filter field name.
    pub filter_usage: BTreeMap<String, u64>,
}

/// Accumulates query usage under the same single-writer discipline as the
/// simulator.
#[derive(Debug, Default)]
pub struct QueryTracker {
    /// Shared statistics guarded by the single-writer lock.
    stats: Mutex<QueryStats>,
}

impl QueryTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one executed query and its applied filters.
    pub fn track(&self, filters: &FilterSpec) {
        let mut stats = self.lock();
        stats.total_queries += 1;

        if let Some(term) = &filters.search {
            let known = stats.top_queries.contains_key(term);
            if known || stats.top_queries.len() < MAX_TOP_QUERIES {
                *stats.top_queries.entry(term.clone()).or_insert(0) += 1;
            }
        }
        for field in applied_filter_fields(filters) {
            *stats.filter_usage.entry(field.to_string()).or_insert(0) += 1;
        }
    }

    /// Returns a consistent copy of the accumulated statistics.
    #[must_use]
    pub fn snapshot(&self) -> QueryStats {
        self.lock().clone()
    }

    /// Acquires the stats lock, recovering from poisoning.
    fn lock(&self) -> MutexGuard<'_, QueryStats> {
        match self.stats.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Names of the filter fields set on a specification.
fn applied_filter_fields(filters: &FilterSpec) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if filters.search.is_some() {
        fields.push("search");
    }
    if filters.min_rating.is_some() {
        fields.push("min_rating");
    }
    if filters.bonus_type.is_some() {
        fields.push("bonus_type");
    }
    if filters.payment.is_some() {
        fields.push("payment");
    }
    if filters.license.is_some() {
        fields.push("license");
    }
    if filters.max_min_deposit.is_some() {
        fields.push("max_min_deposit");
    }
    if filters.software.is_some() {
        fields.push("software");
    }
    fields
}
