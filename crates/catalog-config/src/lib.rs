// crates/catalog-config/src/lib.rs
// ============================================================================
// Module: Catalog Config
// Description: Canonical configuration model for the catalog engine.
// Purpose: Define, load, and validate host configuration (pagination caps,
//          suggestion vocabulary, metric seeds) consumed by transports.
// Dependencies: catalog-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! `catalog-config` owns the TOML configuration surface for catalog hosts.
//! Every section has serde defaults so a partial (or empty) document yields
//! the same configuration as [`CatalogConfig::default`]. Validation is a
//! separate explicit step; deserialization never rejects semantic nonsense
//! like a zero page limit, `validate` does.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use catalog_core::DEFAULT_MAX_PAGE_LIMIT;
use catalog_core::DEFAULT_PAGE_LIMIT;
use catalog_core::MetricState;
use catalog_core::runtime::metrics::CounterState;
use catalog_core::runtime::metrics::GaugeState;
use catalog_core::runtime::suggest::DEFAULT_MAX_SUGGESTIONS;
use catalog_core::runtime::suggest::MIN_TERM_LENGTH;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - `Invalid` messages name the offending field and constraint so callers
///   can surface them verbatim.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid TOML for the configuration model.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The document parsed but violates a semantic constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Pagination Section
// ============================================================================

/// Pagination limits applied to every query surface.
///
/// # Invariants
/// - `1 <= default_limit <= max_limit` after [`CatalogConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used when the caller supplies none.
    pub default_limit: usize,
    /// Upper bound clamped onto caller-supplied page sizes.
    pub max_limit: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: DEFAULT_MAX_PAGE_LIMIT,
        }
    }
}

// ============================================================================
// SECTION: Suggestions Section
// ============================================================================

/// Suggestion engine tuning and tag vocabulary.
///
/// # Invariants
/// - `min_term_length` and `max_results` are nonzero after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    /// Minimum search-term length before any matching happens.
    pub min_term_length: usize,
    /// Cap applied to the merged suggestion list.
    pub max_results: usize,
    /// Tag vocabulary offered alongside catalog names.
    pub vocabulary: Vec<String>,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            min_term_length: MIN_TERM_LENGTH,
            max_results: DEFAULT_MAX_SUGGESTIONS,
            vocabulary: Vec::new(),
        }
    }
}

// ============================================================================
// SECTION: Metrics Section
// ============================================================================

/// Seed for one bounded gauge.
///
/// # Invariants
/// - `min <= value <= max` and `max_step >= 0` after validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSeed {
    /// Starting value.
    pub value: f64,
    /// Lower clamp bound.
    pub min: f64,
    /// Upper clamp bound.
    pub max: f64,
    /// Largest magnitude a single tick may move the value.
    pub max_step: f64,
}

/// Seed for one monotone counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSeed {
    /// Starting value.
    pub value: u64,
    /// Largest increment a single tick may add.
    pub max_step: u64,
}

/// Metric seeds keyed by metric name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Bounded random-walk gauges.
    pub gauges: BTreeMap<String, GaugeSeed>,
    /// Monotone counters.
    pub counters: BTreeMap<String, CounterSeed>,
}

// ============================================================================
// SECTION: Root Configuration
// ============================================================================

/// Root configuration document for a catalog host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Pagination limits.
    pub pagination: PaginationConfig,
    /// Suggestion engine settings.
    pub suggestions: SuggestionsConfig,
    /// Metric simulator seeds.
    pub metrics: MetricsConfig,
}

impl CatalogConfig {
    /// Parses a configuration document from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid TOML
    /// for this model. The result is not yet validated.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(document)?)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read,
    /// [`ConfigError::Parse`] on malformed TOML, and
    /// [`ConfigError::Invalid`] when a semantic constraint fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&document)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all semantic constraints.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first violated
    /// constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pagination.default_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.default_limit must be greater than zero".to_string(),
            ));
        }
        if self.pagination.max_limit == 0 {
            return Err(ConfigError::Invalid(
                "pagination.max_limit must be greater than zero".to_string(),
            ));
        }
        if self.pagination.default_limit > self.pagination.max_limit {
            return Err(ConfigError::Invalid(
                "pagination.default_limit must not exceed pagination.max_limit".to_string(),
            ));
        }
        if self.suggestions.min_term_length == 0 {
            return Err(ConfigError::Invalid(
                "suggestions.min_term_length must be greater than zero".to_string(),
            ));
        }
        if self.suggestions.max_results == 0 {
            return Err(ConfigError::Invalid(
                "suggestions.max_results must be greater than zero".to_string(),
            ));
        }
        for (name, gauge) in &self.metrics.gauges {
            if !gauge.value.is_finite()
                || !gauge.min.is_finite()
                || !gauge.max.is_finite()
                || !gauge.max_step.is_finite()
            {
                return Err(ConfigError::Invalid(format!(
                    "metrics.gauges.{name} fields must be finite"
                )));
            }
            if gauge.min > gauge.max {
                return Err(ConfigError::Invalid(format!(
                    "metrics.gauges.{name}.min must not exceed max"
                )));
            }
            if gauge.value < gauge.min || gauge.value > gauge.max {
                return Err(ConfigError::Invalid(format!(
                    "metrics.gauges.{name}.value must lie within [min, max]"
                )));
            }
            if gauge.max_step < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "metrics.gauges.{name}.max_step must not be negative"
                )));
            }
        }
        Ok(())
    }

    /// Builds the simulator seed state from the metrics section.
    #[must_use]
    pub fn metric_state(&self) -> MetricState {
        let gauges = self
            .metrics
            .gauges
            .iter()
            .map(|(name, seed)| {
                (
                    name.clone(),
                    GaugeState {
                        value: seed.value,
                        min: seed.min,
                        max: seed.max,
                        max_step: seed.max_step,
                    },
                )
            })
            .collect();
        let counters = self
            .metrics
            .counters
            .iter()
            .map(|(name, seed)| {
                (
                    name.clone(),
                    CounterState {
                        value: seed.value,
                        max_step: seed.max_step,
                    },
                )
            })
            .collect();
        MetricState { gauges, counters }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
