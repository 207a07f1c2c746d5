// crates/catalog-core/src/core/query.rs
// ============================================================================
// Module: Catalog Query Parameters
// Description: Per-query parameter bundles and result shapes.
// Purpose: Define the transient filter, sort, and page specifications plus
//          the outcome contract returned to the transport layer.
// Dependencies: crate::core::record, serde
// ============================================================================

//! ## Overview
//! These types carry already-parsed query parameters into the engine. Every
//! filter field is independently optional; an absent field compiles to no
//! constraint. Sortable fields are an explicit enumeration so unknown field
//! names are rejected at the boundary instead of producing undefined
//! comparison behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::record::Record;

// ============================================================================
// SECTION: Filter Specification
// ============================================================================

/// Transient filter parameter bundle built per query.
///
/// # Invariants
/// - Every field is independently optional; `None` means no constraint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Substring searched across name, features, and categories.
    pub search: Option<String>,
    /// Minimum editorial rating (inclusive).
    pub min_rating: Option<f64>,
    /// Bonus tag filter value (`welcome`, `no_deposit`, `free_spins`).
    /// Unrecognized values compile to no constraint.
    pub bonus_type: Option<String>,
    /// Payment-method substring.
    pub payment: Option<String>,
    /// License substring.
    pub license: Option<String>,
    /// Maximum accepted minimum deposit (inclusive).
    pub max_min_deposit: Option<u64>,
    /// Software-provider substring.
    pub software: Option<String>,
}

impl FilterSpec {
    /// Returns true when no filter field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.min_rating.is_none()
            && self.bonus_type.is_none()
            && self.payment.is_none()
            && self.license.is_none()
            && self.max_min_deposit.is_none()
            && self.software.is_none()
    }
}

// ============================================================================
// SECTION: Sort Specification
// ============================================================================

/// Sortable record attributes.
///
/// # Invariants
/// - Exhaustive; unknown field names never reach the comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Listing display name (case-insensitive).
    Name,
    /// Editorial rating.
    Rating,
    /// Minimum deposit.
    MinDeposit,
    /// Establishment year.
    EstablishedYear,
    /// Licensing authority (case-insensitive).
    License,
}

impl SortField {
    /// Parses a sort-field parameter value.
    ///
    /// Returns `None` for unrecognized names; the query engine surfaces that
    /// as an invalid-sort-field rejection.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "rating" => Some(Self::Rating),
            "min_deposit" => Some(Self::MinDeposit),
            "established_year" => Some(Self::EstablishedYear),
            "license" => Some(Self::License),
            _ => None,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Name => "name",
            Self::Rating => "rating",
            Self::MinDeposit => "min_deposit",
            Self::EstablishedYear => "established_year",
            Self::License => "license",
        };
        label.fmt(f)
    }
}

/// Sort direction.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending key order.
    Asc,
    /// Descending key order.
    Desc,
}

impl SortOrder {
    /// Parses an order parameter value, defaulting unknown values to `Desc`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "asc" { Self::Asc } else { Self::Desc }
    }
}

/// Sort specification: field plus direction.
///
/// # Invariants
/// - Descending order reverses the comparator, not the sorted sequence, so
///   equal keys keep their snapshot-relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Sort key field.
    pub field: SortField,
    /// Sort direction.
    pub order: SortOrder,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Rating,
            order: SortOrder::Desc,
        }
    }
}

// ============================================================================
// SECTION: Page Specification
// ============================================================================

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Default upper bound applied to page limits.
pub const DEFAULT_MAX_PAGE_LIMIT: usize = 200;

/// Pagination window specification.
///
/// # Invariants
/// - `limit` is clamped to `[1, max_limit]` by [`PageSpec::normalized`]
///   before the engine slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// Zero-based offset into the filtered sequence.
    pub offset: usize,
    /// Maximum number of records per page.
    pub limit: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageSpec {
    /// Returns a copy with the limit clamped to `[1, max_limit]`.
    #[must_use]
    pub fn normalized(self, max_limit: usize) -> Self {
        Self {
            offset: self.offset,
            limit: self.limit.clamp(1, max_limit.max(1)),
        }
    }
}

/// Pagination metadata accompanying a result page.
///
/// # Invariants
/// - `current_page` is 1-based; `total_pages` covers all matched records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// 1-based page number containing the offset.
    pub current_page: usize,
    /// Total number of pages for the matched sequence.
    pub total_pages: usize,
    /// Whether another page follows this window.
    pub has_next: bool,
    /// Whether a page precedes this window.
    pub has_previous: bool,
}

// ============================================================================
// SECTION: Query Outcome
// ============================================================================

/// Result of a catalog query: one page plus pagination metadata.
///
/// # Invariants
/// - `total` counts the filtered (pre-slice) sequence.
/// - `filters_applied` echoes the caller's filter specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// Records within the requested page window.
    pub data: Vec<Record>,
    /// Total matched records before pagination.
    pub total: usize,
    /// Pagination metadata.
    pub page_info: PageInfo,
    /// Echo of the applied filter specification.
    pub filters_applied: FilterSpec,
}
