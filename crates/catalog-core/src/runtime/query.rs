// crates/catalog-core/src/runtime/query.rs
// ============================================================================
// Module: Catalog Query Engine
// Description: Filter, sort, and paginate catalog snapshots.
// Purpose: Produce result pages with pagination metadata as a pure function
//          of the snapshot and the per-query parameter bundles.
// Dependencies: crate::core, crate::runtime::predicate
// ============================================================================

//! ## Overview
//! The query engine applies the compiled AND-predicate, a stable sort keyed
//! by an enumerated field, and a clamped pagination window. Descending order
//! reverses the comparator rather than the sorted sequence, so equal keys
//! keep their snapshot-relative order. Empty results are valid outcomes,
//! never errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::cmp::Ordering;

use thiserror::Error;

use crate::core::FilterSpec;
use crate::core::PageInfo;
use crate::core::PageSpec;
use crate::core::QueryOutcome;
use crate::core::Record;
use crate::core::RecordId;
use crate::core::SortField;
use crate::core::SortOrder;
use crate::core::SortSpec;
use crate::runtime::predicate;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Query engine errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Empty result sets never raise; only genuine rejections do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Sort key is not a recognized sortable attribute.
    #[error("invalid sort field: {field}")]
    InvalidSortField {
        /// The rejected field name.
        field: String,
    },
    /// Detail lookup found no record with the identifier.
    #[error("record not found: {id}")]
    RecordNotFound {
        /// The missing record identifier.
        id: RecordId,
    },
}

// ============================================================================
// SECTION: Parameter Parsing
// ============================================================================

/// Builds a sort specification from raw parameter values.
///
/// # Errors
///
/// Returns [`QueryError::InvalidSortField`] when the field name is not a
/// recognized sortable attribute. Unknown order values default to
/// descending.
pub fn sort_spec_from_params(field: &str, order: &str) -> Result<SortSpec, QueryError> {
    let field = SortField::parse(field).ok_or_else(|| QueryError::InvalidSortField {
        field: field.to_string(),
    })?;
    Ok(SortSpec {
        field,
        order: SortOrder::parse(order),
    })
}

// ============================================================================
// SECTION: Query Evaluation
// ============================================================================

/// Filters, sorts, and paginates a snapshot.
///
/// Pure function of its inputs; the snapshot is never mutated. `total`
/// counts the filtered sequence before slicing, and `page_info` is derived
/// from the normalized page window.
#[must_use]
pub fn query(
    snapshot: &[Record],
    filters: &FilterSpec,
    sort: &SortSpec,
    page: &PageSpec,
) -> QueryOutcome {
    let predicates = predicate::compile(filters);
    let mut matched: Vec<&Record> = snapshot
        .iter()
        .filter(|record| predicate::matches_all(&predicates, record))
        .collect();

    // Stable sort: ties keep their snapshot-relative order in both
    // directions because only the comparator is reversed.
    matched.sort_by(|left, right| compare_records(left, right, sort));

    let total = matched.len();
    let start = page.offset.min(total);
    let end = page.offset.saturating_add(page.limit).min(total);
    let data = matched[start..end].iter().map(|record| (*record).clone()).collect();

    QueryOutcome {
        data,
        total,
        page_info: page_info(total, page),
        filters_applied: filters.clone(),
    }
}

/// Looks up a record by identifier.
///
/// # Errors
///
/// Returns [`QueryError::RecordNotFound`] when no record matches.
pub fn find_record(snapshot: &[Record], id: RecordId) -> Result<&Record, QueryError> {
    snapshot
        .iter()
        .find(|record| record.id == id)
        .ok_or(QueryError::RecordNotFound { id })
}

// ============================================================================
// SECTION: Sort Comparator
// ============================================================================

/// Compares two records under a sort specification.
fn compare_records(left: &Record, right: &Record, sort: &SortSpec) -> Ordering {
    let ordering = match sort.field {
        SortField::Name => compare_ci(&left.name, &right.name),
        SortField::Rating => left.rating.total_cmp(&right.rating),
        SortField::MinDeposit => left.min_deposit.cmp(&right.min_deposit),
        SortField::EstablishedYear => left.established_year.cmp(&right.established_year),
        SortField::License => compare_ci(&left.license, &right.license),
    };
    match sort.order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Case-insensitive string ordering.
fn compare_ci(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

// ============================================================================
// SECTION: Pagination Arithmetic
// ============================================================================

/// Derives pagination metadata for a normalized page window.
fn page_info(total: usize, page: &PageSpec) -> PageInfo {
    let limit = page.limit.max(1);
    PageInfo {
        current_page: page.offset / limit + 1,
        total_pages: total.div_ceil(limit),
        has_next: page.offset.saturating_add(limit) < total,
        has_previous: page.offset > 0,
    }
}
