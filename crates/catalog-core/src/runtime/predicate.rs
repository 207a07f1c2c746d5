// crates/catalog-core/src/runtime/predicate.rs
// ============================================================================
// Module: Catalog Predicate Compiler
// Description: Compile filter specifications into record predicates.
// Purpose: Turn optional filter parameters into an AND-combined predicate list.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each non-empty filter field compiles to exactly one predicate; a record
//! must satisfy every compiled predicate to survive filtering. String
//! comparisons are case-insensitive substring containment. Multi-valued
//! attributes match when ANY element contains the needle. Compilation is
//! pure and side-effect-free; no predicate mutates a record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BonusType;
use crate::core::FilterSpec;
use crate::core::Record;

// ============================================================================
// SECTION: Predicates
// ============================================================================

/// A single compiled filter constraint.
///
/// # Invariants
/// - Needle strings are pre-lowered at compile time.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Substring match across name, features, and categories.
    Search(String),
    /// Minimum editorial rating (inclusive).
    MinRating(f64),
    /// Structured bonus tag equality.
    Bonus(BonusType),
    /// Substring match over payment methods.
    Payment(String),
    /// Substring match over the license field.
    License(String),
    /// Maximum accepted minimum deposit (inclusive).
    MaxMinDeposit(u64),
    /// Substring match over software providers.
    Software(String),
}

impl Predicate {
    /// Evaluates this predicate against a record.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::Search(needle) => {
                contains_ci(&record.name, needle)
                    || any_contains_ci(&record.features, needle)
                    || any_contains_ci(&record.categories, needle)
            }
            Self::MinRating(min) => record.rating >= *min,
            Self::Bonus(tag) => record.bonus_type == Some(*tag),
            Self::Payment(needle) => any_contains_ci(&record.payment_methods, needle),
            Self::License(needle) => contains_ci(&record.license, needle),
            Self::MaxMinDeposit(max) => record.min_deposit <= *max,
            Self::Software(needle) => any_contains_ci(&record.software_providers, needle),
        }
    }
}

// ============================================================================
// SECTION: Compilation
// ============================================================================

/// Compiles a filter specification into its predicate list.
///
/// Absent fields contribute nothing. An unrecognized bonus-type value also
/// compiles to no predicate, keeping the filter surface permissive.
#[must_use]
pub fn compile(filters: &FilterSpec) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(search) = &filters.search {
        predicates.push(Predicate::Search(search.to_lowercase()));
    }
    if let Some(min) = filters.min_rating {
        predicates.push(Predicate::MinRating(min));
    }
    if let Some(value) = &filters.bonus_type
        && let Some(tag) = BonusType::from_filter_value(value)
    {
        predicates.push(Predicate::Bonus(tag));
    }
    if let Some(payment) = &filters.payment {
        predicates.push(Predicate::Payment(payment.to_lowercase()));
    }
    if let Some(license) = &filters.license {
        predicates.push(Predicate::License(license.to_lowercase()));
    }
    if let Some(max) = filters.max_min_deposit {
        predicates.push(Predicate::MaxMinDeposit(max));
    }
    if let Some(software) = &filters.software {
        predicates.push(Predicate::Software(software.to_lowercase()));
    }
    predicates
}

/// Evaluates the AND-combination of all predicates against a record.
#[must_use]
pub fn matches_all(predicates: &[Predicate], record: &Record) -> bool {
    predicates.iter().all(|predicate| predicate.matches(record))
}

// ============================================================================
// SECTION: Matching Helpers
// ============================================================================

/// Case-insensitive substring containment; `needle` must be pre-lowered.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Whether any element case-insensitively contains the pre-lowered needle.
fn any_contains_ci(haystack: &[String], needle: &str) -> bool {
    haystack.iter().any(|element| contains_ci(element, needle))
}
