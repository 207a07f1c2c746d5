// crates/catalog-core/src/core/record.rs
// ============================================================================
// Module: Catalog Record Model
// Description: Catalog listing entities and bonus classification.
// Purpose: Define the immutable per-request snapshot unit consumed by the
//          query, suggestion, and aggregation engines.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! A [`Record`] is a single catalog listing with scalar and multi-valued
//! attributes. Records are immutable within a request; engines receive a
//! snapshot slice and never mutate it. The free-text bonus description is
//! classified into a structured [`BonusType`] once at ingestion, so filters
//! dispatch over an enumerated tag instead of re-deriving substrings per
//! query.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RecordId;

// ============================================================================
// SECTION: Bonus Classification
// ============================================================================

/// Structured bonus tag derived from the free-text bonus description.
///
/// # Invariants
/// - Variants are stable for serialization and filter matching.
/// - Classification happens once at ingestion, never per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusType {
    /// Percentage match bonus on a deposit.
    Welcome,
    /// Bonus granted without a deposit.
    NoDeposit,
    /// Free spins promotion.
    FreeSpins,
}

impl BonusType {
    /// Classifies a free-text bonus description.
    ///
    /// Branches apply in a fixed order, first match wins: a `%` sign marks a
    /// welcome bonus, then `no deposit`, then `free spins` (both
    /// case-insensitive). Unmatched descriptions stay unclassified.
    #[must_use]
    pub fn classify(description: &str) -> Option<Self> {
        if description.contains('%') {
            return Some(Self::Welcome);
        }
        let lowered = description.to_lowercase();
        if lowered.contains("no deposit") {
            return Some(Self::NoDeposit);
        }
        if lowered.contains("free spins") {
            return Some(Self::FreeSpins);
        }
        None
    }

    /// Parses a filter-parameter value into a bonus tag.
    ///
    /// Returns `None` for unrecognized values; the predicate compiler treats
    /// those as "no constraint" to keep the filter surface permissive.
    #[must_use]
    pub fn from_filter_value(value: &str) -> Option<Self> {
        match value {
            "welcome" => Some(Self::Welcome),
            "no_deposit" => Some(Self::NoDeposit),
            "free_spins" => Some(Self::FreeSpins),
            _ => None,
        }
    }
}

impl fmt::Display for BonusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Welcome => "welcome",
            Self::NoDeposit => "no_deposit",
            Self::FreeSpins => "free_spins",
        };
        label.fmt(f)
    }
}

// ============================================================================
// SECTION: Record
// ============================================================================

/// Catalog listing entity.
///
/// # Invariants
/// - `id` is unique within a snapshot and immutable after creation.
/// - `rating` is within `[0.0, 5.0]`.
/// - `bonus_type` reflects [`BonusType::classify`] applied to `bonus`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Record identifier.
    pub id: RecordId,
    /// Listing display name.
    pub name: String,
    /// Editorial rating in `[0.0, 5.0]`.
    pub rating: f64,
    /// Free-text bonus description.
    pub bonus: String,
    /// Structured bonus tag computed at ingestion. Absent in source data;
    /// ingestion recomputes it via [`Record::with_classified_bonus`].
    #[serde(default)]
    pub bonus_type: Option<BonusType>,
    /// Minimum deposit accepted, in whole currency units.
    pub min_deposit: u64,
    /// Year the listing was established.
    pub established_year: i32,
    /// Licensing authority name.
    pub license: String,
    /// Ordered feature labels.
    pub features: Vec<String>,
    /// Accepted payment methods.
    pub payment_methods: Vec<String>,
    /// Software providers powering the listing.
    pub software_providers: Vec<String>,
    /// Content categories.
    pub categories: Vec<String>,
}

impl Record {
    /// Recomputes the structured bonus tag from the bonus description.
    ///
    /// Ingestion boundaries call this after deserializing external data so
    /// the tag invariant holds regardless of what the source file carried.
    #[must_use]
    pub fn with_classified_bonus(mut self) -> Self {
        self.bonus_type = BonusType::classify(&self.bonus);
        self
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
