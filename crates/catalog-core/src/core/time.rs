// crates/catalog-core/src/core/time.rs
// ============================================================================
// Module: Catalog Time Model
// Description: Canonical timestamp representation for reviews and logs.
// Purpose: Provide deterministic, caller-supplied time values across records.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The catalog engine uses explicit time values embedded in reviews to keep
//! query results deterministic. The core never reads wall-clock time
//! directly; hosts must supply timestamps on submission.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::Date;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Canonical timestamp used on reviews and tracked events.
///
/// # Invariants
/// - Values are explicitly provided by callers; the core never reads
///   wall-clock time.
/// - Ordering is total; newest-first sorting relies on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }

    /// Parses an RFC3339 date-time or date-only string into a timestamp.
    ///
    /// Date-only values resolve to midnight UTC. Returns `None` when the
    /// input is neither form.
    #[must_use]
    pub fn parse_rfc3339(value: &str) -> Option<Self> {
        if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
            let millis = parsed.unix_timestamp_nanos() / 1_000_000;
            return i64::try_from(millis).ok().map(Self);
        }
        let date = parse_rfc3339_date(value)?;
        let midnight = date.midnight().assume_utc();
        let millis = midnight.unix_timestamp_nanos() / 1_000_000;
        i64::try_from(millis).ok().map(Self)
    }
}

/// Parses an RFC3339 date-only value (YYYY-MM-DD).
fn parse_rfc3339_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let day: u8 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = time::Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

// ============================================================================
// SECTION: Tests
// ============================================================================
