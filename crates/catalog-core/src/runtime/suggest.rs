// crates/catalog-core/src/runtime/suggest.rs
// ============================================================================
// Module: Catalog Suggestion Engine
// Description: Substring suggestions across record names and a tag vocabulary.
// Purpose: Merge and cap suggestion sources for short search terms.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Suggestions are case-insensitive substring matches against every record
//! name and a fixed, externally configured tag vocabulary. Catalog matches
//! come first, then tags, truncated to the result cap. No relevance scoring
//! or deduplication is performed; that is a documented limitation, not a
//! defect to fix silently.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::Record;

// ============================================================================
// SECTION: Suggestion Shapes
// ============================================================================

/// Minimum term length before any matching is attempted.
pub const MIN_TERM_LENGTH: usize = 2;

/// Default cap on returned suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// Source of a suggestion entry.
///
/// # Invariants
/// - Variants are stable for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Matched a record name.
    Catalog,
    /// Matched the tag vocabulary.
    Tag,
}

/// One suggestion entry.
///
/// # Invariants
/// - `text` is the matched source string, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggestion source kind.
    pub kind: SuggestionKind,
    /// Matched text.
    pub text: String,
    /// Display category label.
    pub category: String,
}

// ============================================================================
// SECTION: Suggestion Evaluation
// ============================================================================

/// Suggests completions for a search term using [`MIN_TERM_LENGTH`].
///
/// Terms shorter than the minimum return an empty vector without error;
/// that is a short-query UX guard, not a failure. Catalog matches precede
/// tag matches and the combined list is truncated to `max_results`.
#[must_use]
pub fn suggest(
    snapshot: &[Record],
    vocabulary: &[String],
    term: &str,
    max_results: usize,
) -> Vec<Suggestion> {
    suggest_with(snapshot, vocabulary, term, MIN_TERM_LENGTH, max_results)
}

/// Suggests completions with an explicit minimum term length.
///
/// Hosts that expose the guard as configuration call this directly.
#[must_use]
pub fn suggest_with(
    snapshot: &[Record],
    vocabulary: &[String],
    term: &str,
    min_term_length: usize,
    max_results: usize,
) -> Vec<Suggestion> {
    if term.chars().count() < min_term_length {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    let mut suggestions = Vec::new();

    for record in snapshot {
        if record.name.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Catalog,
                text: record.name.clone(),
                category: "Catalog".to_string(),
            });
        }
    }
    for tag in vocabulary {
        if tag.to_lowercase().contains(&needle) {
            suggestions.push(Suggestion {
                kind: SuggestionKind::Tag,
                text: tag.clone(),
                category: "Tags".to_string(),
            });
        }
    }

    suggestions.truncate(max_results);
    suggestions
}
