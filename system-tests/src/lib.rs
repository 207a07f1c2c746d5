// system-tests/src/lib.rs
// ============================================================================
// Module: Catalog System Tests Library
// Description: Shared fixtures and helpers for system test scenarios.
// Purpose: Provide common data documents for catalog system-test binaries.
// Dependencies: catalog-core, serde_json
// ============================================================================

//! ## Overview
//! This crate hosts shared fixtures used by the catalog system-test binaries
//! in `system-tests/tests`. Documents mirror what a production host would
//! load from disk: a listing snapshot, a reviews file, and a TOML config.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fixtures;
