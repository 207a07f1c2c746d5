//! Load-path tests for catalog-config.
// crates/catalog-config/tests/load_validation.rs
// =============================================================================
// Module: Load Validation Tests
// Description: Tests for reading, parsing, and validating config files.
// Purpose: Ensure each load failure mode maps to its own error variant.
// =============================================================================

use std::fs;

use catalog_config::CatalogConfig;
use catalog_config::ConfigError;

type TestResult = Result<(), String>;

/// Full document exercising every section.
const FULL_DOCUMENT: &str = r#"
[pagination]
default_limit = 20
max_limit = 100

[suggestions]
min_term_length = 2
max_results = 10
vocabulary = ["Live Dealers", "Free Spins", "No Deposit Bonus"]

[metrics.gauges.current_visitors]
value = 250.0
min = 180.0
max = 320.0
max_step = 5.0

[metrics.counters.total_visitors]
value = 45723
max_step = 2
"#;

#[test]
fn full_document_loads_and_validates() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("catalog.toml");
    fs::write(&path, FULL_DOCUMENT).map_err(|err| err.to_string())?;

    let config = CatalogConfig::load(&path).map_err(|err| err.to_string())?;
    if config.pagination.default_limit != 20 {
        return Err("default_limit not read from document".to_string());
    }
    if config.suggestions.vocabulary.len() != 3 {
        return Err("vocabulary not read from document".to_string());
    }
    let state = config.metric_state();
    if state.gauges["current_visitors"].max_step != 5.0 {
        return Err("gauge seed not carried into metric state".to_string());
    }
    if state.counters["total_visitors"].value != 45_723 {
        return Err("counter seed not carried into metric state".to_string());
    }
    Ok(())
}

#[test]
fn missing_file_is_a_read_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    match CatalogConfig::load(&path) {
        Err(ConfigError::Read { .. }) => Ok(()),
        Err(other) => Err(format!("expected read error, got: {other}")),
        Ok(_) => Err("expected read error".to_string()),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[pagination\ndefault_limit = 20").map_err(|err| err.to_string())?;
    match CatalogConfig::load(&path) {
        Err(ConfigError::Parse(_)) => Ok(()),
        Err(other) => Err(format!("expected parse error, got: {other}")),
        Ok(_) => Err("expected parse error".to_string()),
    }
}

#[test]
fn semantically_invalid_document_is_rejected_on_load() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("catalog.toml");
    fs::write(&path, "[pagination]\ndefault_limit = 0\n").map_err(|err| err.to_string())?;
    match CatalogConfig::load(&path) {
        Err(ConfigError::Invalid(message)) => {
            if message.contains("default_limit") {
                Ok(())
            } else {
                Err(format!("unexpected message: {message}"))
            }
        }
        Err(other) => Err(format!("expected invalid error, got: {other}")),
        Ok(_) => Err("expected invalid error".to_string()),
    }
}
