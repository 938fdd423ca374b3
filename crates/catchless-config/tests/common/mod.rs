// crates/catchless-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for catchless-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use catchless_config::CatchlessConfig;
use catchless_config::ConfigError;
use tempfile::TempDir;

/// Result type shared by config integration tests.
pub type TestResult = Result<(), String>;

/// Parses a TOML string into a validated `CatchlessConfig`.
pub fn config_from_toml(toml_str: &str) -> Result<CatchlessConfig, ConfigError> {
    CatchlessConfig::from_toml_str(toml_str)
}

/// Writes `contents` to a config file inside a fresh temp directory.
pub fn write_config(contents: &str) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("catchless.toml");
    fs::write(&path, contents).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Checks that `result` failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
