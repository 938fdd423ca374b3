//! Config defaults and validation tests for catchless-config.
// crates/catchless-config/tests/config_validation.rs
// =============================================================================
// Module: Config Defaults and Validation Tests
// Description: Validate default behavior and cross-section invariants.
// Purpose: Ensure minimal config is valid and inconsistent sections fail.
// =============================================================================

#![allow(clippy::use_debug, reason = "Failure messages print unexpected outcomes.")]

use catchless_config::ConfigError;
use catchless_config::HandlerPolicy;
use catchless_config::SinkKind;
use catchless_config::config_toml_example;
use catchless_handler::DEFAULT_LABEL;

mod common;

use common::TestResult;
use common::assert_invalid;
use common::config_from_toml;

#[test]
fn empty_config_defaults_to_stderr_log() -> TestResult {
    let config = config_from_toml("").map_err(|err| err.to_string())?;
    if config.handler.policy != HandlerPolicy::Log {
        return Err("policy should default to log".to_string());
    }
    if config.handler.label != DEFAULT_LABEL {
        return Err(format!("label should default to {DEFAULT_LABEL}"));
    }
    if config.handler.log.is_some() {
        return Err("log section should be absent".to_string());
    }
    if config.handler.effective_log().sink != SinkKind::Stderr {
        return Err("effective sink should default to stderr".to_string());
    }
    Ok(())
}

#[test]
fn canonical_example_validates() -> TestResult {
    let config = config_from_toml(&config_toml_example()).map_err(|err| err.to_string())?;
    let log = config.handler.effective_log();
    if config.handler.label != "ingest" || log.sink != SinkKind::File {
        return Err("example should select a labelled file sink".to_string());
    }
    if log.path.as_deref() != Some("failures.jsonl") {
        return Err("example should name failures.jsonl".to_string());
    }
    Ok(())
}

#[test]
fn silence_accepts_label_only() -> TestResult {
    let config = config_from_toml("[handler]\npolicy = \"silence\"\nlabel = \"quiet\"\n")
        .map_err(|err| err.to_string())?;
    if config.handler.policy != HandlerPolicy::Silence {
        return Err("policy should be silence".to_string());
    }
    Ok(())
}

#[test]
fn silence_rejects_log_section() -> TestResult {
    assert_invalid(
        config_from_toml("[handler]\npolicy = \"silence\"\n\n[handler.log]\nsink = \"noop\"\n"),
        "handler.log requires handler.policy=log",
    )
}

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid(
        config_from_toml("[handler.log]\nsink = \"file\"\n"),
        "handler.log.sink=file requires handler.log.path",
    )
}

#[test]
fn path_requires_file_sink() -> TestResult {
    assert_invalid(
        config_from_toml("[handler.log]\nsink = \"stderr\"\npath = \"failures.jsonl\"\n"),
        "handler.log.path requires handler.log.sink=file",
    )
}

#[test]
fn blank_file_path_is_rejected() -> TestResult {
    assert_invalid(
        config_from_toml("[handler.log]\nsink = \"file\"\npath = \"  \"\n"),
        "handler.log.path must be non-empty",
    )
}

#[test]
fn blank_label_is_rejected() -> TestResult {
    assert_invalid(config_from_toml("[handler]\nlabel = \" \"\n"), "handler.label must be non-empty")
}

#[test]
fn unknown_keys_fail_to_parse() -> TestResult {
    for toml in [
        "[handler]\nretries = 3\n",
        "[handler.log]\nformat = \"json\"\n",
        "[telemetry]\nenabled = true\n",
    ] {
        match config_from_toml(toml) {
            Err(ConfigError::Parse(_)) => {}
            other => return Err(format!("expected parse error for {toml}, got {other:?}")),
        }
    }
    Ok(())
}

#[test]
fn unknown_policy_and_sink_fail_to_parse() -> TestResult {
    assert_invalid(config_from_toml("[handler]\npolicy = \"rethrow\"\n"), "config parse error")?;
    assert_invalid(config_from_toml("[handler.log]\nsink = \"syslog\"\n"), "config parse error")
}
