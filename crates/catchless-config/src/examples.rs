// crates/catchless-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for catchless configuration. The output is static and
//! always passes validation.

/// Returns a canonical example `catchless.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[handler]
policy = "log"
label = "ingest"

[handler.log]
sink = "file"
path = "failures.jsonl"
redact_messages = false
"#,
    )
}
