// crates/catchless-config/src/config.rs
// ============================================================================
// Module: Catchless Configuration
// Description: Configuration loading, validation, and handler construction.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: catchless-handler, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed; a handler is only built from
//! a configuration that passed validation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use catchless_handler::DEFAULT_LABEL;
use catchless_handler::ExceptionHandler;
use catchless_handler::FailureSink;
use catchless_handler::FileFailureSink;
use catchless_handler::Log;
use catchless_handler::NoopFailureSink;
use catchless_handler::Silence;
use catchless_handler::StderrFailureSink;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "catchless.toml";
/// Environment variable overriding the configuration path.
pub(crate) const CONFIG_ENV_VAR: &str = "CATCHLESS_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum handler label length.
pub(crate) const MAX_LABEL_LENGTH: usize = 128;

// ============================================================================
// SECTION: Config Model
// ============================================================================

/// Root catchless configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatchlessConfig {
    /// Exception handler selection.
    #[serde(default)]
    pub handler: HandlerConfig,
}

impl CatchlessConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.handler.validate()
    }

    /// Builds the configured exception handler.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is invalid or the log
    /// file cannot be opened.
    pub fn build_handler(&self) -> Result<Box<dyn ExceptionHandler>, ConfigError> {
        self.validate()?;
        self.handler.build()
    }
}

/// Exception handler selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HandlerConfig {
    /// Policy applied to absorbed failures.
    #[serde(default)]
    pub policy: HandlerPolicy,
    /// Label stamped on failure events.
    #[serde(default = "default_label")]
    pub label: String,
    /// Log policy settings; only valid with `policy = "log"`.
    #[serde(default)]
    pub log: Option<LogConfig>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            policy: HandlerPolicy::default(),
            label: default_label(),
            log: None,
        }
    }
}

impl HandlerConfig {
    /// Validates handler configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_label(&self.label)?;
        match (self.policy, &self.log) {
            (HandlerPolicy::Silence, Some(_)) => Err(ConfigError::Invalid(
                "handler.log requires handler.policy=log".to_string(),
            )),
            (HandlerPolicy::Log, Some(log)) => log.validate(),
            (_, None) => Ok(()),
        }
    }

    /// Returns the effective log settings, defaulting when the section is absent.
    #[must_use]
    pub fn effective_log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    /// Builds the handler described by this section.
    fn build(&self) -> Result<Box<dyn ExceptionHandler>, ConfigError> {
        match self.policy {
            HandlerPolicy::Silence => Ok(Box::new(Silence)),
            HandlerPolicy::Log => {
                let log = self.effective_log();
                let handler = Log::new(log.build_sink()?)
                    .with_label(self.label.trim())
                    .redact_messages(log.redact_messages);
                Ok(Box::new(handler))
            }
        }
    }
}

/// Policy applied to absorbed failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HandlerPolicy {
    /// Drop failures without a trace.
    Silence,
    /// Record each failure to a sink.
    #[default]
    Log,
}

/// Log policy settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Destination for failure events.
    #[serde(default)]
    pub sink: SinkKind,
    /// Log file path (JSON lines); required for the file sink.
    #[serde(default)]
    pub path: Option<String>,
    /// Withhold error messages from events.
    #[serde(default)]
    pub redact_messages: bool,
}

impl LogConfig {
    /// Validates log configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (SinkKind::File, Some(path)) => validate_path_string("handler.log.path", path),
            (SinkKind::File, None) => Err(ConfigError::Invalid(
                "handler.log.sink=file requires handler.log.path".to_string(),
            )),
            (_, Some(_)) => Err(ConfigError::Invalid(
                "handler.log.path requires handler.log.sink=file".to_string(),
            )),
            (_, None) => Ok(()),
        }
    }

    /// Opens the configured sink.
    fn build_sink(&self) -> Result<Box<dyn FailureSink>, ConfigError> {
        match self.sink {
            SinkKind::Stderr => Ok(Box::new(StderrFailureSink)),
            SinkKind::Noop => Ok(Box::new(NoopFailureSink)),
            SinkKind::File => {
                let path = self.path.as_deref().ok_or_else(|| {
                    ConfigError::Invalid(
                        "handler.log.sink=file requires handler.log.path".to_string(),
                    )
                })?;
                let sink = FileFailureSink::new(Path::new(path.trim()))
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Box::new(sink))
            }
        }
    }
}

/// Destination for failure events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to a file.
    File,
    /// Discard events.
    Noop,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration or opening a sink.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default handler label.
fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against length limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        let component_value = component.as_os_str().to_string_lossy();
        if component_value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}

/// Validates the handler label.
fn validate_label(label: &str) -> Result<(), ConfigError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid("handler.label must be non-empty".to_string()));
    }
    if trimmed.len() > MAX_LABEL_LENGTH {
        return Err(ConfigError::Invalid("handler.label exceeds max length".to_string()));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(
            "handler.label must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    // ============================================================================
    // SECTION: Path Validation Tests
    // ============================================================================

    #[test]
    fn validate_path_string_accepts_valid_path() {
        let result = validate_path_string("test_path", "./logs/failures.jsonl");
        assert!(result.is_ok(), "valid path should pass");
    }

    #[test]
    fn validate_path_string_rejects_whitespace_only() {
        let result = validate_path_string("test_path", "   ");
        assert!(result.unwrap_err().to_string().contains("non-empty"));
    }

    #[test]
    fn validate_path_string_rejects_exceeds_max_length() {
        let long_path = "a".repeat(MAX_TOTAL_PATH_LENGTH + 1);
        let result = validate_path_string("test_path", &long_path);
        assert!(result.unwrap_err().to_string().contains("max length"));
    }

    #[test]
    fn validate_path_string_rejects_component_too_long() {
        let path = format!("logs/{}", "c".repeat(MAX_PATH_COMPONENT_LENGTH + 1));
        let result = validate_path_string("handler.log.path", &path);
        assert!(result.unwrap_err().to_string().contains("handler.log.path path component"));
    }

    #[test]
    fn validate_path_rejects_long_component() {
        let path = PathBuf::from("c".repeat(MAX_PATH_COMPONENT_LENGTH + 1));
        assert!(validate_path(&path).is_err(), "long component should fail");
    }

    #[test]
    fn resolve_path_prefers_explicit_argument() {
        let explicit = Path::new("explicit.toml");
        assert_eq!(resolve_path(Some(explicit)).unwrap(), PathBuf::from("explicit.toml"));
    }

    // ============================================================================
    // SECTION: Label Validation Tests
    // ============================================================================

    #[test]
    fn validate_label_accepts_default() {
        assert!(validate_label(DEFAULT_LABEL).is_ok());
    }

    #[test]
    fn validate_label_rejects_control_characters() {
        let result = validate_label("ingest\nforged");
        assert!(result.unwrap_err().to_string().contains("control characters"));
    }

    #[test]
    fn validate_label_accepts_at_max_length() {
        assert!(validate_label(&"l".repeat(MAX_LABEL_LENGTH)).is_ok());
        assert!(validate_label(&"l".repeat(MAX_LABEL_LENGTH + 1)).is_err());
    }
}
