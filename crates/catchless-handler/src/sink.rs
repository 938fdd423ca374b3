// crates/catchless-handler/src/sink.rs
// ============================================================================
// Module: Failure Event Sinks
// Description: Structured failure events and the sinks that record them.
// Purpose: Emit JSON-lines failure logs without a logging framework.
// Dependencies: catchless-core, serde, serde_json
// ============================================================================

//! ## Overview
//! A [`FailureEvent`] is the serialized record of one absorbed failure. Sinks
//! write events as JSON lines; deployments route them wherever they like.
//! Sinks never fail the caller: serialization or write errors are dropped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use catchless_core::ShapeFamily;
use catchless_core::ShapeSignature;
use serde::Serialize;

use crate::handler::Failure;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Event identifier carried by every failure event.
pub const FAILURE_EVENT: &str = "operation_failed";

/// Redaction marker when the error message is kept.
const REDACTION_NONE: &str = "none";

/// Redaction marker when the error message is withheld.
const REDACTION_MESSAGE: &str = "message";

/// Failure event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Label of the handler that absorbed the failure.
    pub handler: String,
    /// Shape family of the failing operation.
    pub family: ShapeFamily,
    /// Full signature of the failing operation.
    pub shape: ShapeSignature,
    /// Rendered error message, absent when redacted.
    pub message: Option<String>,
    /// Redaction applied to the payload.
    pub redaction: &'static str,
}

impl FailureEvent {
    /// Creates a failure event with a consistent timestamp.
    #[must_use]
    pub fn new(handler: &str, failure: &Failure<'_>, redact_message: bool) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let (message, redaction) = if redact_message {
            (None, REDACTION_MESSAGE)
        } else {
            (Some(failure.message()), REDACTION_NONE)
        };
        Self {
            event: FAILURE_EVENT,
            timestamp_ms,
            handler: handler.to_string(),
            family: failure.shape().family(),
            shape: failure.shape(),
            message,
            redaction,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Sink for failure events.
pub trait FailureSink: Send + Sync {
    /// Record a failure event.
    fn record(&self, event: &FailureEvent);
}

impl<S: FailureSink + ?Sized> FailureSink for Box<S> {
    fn record(&self, event: &FailureEvent) {
        (**self).record(event);
    }
}

impl<S: FailureSink + ?Sized> FailureSink for Arc<S> {
    fn record(&self, event: &FailureEvent) {
        (**self).record(event);
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Failure sink that logs JSON lines to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrFailureSink;

impl FailureSink for StderrFailureSink {
    fn record(&self, event: &FailureEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Failure sink that logs JSON lines to a file.
#[derive(Debug)]
pub struct FileFailureSink {
    /// File handle used for append-only logging.
    file: Mutex<File>,
}

impl FileFailureSink {
    /// Opens the failure log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl FailureSink for FileFailureSink {
    fn record(&self, event: &FailureEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op failure sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFailureSink;

impl FailureSink for NoopFailureSink {
    fn record(&self, _event: &FailureEvent) {}
}
