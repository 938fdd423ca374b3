// crates/catchless-handler/src/policy.rs
// ============================================================================
// Module: Stock Handler Policies
// Description: Silence and Log exception handlers.
// Purpose: Provide the two policies most callers need.
// Dependencies: crate::{handler, sink}
// ============================================================================

//! ## Overview
//! [`Silence`] drops failures. [`Log`] turns each failure into a
//! [`FailureEvent`] and hands it to a [`FailureSink`]. Neither changes the
//! outcome of the converted shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::handler::ExceptionHandler;
use crate::handler::Failure;
use crate::sink::FailureEvent;
use crate::sink::FailureSink;
use crate::sink::StderrFailureSink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Handler label used when none is configured.
pub const DEFAULT_LABEL: &str = "catchless";

// ============================================================================
// SECTION: Silence
// ============================================================================

/// Handler that drops every failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silence;

impl ExceptionHandler for Silence {
    fn handle(&self, _failure: &Failure<'_>) {}
}

// ============================================================================
// SECTION: Log
// ============================================================================

/// Handler that records each failure to a sink.
///
/// # Invariants
/// - Exactly one event is recorded per handled failure.
#[derive(Debug)]
pub struct Log<S> {
    /// Destination for failure events.
    sink: S,
    /// Label stamped on every event.
    label: String,
    /// Withhold error messages from events.
    redact_messages: bool,
}

impl Log<StderrFailureSink> {
    /// Logs failures as JSON lines on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(StderrFailureSink)
    }
}

impl<S: FailureSink> Log<S> {
    /// Logs failures to `sink` under the default label.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            label: DEFAULT_LABEL.to_string(),
            redact_messages: false,
        }
    }

    /// Replaces the label stamped on events.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Withholds or keeps error messages in events.
    ///
    /// Error text can carry user input; redaction keeps only the shape.
    #[must_use]
    pub fn redact_messages(mut self, redact: bool) -> Self {
        self.redact_messages = redact;
        self
    }

    /// Label stamped on events.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns true when error messages are withheld.
    #[must_use]
    pub const fn redacts_messages(&self) -> bool {
        self.redact_messages
    }

    /// Sink receiving the events.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: FailureSink> ExceptionHandler for Log<S> {
    fn handle(&self, failure: &Failure<'_>) {
        let event = FailureEvent::new(&self.label, failure, self.redact_messages);
        self.sink.record(&event);
    }
}
