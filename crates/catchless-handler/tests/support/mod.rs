// crates/catchless-handler/tests/support/mod.rs
// ============================================================================
// Module: Test Support
// Description: Shared result helpers, a recording handler, and a memory sink.
// ============================================================================
//! ## Overview
//! Shared test helpers for Result-based assertions and failure capture.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only helpers; not every test binary uses every helper."
)]

use std::error::Error;
use std::fmt;
use std::sync::Mutex;

use catchless_handler::ExceptionHandler;
use catchless_handler::Failure;
use catchless_handler::FailureEvent;
use catchless_handler::FailureSink;

// ========================================================================
// Test Result Helpers
// ========================================================================

/// Standard result type used across handler integration tests.
pub type TestResult<T = ()> = Result<T, Box<dyn Error>>;

/// Lightweight error type for test assertions.
#[derive(Debug)]
struct TestError {
    /// Human-readable failure message.
    message: String,
}

impl TestError {
    /// Creates a new test error with the provided message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TestError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl Error for TestError {}

/// Returns an error when a test condition fails.
///
/// # Errors
/// Returns a `TestError` when the condition is false.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestResult {
    if condition { Ok(()) } else { Err(Box::new(TestError::new(message))) }
}

// ========================================================================
// Recording Handler
// ========================================================================

/// Handler that keeps `(shape, message)` for every failure it observes.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    /// Observed failures in arrival order.
    failures: Mutex<Vec<(String, String)>>,
}

impl RecordingHandler {
    /// Returns a snapshot of the observed failures.
    pub fn failures(&self) -> Vec<(String, String)> {
        self.failures.lock().map(|failures| failures.clone()).unwrap_or_default()
    }

    /// Returns the number of observed failures.
    pub fn count(&self) -> usize {
        self.failures().len()
    }
}

impl ExceptionHandler for RecordingHandler {
    fn handle(&self, failure: &Failure<'_>) {
        if let Ok(mut failures) = self.failures.lock() {
            failures.push((failure.shape().to_string(), failure.message()));
        }
    }
}

// ========================================================================
// Memory Sink
// ========================================================================

/// Failure sink that keeps events in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Recorded events in arrival order.
    events: Mutex<Vec<FailureEvent>>,
}

impl MemorySink {
    /// Returns a snapshot of the recorded events.
    pub fn events(&self) -> Vec<FailureEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl FailureSink for MemorySink {
    fn record(&self, event: &FailureEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
