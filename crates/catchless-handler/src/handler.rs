// crates/catchless-handler/src/handler.rs
// ============================================================================
// Module: Exception Handler Contract
// Description: Failure observation and throwing-to-optional conversion.
// Purpose: Turn throwing shapes into optional or total shapes behind an
//          explicit, swappable policy.
// Dependencies: catchless-core
// ============================================================================

//! ## Overview
//! An [`ExceptionHandler`] decides what happens to a failure: drop it, log
//! it, count it. It never decides the outcome of the call. Every conversion in
//! [`ExceptionHandlerExt`] follows one rule:
//!
//! - the throwing shape returns `Ok(v)`: the converted shape yields `v`
//!   (`Some(v)` for value shapes) and the handler is not consulted;
//! - the throwing shape returns `Err(e)`: the handler observes `e` once and
//!   the converted shape yields `None` (value shapes) or nothing
//!   (side-effect shapes).
//!
//! Handlers are passed explicitly; there is no global or ambient handler.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use catchless_core::ShapeSignature;
use catchless_core::throwing::ThrowingBiConsumer;
use catchless_core::throwing::ThrowingBiFunction;
use catchless_core::throwing::ThrowingBiPredicate;
use catchless_core::throwing::ThrowingBinaryOperator;
use catchless_core::throwing::ThrowingConsumer;
use catchless_core::throwing::ThrowingFunction;
use catchless_core::throwing::ThrowingPredicate;
use catchless_core::throwing::ThrowingRunnable;
use catchless_core::throwing::ThrowingSupplier;
use catchless_core::throwing::ThrowingUnaryOperator;

// ============================================================================
// SECTION: Failure
// ============================================================================

/// One failed invocation of a throwing shape
///
/// # Invariants
/// - Borrowed for the duration of [`ExceptionHandler::handle`] only; handlers
///   that keep anything must copy it out.
pub struct Failure<'a> {
    /// Signature of the shape that failed
    shape: ShapeSignature,
    /// Error returned by the shape
    error: &'a dyn fmt::Display,
}

impl<'a> Failure<'a> {
    /// Describes a failure of `shape` with `error`
    #[must_use]
    pub const fn new(shape: ShapeSignature, error: &'a dyn fmt::Display) -> Self {
        Self {
            shape,
            error,
        }
    }

    /// Signature of the shape that failed
    #[must_use]
    pub const fn shape(&self) -> ShapeSignature {
        self.shape
    }

    /// Error returned by the shape
    #[must_use]
    pub const fn error(&self) -> &'a dyn fmt::Display {
        self.error
    }

    /// Renders the error through its `Display` implementation
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Debug for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("shape", &self.shape.to_string())
            .field("error", &self.message())
            .finish()
    }
}

// ============================================================================
// SECTION: Handler Trait
// ============================================================================

/// Policy applied to every failure a converted shape absorbs
pub trait ExceptionHandler: Send + Sync {
    /// Observes one failure
    ///
    /// Called exactly once per failing invocation, on the invoking thread,
    /// before the converted shape returns.
    fn handle(&self, failure: &Failure<'_>);
}

impl<H: ExceptionHandler + ?Sized> ExceptionHandler for &H {
    fn handle(&self, failure: &Failure<'_>) {
        (**self).handle(failure);
    }
}

impl<H: ExceptionHandler + ?Sized> ExceptionHandler for Box<H> {
    fn handle(&self, failure: &Failure<'_>) {
        (**self).handle(failure);
    }
}

impl<H: ExceptionHandler + ?Sized> ExceptionHandler for Arc<H> {
    fn handle(&self, failure: &Failure<'_>) {
        (**self).handle(failure);
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

/// Throwing-to-optional conversions available on every handler
///
/// Value shapes convert to optional shapes, ready for `or_else` /
/// `or_else_get`. Side-effect shapes convert straight to total shapes, since
/// there is no value whose absence could be reported.
///
/// The converted shapes borrow the handler. Convert through an `Arc` handle
/// when the shape has to outlive the scope that owns the handler.
pub trait ExceptionHandlerExt: ExceptionHandler {
    /// Converts a throwing runnable into a total runnable
    fn runnable<E, F>(&self, operation: F) -> impl Fn()
    where
        F: ThrowingRunnable<E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::runnable();
        move || {
            let _ = absorb(self, shape, operation());
        }
    }

    /// Converts a throwing supplier into an optional supplier
    fn supplier<R, E, F>(&self, operation: F) -> impl Fn() -> Option<R>
    where
        F: ThrowingSupplier<R, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::supplier::<R>();
        move || absorb(self, shape, operation())
    }

    /// Converts a throwing consumer into a total consumer
    fn consumer<T, E, F>(&self, operation: F) -> impl Fn(T)
    where
        F: ThrowingConsumer<T, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::consumer::<T>();
        move |value: T| {
            let _ = absorb(self, shape, operation(value));
        }
    }

    /// Converts a throwing bi-consumer into a total bi-consumer
    fn bi_consumer<T, U, E, F>(&self, operation: F) -> impl Fn(T, U)
    where
        F: ThrowingBiConsumer<T, U, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::bi_consumer::<T, U>();
        move |first: T, second: U| {
            let _ = absorb(self, shape, operation(first, second));
        }
    }

    /// Converts a throwing function into an optional function
    fn function<T, R, E, F>(&self, operation: F) -> impl Fn(T) -> Option<R>
    where
        F: ThrowingFunction<T, R, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::function::<T, R>();
        move |value: T| absorb(self, shape, operation(value))
    }

    /// Converts a throwing bi-function into an optional bi-function
    fn bi_function<T, U, R, E, F>(&self, operation: F) -> impl Fn(T, U) -> Option<R>
    where
        F: ThrowingBiFunction<T, U, R, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::bi_function::<T, U, R>();
        move |first: T, second: U| absorb(self, shape, operation(first, second))
    }

    /// Converts a throwing predicate into an optional predicate
    fn predicate<T, E, F>(&self, operation: F) -> impl Fn(T) -> Option<bool>
    where
        F: ThrowingPredicate<T, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::predicate::<T>();
        move |value: T| absorb(self, shape, operation(value))
    }

    /// Converts a throwing bi-predicate into an optional bi-predicate
    fn bi_predicate<T, U, E, F>(&self, operation: F) -> impl Fn(T, U) -> Option<bool>
    where
        F: ThrowingBiPredicate<T, U, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::bi_predicate::<T, U>();
        move |first: T, second: U| absorb(self, shape, operation(first, second))
    }

    /// Converts a throwing unary operator into an optional unary operator
    fn unary_operator<T, E, F>(&self, operation: F) -> impl Fn(T) -> Option<T>
    where
        F: ThrowingUnaryOperator<T, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::unary_operator::<T>();
        move |value: T| absorb(self, shape, operation(value))
    }

    /// Converts a throwing binary operator into an optional binary operator
    fn binary_operator<T, E, F>(&self, operation: F) -> impl Fn(T, T) -> Option<T>
    where
        F: ThrowingBinaryOperator<T, E>,
        E: fmt::Display,
    {
        let shape = ShapeSignature::binary_operator::<T>();
        move |first: T, second: T| absorb(self, shape, operation(first, second))
    }
}

impl<H: ExceptionHandler + ?Sized> ExceptionHandlerExt for H {}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Maps an outcome to presence, reporting failures to `handler`
fn absorb<H, R, E>(handler: &H, shape: ShapeSignature, outcome: Result<R, E>) -> Option<R>
where
    H: ExceptionHandler + ?Sized,
    E: fmt::Display,
{
    match outcome {
        Ok(value) => Some(value),
        Err(error) => {
            handler.handle(&Failure::new(shape, &error));
            None
        }
    }
}
