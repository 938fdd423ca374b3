// crates/catchless-core/src/optional.rs
// ============================================================================
// Module: Optional Shapes
// Description: Shape contracts that encode failure as absence.
// Purpose: Mirror every value-returning throwing shape and carry the
//          conversion combinators.
// Dependencies: crate::{combinator, total}
// ============================================================================

//! ## Overview
//! An optional shape has the arity and operand types of some throwing shape
//! but returns `Option<R>` and never fails. `Option` is the presence
//! container for every kind: `Option<bool>`, `Option<i64>` and friends are
//! stored inline, so primitive paths stay unboxed without a dedicated
//! container per kind.
//!
//! Optional shapes come from two places, and the algebra treats them alike:
//!
//! - an exception handler wraps a throwing shape, mapping failure to `None`;
//! - code writes one directly because absence is a domain answer, such as a
//!   parser returning `None` for malformed input.
//!
//! A `None` from the second kind cannot be told apart from a handled failure.
//! That is intentional: absence only ever means "no value, use the default".
//!
//! Every optional shape converts into the matching total shape:
//!
//! ```
//! use std::cell::Cell;
//!
//! use catchless_core::prelude::*;
//!
//! let calls = Cell::new(0);
//! let lookup = |key: u32| if key == 1 { Some("one") } else { None };
//! let fallback = || {
//!     calls.set(calls.get() + 1);
//!     "many"
//! };
//! let name = lookup.or_else_get(fallback);
//!
//! assert_eq!(name(1), "one");
//! assert_eq!(calls.get(), 0);
//! assert_eq!(name(7), "many");
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! Predicates and operators refine the function and bi-function contracts and
//! inherit their combinators. There is one implementation per arity, not one
//! per family.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::combinator::OrElse;
use crate::combinator::OrElseGet;
use crate::total::Supplier;

// ============================================================================
// SECTION: Arity 0
// ============================================================================

/// Source of values that reports absence instead of failing
pub trait OptionalSupplier<R>: Fn() -> Option<R> {
    /// Converts into a total supplier that returns `result` on absence
    ///
    /// `result` is captured now and returned unchanged on every absent call.
    /// Nothing is invoked until the returned supplier is.
    fn or_else(self, result: R) -> impl Fn() -> R
    where
        Self: Sized,
        R: Clone,
    {
        let adapter = OrElse::new(self, result);
        move || adapter.get()
    }

    /// Converts into a total supplier that consults `source` on absence
    ///
    /// `source` is never called when a value is present.
    fn or_else_get<S>(self, source: S) -> impl Fn() -> R
    where
        Self: Sized,
        S: Supplier<R>,
    {
        let adapter = OrElseGet::new(self, source);
        move || adapter.get()
    }
}

impl<F, R> OptionalSupplier<R> for F where F: Fn() -> Option<R> {}

// ============================================================================
// SECTION: Arity 1
// ============================================================================

/// Mapping from one operand that reports absence instead of failing
pub trait OptionalFunction<T, R>: Fn(T) -> Option<R> {
    /// Converts into a total function that returns `result` on absence
    ///
    /// `result` is captured now and returned unchanged on every absent call.
    /// Nothing is invoked until the returned function is.
    fn or_else(self, result: R) -> impl Fn(T) -> R
    where
        Self: Sized,
        R: Clone,
    {
        let adapter = OrElse::new(self, result);
        move |value: T| adapter.apply(value)
    }

    /// Converts into a total function that consults `source` on absence
    ///
    /// `source` is never called when a value is present.
    fn or_else_get<S>(self, source: S) -> impl Fn(T) -> R
    where
        Self: Sized,
        S: Supplier<R>,
    {
        let adapter = OrElseGet::new(self, source);
        move |value: T| adapter.apply(value)
    }
}

impl<F, T, R> OptionalFunction<T, R> for F where F: Fn(T) -> Option<R> {}

/// Test over one operand that reports absence instead of failing
pub trait OptionalPredicate<T>: OptionalFunction<T, bool> {}

impl<F, T> OptionalPredicate<T> for F where F: OptionalFunction<T, bool> {}

/// Same-type mapping that reports absence instead of failing
pub trait OptionalUnaryOperator<T>: OptionalFunction<T, T> {}

impl<F, T> OptionalUnaryOperator<T> for F where F: OptionalFunction<T, T> {}

// ============================================================================
// SECTION: Arity 2
// ============================================================================

/// Mapping from two operands that reports absence instead of failing
pub trait OptionalBiFunction<T, U, R>: Fn(T, U) -> Option<R> {
    /// Converts into a total bi-function that returns `result` on absence
    ///
    /// `result` is captured now and returned unchanged on every absent call.
    /// Nothing is invoked until the returned bi-function is.
    fn or_else(self, result: R) -> impl Fn(T, U) -> R
    where
        Self: Sized,
        R: Clone,
    {
        let adapter = OrElse::new(self, result);
        move |first: T, second: U| adapter.apply_both(first, second)
    }

    /// Converts into a total bi-function that consults `source` on absence
    ///
    /// `source` is never called when a value is present.
    fn or_else_get<S>(self, source: S) -> impl Fn(T, U) -> R
    where
        Self: Sized,
        S: Supplier<R>,
    {
        let adapter = OrElseGet::new(self, source);
        move |first: T, second: U| adapter.apply_both(first, second)
    }
}

impl<F, T, U, R> OptionalBiFunction<T, U, R> for F where F: Fn(T, U) -> Option<R> {}

/// Test over two operands that reports absence instead of failing
pub trait OptionalBiPredicate<T, U>: OptionalBiFunction<T, U, bool> {}

impl<F, T, U> OptionalBiPredicate<T, U> for F where F: OptionalBiFunction<T, U, bool> {}

/// Same-type combination that reports absence instead of failing
pub trait OptionalBinaryOperator<T>: OptionalBiFunction<T, T, T> {}

impl<F, T> OptionalBinaryOperator<T> for F where F: OptionalBiFunction<T, T, T> {}
