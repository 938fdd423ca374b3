// crates/catchless-core/src/combinator.rs
// ============================================================================
// Module: Conversion Combinators
// Description: Default-value and fallback adapters over optional shapes.
// Purpose: Turn any optional shape into a total shape, once for every arity.
// Dependencies: none
// ============================================================================

//! ## Overview
//! [`OrElse`] and [`OrElseGet`] wrap an optional shape of any arity. Each
//! exposes one entry point per arity (`get`, `apply`, `apply_both`) that
//! invokes the wrapped shape exactly once and resolves absence:
//!
//! - [`OrElse`] returns a default value captured at construction,
//! - [`OrElseGet`] calls a fallback source, only when the value is absent.
//!
//! Constructing either adapter invokes nothing. The `or_else` and
//! `or_else_get` methods of the optional shape traits are thin closures over
//! these adapters; use the adapters directly when the total shape needs a
//! nameable type, for example to store it in a struct field.

// ============================================================================
// SECTION: Default Value
// ============================================================================

/// Total shape that substitutes a fixed default for absence
///
/// # Invariants
/// - `result` is captured once and cloned out on every absent invocation;
///   it is never recomputed.
#[derive(Debug, Clone, Copy)]
pub struct OrElse<O, R> {
    /// Wrapped optional shape
    optional: O,
    /// Value returned when the optional shape reports absence
    result: R,
}

impl<O, R> OrElse<O, R> {
    /// Wraps `optional` with a default `result`
    #[must_use]
    pub const fn new(optional: O, result: R) -> Self {
        Self {
            optional,
            result,
        }
    }

    /// Returns the default value
    #[must_use]
    pub const fn result(&self) -> &R {
        &self.result
    }

    /// Splits the adapter back into its optional shape and default value
    #[must_use]
    pub fn into_parts(self) -> (O, R) {
        (self.optional, self.result)
    }
}

impl<O, R: Clone> OrElse<O, R> {
    /// Invokes a wrapped optional supplier
    pub fn get(&self) -> R
    where
        O: Fn() -> Option<R>,
    {
        self.resolve((self.optional)())
    }

    /// Invokes a wrapped optional function, predicate, or unary operator
    pub fn apply<T>(&self, value: T) -> R
    where
        O: Fn(T) -> Option<R>,
    {
        self.resolve((self.optional)(value))
    }

    /// Invokes a wrapped optional bi-function, bi-predicate, or binary operator
    pub fn apply_both<T, U>(&self, first: T, second: U) -> R
    where
        O: Fn(T, U) -> Option<R>,
    {
        self.resolve((self.optional)(first, second))
    }

    /// Unwraps a present value or clones the default
    fn resolve(&self, outcome: Option<R>) -> R {
        match outcome {
            Some(value) => value,
            None => self.result.clone(),
        }
    }
}

// ============================================================================
// SECTION: Fallback Source
// ============================================================================

/// Total shape that asks a fallback source when the value is absent
///
/// # Invariants
/// - `source` runs only on the absent path, at most once per invocation, on
///   the calling thread.
/// - Anything `source` raises reaches the caller unchanged.
#[derive(Debug, Clone, Copy)]
pub struct OrElseGet<O, S> {
    /// Wrapped optional shape
    optional: O,
    /// Fallback consulted when the optional shape reports absence
    source: S,
}

impl<O, S> OrElseGet<O, S> {
    /// Wraps `optional` with a fallback `source`
    #[must_use]
    pub const fn new(optional: O, source: S) -> Self {
        Self {
            optional,
            source,
        }
    }

    /// Splits the adapter back into its optional shape and fallback source
    #[must_use]
    pub fn into_parts(self) -> (O, S) {
        (self.optional, self.source)
    }

    /// Invokes a wrapped optional supplier
    pub fn get<R>(&self) -> R
    where
        O: Fn() -> Option<R>,
        S: Fn() -> R,
    {
        (self.optional)().unwrap_or_else(&self.source)
    }

    /// Invokes a wrapped optional function, predicate, or unary operator
    pub fn apply<T, R>(&self, value: T) -> R
    where
        O: Fn(T) -> Option<R>,
        S: Fn() -> R,
    {
        (self.optional)(value).unwrap_or_else(&self.source)
    }

    /// Invokes a wrapped optional bi-function, bi-predicate, or binary operator
    pub fn apply_both<T, U, R>(&self, first: T, second: U) -> R
    where
        O: Fn(T, U) -> Option<R>,
        S: Fn() -> R,
    {
        (self.optional)(first, second).unwrap_or_else(&self.source)
    }
}
