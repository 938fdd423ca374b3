// crates/catchless-core/src/throwing.rs
// ============================================================================
// Module: Throwing Shapes
// Description: Shape contracts for operations that may fail.
// Purpose: Name every fallible function shape the algebra accepts.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A throwing shape is any callable returning `Result<_, E>`. Each contract
//! here is an alias over an `Fn` signature with a blanket implementation, so
//! closures and function items qualify without wrapping:
//!
//! ```
//! use catchless_core::prelude::*;
//!
//! fn takes_throwing<F: ThrowingFunction<&'static str, i64, std::num::ParseIntError>>(_: F) {}
//!
//! takes_throwing(|text: &str| text.parse::<i64>());
//! ```
//!
//! The contracts say nothing about idempotence. A shape invoked twice with the
//! same inputs may fail once and succeed once; that is the wrapped
//! operation's business. None of them retry or default on their own.
//!
//! Predicates and operators refine the function contracts instead of
//! duplicating them, so anything accepting a [`ThrowingFunction`] also accepts
//! a [`ThrowingPredicate`].

// ============================================================================
// SECTION: Side-Effect Shapes
// ============================================================================

/// Fallible action with no operands and no result
pub trait ThrowingRunnable<E>: Fn() -> Result<(), E> {}

impl<F, E> ThrowingRunnable<E> for F where F: Fn() -> Result<(), E> {}

/// Fallible action over one operand
pub trait ThrowingConsumer<T, E>: Fn(T) -> Result<(), E> {}

impl<F, T, E> ThrowingConsumer<T, E> for F where F: Fn(T) -> Result<(), E> {}

/// Fallible action over two operands
pub trait ThrowingBiConsumer<T, U, E>: Fn(T, U) -> Result<(), E> {}

impl<F, T, U, E> ThrowingBiConsumer<T, U, E> for F where F: Fn(T, U) -> Result<(), E> {}

// ============================================================================
// SECTION: Value Shapes
// ============================================================================

/// Fallible source of values
pub trait ThrowingSupplier<R, E>: Fn() -> Result<R, E> {}

impl<F, R, E> ThrowingSupplier<R, E> for F where F: Fn() -> Result<R, E> {}

/// Fallible mapping from one operand to a value
pub trait ThrowingFunction<T, R, E>: Fn(T) -> Result<R, E> {}

impl<F, T, R, E> ThrowingFunction<T, R, E> for F where F: Fn(T) -> Result<R, E> {}

/// Fallible mapping from two operands to a value
pub trait ThrowingBiFunction<T, U, R, E>: Fn(T, U) -> Result<R, E> {}

impl<F, T, U, R, E> ThrowingBiFunction<T, U, R, E> for F where F: Fn(T, U) -> Result<R, E> {}

// ============================================================================
// SECTION: Refinements
// ============================================================================

/// Fallible test over one operand
pub trait ThrowingPredicate<T, E>: ThrowingFunction<T, bool, E> {}

impl<F, T, E> ThrowingPredicate<T, E> for F where F: ThrowingFunction<T, bool, E> {}

/// Fallible test over two operands
pub trait ThrowingBiPredicate<T, U, E>: ThrowingBiFunction<T, U, bool, E> {}

impl<F, T, U, E> ThrowingBiPredicate<T, U, E> for F where F: ThrowingBiFunction<T, U, bool, E> {}

/// Fallible mapping from a value to a value of the same type
pub trait ThrowingUnaryOperator<T, E>: ThrowingFunction<T, T, E> {}

impl<F, T, E> ThrowingUnaryOperator<T, E> for F where F: ThrowingFunction<T, T, E> {}

/// Fallible combination of two values into one of the same type
pub trait ThrowingBinaryOperator<T, E>: ThrowingBiFunction<T, T, T, E> {}

impl<F, T, E> ThrowingBinaryOperator<T, E> for F where F: ThrowingBiFunction<T, T, T, E> {}
