// crates/catchless-core/src/total.rs
// ============================================================================
// Module: Total Shapes
// Description: Shape contracts for operations that always produce a result.
// Purpose: Name the outputs of the conversion combinators and handlers.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Total shapes mirror the throwing catalog with the failure channel removed.
//! They are what the conversion combinators hand back, and what code that
//! cannot deal with failures consumes. Like the other catalogs they are
//! aliases over `Fn` signatures, so a total shape is called like any closure.

// ============================================================================
// SECTION: Side-Effect Shapes
// ============================================================================

/// Action with no operands and no result
pub trait Runnable: Fn() {}

impl<F> Runnable for F where F: Fn() {}

/// Action over one operand
pub trait Consumer<T>: Fn(T) {}

impl<F, T> Consumer<T> for F where F: Fn(T) {}

/// Action over two operands
pub trait BiConsumer<T, U>: Fn(T, U) {}

impl<F, T, U> BiConsumer<T, U> for F where F: Fn(T, U) {}

// ============================================================================
// SECTION: Value Shapes
// ============================================================================

/// Source of values
///
/// Also the fallback source accepted by `or_else_get`.
pub trait Supplier<R>: Fn() -> R {}

impl<F, R> Supplier<R> for F where F: Fn() -> R {}

/// Mapping from one operand to a value
pub trait Function<T, R>: Fn(T) -> R {}

impl<F, T, R> Function<T, R> for F where F: Fn(T) -> R {}

/// Mapping from two operands to a value
pub trait BiFunction<T, U, R>: Fn(T, U) -> R {}

impl<F, T, U, R> BiFunction<T, U, R> for F where F: Fn(T, U) -> R {}

// ============================================================================
// SECTION: Refinements
// ============================================================================

/// Test over one operand
pub trait Predicate<T>: Function<T, bool> {}

impl<F, T> Predicate<T> for F where F: Function<T, bool> {}

/// Test over two operands
pub trait BiPredicate<T, U>: BiFunction<T, U, bool> {}

impl<F, T, U> BiPredicate<T, U> for F where F: BiFunction<T, U, bool> {}

/// Mapping from a value to a value of the same type
pub trait UnaryOperator<T>: Function<T, T> {}

impl<F, T> UnaryOperator<T> for F where F: Function<T, T> {}

/// Combination of two values into one of the same type
pub trait BinaryOperator<T>: BiFunction<T, T, T> {}

impl<F, T> BinaryOperator<T> for F where F: BiFunction<T, T, T> {}
