// crates/catchless-core/src/lib.rs
// ============================================================================
// Module: Catchless Core Root
// Description: Public API surface for the shape algebra.
// Purpose: Wire together shape contracts, presence kinds, and combinators.
// Dependencies: crate::{combinator, kind, optional, signature, throwing, total}
// ============================================================================

//! ## Overview
//! Catchless turns operations that may fail into operations with explicit,
//! typed outcomes. Three parallel catalogs of function shapes make up the
//! algebra:
//!
//! - throwing shapes return `Result<R, E>` and may fail,
//! - optional shapes return `Option<R>` and never fail,
//! - total shapes return `R` and never fail.
//!
//! Every shape is a trait over an `Fn` signature with a blanket implementation,
//! so plain closures are shapes without wrapping. Optional shapes carry the two
//! conversion combinators, `or_else` and `or_else_get`, which turn them into
//! total shapes.
//!
//! ```
//! use catchless_core::prelude::*;
//!
//! let parse = |text: &str| text.trim().parse::<i64>().ok();
//! let parse_or_zero = parse.or_else(0);
//!
//! assert_eq!(parse_or_zero(" 42 "), 42);
//! assert_eq!(parse_or_zero("forty-two"), 0);
//! ```
//!
//! Converting throwing shapes into optional shapes is the job of an exception
//! handler, which lives outside this crate and is passed around explicitly.

// ============================================================================
// SECTION: Core Modules
// ============================================================================

pub mod combinator;
pub mod kind;
pub mod optional;
pub mod signature;
pub mod throwing;
pub mod total;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use combinator::OrElse;
pub use combinator::OrElseGet;
pub use kind::OperandKind;
pub use kind::Primitive;
pub use kind::ResultKind;
pub use kind::same_presence;
pub use signature::ShapeFamily;
pub use signature::ShapeSignature;
pub use signature::SignatureError;

// ============================================================================
// SECTION: Prelude
// ============================================================================

/// Brings every shape contract into scope.
///
/// Combinator methods live on the optional shape traits, so importing the
/// prelude is the usual way to make `or_else` and `or_else_get` callable on
/// closures.
pub mod prelude {
    pub use crate::optional::OptionalBiFunction;
    pub use crate::optional::OptionalBiPredicate;
    pub use crate::optional::OptionalBinaryOperator;
    pub use crate::optional::OptionalFunction;
    pub use crate::optional::OptionalPredicate;
    pub use crate::optional::OptionalSupplier;
    pub use crate::optional::OptionalUnaryOperator;
    pub use crate::throwing::ThrowingBiConsumer;
    pub use crate::throwing::ThrowingBiFunction;
    pub use crate::throwing::ThrowingBiPredicate;
    pub use crate::throwing::ThrowingBinaryOperator;
    pub use crate::throwing::ThrowingConsumer;
    pub use crate::throwing::ThrowingFunction;
    pub use crate::throwing::ThrowingPredicate;
    pub use crate::throwing::ThrowingRunnable;
    pub use crate::throwing::ThrowingSupplier;
    pub use crate::throwing::ThrowingUnaryOperator;
    pub use crate::total::BiConsumer;
    pub use crate::total::BiFunction;
    pub use crate::total::BiPredicate;
    pub use crate::total::BinaryOperator;
    pub use crate::total::Consumer;
    pub use crate::total::Function;
    pub use crate::total::Predicate;
    pub use crate::total::Runnable;
    pub use crate::total::Supplier;
    pub use crate::total::UnaryOperator;
}
