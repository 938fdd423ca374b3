// crates/catchless-core/src/kind.rs
// ============================================================================
// Module: Operand Kinds
// Description: Operand and result kinds carried by shape signatures.
// Purpose: Classify payload types and define kind-specific presence equality.
// Dependencies: serde::{Deserialize, Serialize}
// ============================================================================

//! ## Overview
//! Shapes operate over generic values plus four primitive kinds: `bool`,
//! `i32`, `i64` and `f64`. Generic shapes are monomorphized, so a shape over
//! `i64` already runs on its own unboxed path and `Option<i64>` is stored
//! inline. The kinds exist so signatures can describe a shape, and so presence
//! containers can compare payloads with kind-specific equality.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::any;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Operand Kind
// ============================================================================

/// Kind of a single operand or result value
///
/// # Invariants
/// - Closed set. A new primitive kind is added as a new variant, never by
///   widening an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandKind {
    /// Any type that is not one of the primitive kinds
    Generic,
    /// `bool`
    Boolean,
    /// `i32`
    Int32,
    /// `i64`
    Int64,
    /// `f64`
    Float64,
}

impl OperandKind {
    /// Every operand kind, generic first
    pub const ALL: [Self; 5] = [Self::Generic, Self::Boolean, Self::Int32, Self::Int64, Self::Float64];

    /// Stable label used in signatures and serialized events
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Boolean => "boolean",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
        }
    }

    /// Parses a label produced by [`OperandKind::label`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }

    /// Returns true for the primitive kinds
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::Generic)
    }

    /// Classifies `T` by its type name
    ///
    /// Only the four primitive types map to primitive kinds; everything else,
    /// including references to primitives, is generic. The classification is
    /// used for signatures and diagnostics, never for dispatch.
    ///
    /// Best-effort: it relies on `std::any::type_name`, whose output is not
    /// guaranteed stable across compiler releases. A type whose name stops
    /// matching degrades to `Generic`. `TypeId` is not used because it would
    /// require `T: 'static`, which excludes borrowed operands such as `&str`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        match any::type_name::<T>() {
            "bool" => Self::Boolean,
            "i32" => Self::Int32,
            "i64" => Self::Int64,
            "f64" => Self::Float64,
            _ => Self::Generic,
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SECTION: Result Kind
// ============================================================================

/// Kind of value a shape produces
///
/// # Invariants
/// - `Unit` belongs to side-effecting shapes only; every other shape returns a
///   `Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "type", content = "kind", rename_all = "snake_case")]
pub enum ResultKind {
    /// A value of the given operand kind
    Value(OperandKind),
    /// No value; the shape runs for its side effect
    Unit,
}

impl ResultKind {
    /// Result kind of a shape returning `R`
    #[must_use]
    pub fn of<R: ?Sized>() -> Self {
        Self::Value(OperandKind::of::<R>())
    }

    /// Returns true when the shape produces a value
    ///
    /// Only value-producing shapes have an optional counterpart.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Parses a label produced by the `Display` implementation
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        if label == "unit" {
            return Some(Self::Unit);
        }
        OperandKind::from_label(label).map(Self::Value)
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(kind) => f.write_str(kind.label()),
            Self::Unit => f.write_str("unit"),
        }
    }
}

// ============================================================================
// SECTION: Primitive Payloads
// ============================================================================

/// Seals [`Primitive`] so the set of primitive kinds stays closed
mod sealed {
    /// Marker implemented only for the primitive payload types
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Payload types with a dedicated primitive kind
///
/// Presence containers over these types use [`Primitive::same`] as their
/// equality. It matches `==` except for `f64`, where values compare by total
/// order: `NaN` equals itself and `0.0` differs from `-0.0`.
pub trait Primitive: Copy + fmt::Debug + sealed::Sealed {
    /// Kind tag for this payload type
    const KIND: OperandKind;

    /// Kind-specific equality for presence containers
    fn same(self, other: Self) -> bool;
}

impl Primitive for bool {
    const KIND: OperandKind = OperandKind::Boolean;

    fn same(self, other: Self) -> bool {
        self == other
    }
}

impl Primitive for i32 {
    const KIND: OperandKind = OperandKind::Int32;

    fn same(self, other: Self) -> bool {
        self == other
    }
}

impl Primitive for i64 {
    const KIND: OperandKind = OperandKind::Int64;

    fn same(self, other: Self) -> bool {
        self == other
    }
}

impl Primitive for f64 {
    const KIND: OperandKind = OperandKind::Float64;

    fn same(self, other: Self) -> bool {
        self.total_cmp(&other).is_eq()
    }
}

/// Compares two presence containers with kind-specific equality
///
/// Two absent containers are equal; a present and an absent container never
/// are.
#[must_use]
pub fn same_presence<P: Primitive>(left: Option<P>, right: Option<P>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => left.same(right),
        (None, None) => true,
        _ => false,
    }
}
