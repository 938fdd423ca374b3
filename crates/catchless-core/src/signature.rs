// crates/catchless-core/src/signature.rs
// ============================================================================
// Module: Shape Signatures
// Description: Families, signatures, and the full shape catalog.
// Purpose: Describe any shape by arity, operand kinds, and result kind.
// Dependencies: crate::kind, serde, thiserror
// ============================================================================

//! ## Overview
//! A [`ShapeSignature`] names one entry of the shape catalog: a family
//! (supplier, function, predicate, ...), the operand kinds it takes and the
//! kind it returns. Signatures are validated on construction, render as
//! `family(operand, ...) -> result`, and serialize as that string so they can
//! serve as stable identifiers in failure events.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::kind::OperandKind;
use crate::kind::ResultKind;

// ============================================================================
// SECTION: Shape Family
// ============================================================================

/// Family of a shape, fixing its arity and result category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFamily {
    /// No operands, no result
    Runnable,
    /// No operands, one value
    Supplier,
    /// One operand, no result
    Consumer,
    /// Two operands, no result
    BiConsumer,
    /// One operand, one value
    Function,
    /// Two operands, one value
    BiFunction,
    /// One operand, boolean result
    Predicate,
    /// Two operands, boolean result
    BiPredicate,
    /// One operand, result of the same kind
    UnaryOperator,
    /// Two operands and a result, all of one kind
    BinaryOperator,
}

impl ShapeFamily {
    /// Every family, ordered by arity then result category
    pub const ALL: [Self; 10] = [
        Self::Runnable,
        Self::Supplier,
        Self::Consumer,
        Self::BiConsumer,
        Self::Function,
        Self::BiFunction,
        Self::Predicate,
        Self::BiPredicate,
        Self::UnaryOperator,
        Self::BinaryOperator,
    ];

    /// Number of operands the family takes
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Runnable | Self::Supplier => 0,
            Self::Consumer | Self::Function | Self::Predicate | Self::UnaryOperator => 1,
            Self::BiConsumer | Self::BiFunction | Self::BiPredicate | Self::BinaryOperator => 2,
        }
    }

    /// Returns true when the family produces a value and so has an optional
    /// counterpart
    #[must_use]
    pub const fn returns_value(self) -> bool {
        !matches!(self, Self::Runnable | Self::Consumer | Self::BiConsumer)
    }

    /// Stable label used in rendered signatures
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Runnable => "runnable",
            Self::Supplier => "supplier",
            Self::Consumer => "consumer",
            Self::BiConsumer => "bi_consumer",
            Self::Function => "function",
            Self::BiFunction => "bi_function",
            Self::Predicate => "predicate",
            Self::BiPredicate => "bi_predicate",
            Self::UnaryOperator => "unary_operator",
            Self::BinaryOperator => "binary_operator",
        }
    }

    /// Parses a label produced by [`ShapeFamily::label`]
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|family| family.label() == label)
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while building or parsing a [`ShapeSignature`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Operand count does not match the family's arity
    #[error("{family} takes {expected} operand(s), got {actual}")]
    ArityMismatch {
        /// Family being built
        family: ShapeFamily,
        /// Operand count the family requires
        expected: usize,
        /// Operand count supplied
        actual: usize,
    },
    /// Result kind is not allowed for the family
    #[error("{family} cannot return {result}")]
    InvalidResult {
        /// Family being built
        family: ShapeFamily,
        /// Result kind supplied
        result: ResultKind,
    },
    /// Operator operands and result do not share one kind
    #[error("{family} requires operands and result of one kind")]
    MixedOperator {
        /// Family being built
        family: ShapeFamily,
    },
    /// Text is not a rendered signature
    #[error("malformed shape signature: {0}")]
    Malformed(String),
}

// ============================================================================
// SECTION: Shape Signature
// ============================================================================

/// Fully-described entry of the shape catalog
///
/// # Invariants
/// - `operands()` has exactly `family.arity()` entries.
/// - Side-effecting families return `Unit`; predicates return boolean values;
///   operators share one kind across operands and result.
/// - Unused operand slots hold `Generic`, so derived equality is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeSignature {
    /// Family of the shape
    family: ShapeFamily,
    /// Operand kinds; only the first `family.arity()` slots are meaningful
    operands: [OperandKind; 2],
    /// Result kind
    result: ResultKind,
}

impl ShapeSignature {
    /// Builds a signature from parts, checking the family's constraints
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError`] when the operand count or result kind does
    /// not fit the family.
    pub fn new(
        family: ShapeFamily,
        operands: &[OperandKind],
        result: ResultKind,
    ) -> Result<Self, SignatureError> {
        let expected = family.arity();
        if operands.len() != expected {
            return Err(SignatureError::ArityMismatch {
                family,
                expected,
                actual: operands.len(),
            });
        }
        let first = operands.first().copied().unwrap_or(OperandKind::Generic);
        let second = operands.get(1).copied().unwrap_or(OperandKind::Generic);
        let result_fits = match family {
            ShapeFamily::Runnable | ShapeFamily::Consumer | ShapeFamily::BiConsumer => {
                result == ResultKind::Unit
            }
            ShapeFamily::Supplier | ShapeFamily::Function | ShapeFamily::BiFunction => {
                result.is_value()
            }
            ShapeFamily::Predicate | ShapeFamily::BiPredicate => {
                result == ResultKind::Value(OperandKind::Boolean)
            }
            ShapeFamily::UnaryOperator | ShapeFamily::BinaryOperator => {
                let one_kind = result == ResultKind::Value(first)
                    && (family == ShapeFamily::UnaryOperator || second == first);
                if result.is_value() && !one_kind {
                    return Err(SignatureError::MixedOperator {
                        family,
                    });
                }
                one_kind
            }
        };
        if !result_fits {
            return Err(SignatureError::InvalidResult {
                family,
                result,
            });
        }
        Ok(Self::from_parts(family, first, second, result))
    }

    /// Builds a signature without validation
    const fn from_parts(
        family: ShapeFamily,
        first: OperandKind,
        second: OperandKind,
        result: ResultKind,
    ) -> Self {
        Self {
            family,
            operands: [first, second],
            result,
        }
    }

    /// Signature of a runnable
    #[must_use]
    pub const fn runnable() -> Self {
        Self::from_parts(
            ShapeFamily::Runnable,
            OperandKind::Generic,
            OperandKind::Generic,
            ResultKind::Unit,
        )
    }

    /// Signature of a supplier of `R`
    #[must_use]
    pub fn supplier<R: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::Supplier,
            OperandKind::Generic,
            OperandKind::Generic,
            ResultKind::of::<R>(),
        )
    }

    /// Signature of a consumer of `T`
    #[must_use]
    pub fn consumer<T: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::Consumer,
            OperandKind::of::<T>(),
            OperandKind::Generic,
            ResultKind::Unit,
        )
    }

    /// Signature of a consumer of `T` and `U`
    #[must_use]
    pub fn bi_consumer<T: ?Sized, U: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::BiConsumer,
            OperandKind::of::<T>(),
            OperandKind::of::<U>(),
            ResultKind::Unit,
        )
    }

    /// Signature of a function from `T` to `R`
    #[must_use]
    pub fn function<T: ?Sized, R: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::Function,
            OperandKind::of::<T>(),
            OperandKind::Generic,
            ResultKind::of::<R>(),
        )
    }

    /// Signature of a function from `T` and `U` to `R`
    #[must_use]
    pub fn bi_function<T: ?Sized, U: ?Sized, R: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::BiFunction,
            OperandKind::of::<T>(),
            OperandKind::of::<U>(),
            ResultKind::of::<R>(),
        )
    }

    /// Signature of a predicate over `T`
    #[must_use]
    pub fn predicate<T: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::Predicate,
            OperandKind::of::<T>(),
            OperandKind::Generic,
            ResultKind::Value(OperandKind::Boolean),
        )
    }

    /// Signature of a predicate over `T` and `U`
    #[must_use]
    pub fn bi_predicate<T: ?Sized, U: ?Sized>() -> Self {
        Self::from_parts(
            ShapeFamily::BiPredicate,
            OperandKind::of::<T>(),
            OperandKind::of::<U>(),
            ResultKind::Value(OperandKind::Boolean),
        )
    }

    /// Signature of a unary operator over `T`
    #[must_use]
    pub fn unary_operator<T: ?Sized>() -> Self {
        let kind = OperandKind::of::<T>();
        Self::from_parts(ShapeFamily::UnaryOperator, kind, OperandKind::Generic, ResultKind::Value(kind))
    }

    /// Signature of a binary operator over `T`
    #[must_use]
    pub fn binary_operator<T: ?Sized>() -> Self {
        let kind = OperandKind::of::<T>();
        Self::from_parts(ShapeFamily::BinaryOperator, kind, kind, ResultKind::Value(kind))
    }

    /// Family of the shape
    #[must_use]
    pub const fn family(&self) -> ShapeFamily {
        self.family
    }

    /// Operand kinds, one per operand
    #[must_use]
    pub fn operands(&self) -> &[OperandKind] {
        &self.operands[.. self.family.arity()]
    }

    /// Result kind
    #[must_use]
    pub const fn result(&self) -> ResultKind {
        self.result
    }

    /// Returns true when any operand or the result has a primitive kind
    #[must_use]
    pub fn is_specialized(&self) -> bool {
        let result_primitive = matches!(self.result, ResultKind::Value(kind) if kind.is_primitive());
        result_primitive || self.operands().iter().any(|kind| kind.is_primitive())
    }

    /// Enumerates every valid signature over every operand kind
    ///
    /// This is the complete catalog a per-kind code generator would have to
    /// emit; here it exists for documentation and coverage checks.
    #[must_use]
    pub fn catalog() -> Vec<Self> {
        let results: Vec<ResultKind> = std::iter::once(ResultKind::Unit)
            .chain(OperandKind::ALL.into_iter().map(ResultKind::Value))
            .collect();
        let mut shapes = Vec::new();
        for family in ShapeFamily::ALL {
            for operands in operand_tuples(family.arity()) {
                for result in &results {
                    if let Ok(shape) = Self::new(family, &operands, *result) {
                        shapes.push(shape);
                    }
                }
            }
        }
        shapes
    }
}

impl fmt::Display for ShapeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.family)?;
        for (index, operand) in self.operands().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(operand.label())?;
        }
        write!(f, ") -> {}", self.result)
    }
}

impl FromStr for ShapeSignature {
    type Err = SignatureError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || SignatureError::Malformed(text.to_string());
        let (head, result) = text.split_once("->").ok_or_else(malformed)?;
        let (name, rest) = head.trim().split_once('(').ok_or_else(malformed)?;
        let arguments = rest.strip_suffix(')').ok_or_else(malformed)?;
        let family = ShapeFamily::from_label(name.trim()).ok_or_else(malformed)?;
        let result = ResultKind::from_label(result.trim()).ok_or_else(malformed)?;

        let mut operands = [OperandKind::Generic; 2];
        let mut count = 0;
        let arguments = arguments.trim();
        let listed = if arguments.is_empty() { None } else { Some(arguments.split(',')) };
        for argument in listed.into_iter().flatten().map(str::trim) {
            let kind = OperandKind::from_label(argument).ok_or_else(malformed)?;
            let slot = operands.get_mut(count).ok_or_else(malformed)?;
            *slot = kind;
            count += 1;
        }
        Self::new(family, &operands[.. count], result)
    }
}

impl TryFrom<String> for ShapeSignature {
    type Error = SignatureError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<ShapeSignature> for String {
    fn from(signature: ShapeSignature) -> Self {
        signature.to_string()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Every operand tuple of the given arity over all operand kinds
pub(crate) fn operand_tuples(arity: usize) -> Vec<Vec<OperandKind>> {
    let mut tuples = vec![Vec::new()];
    for _ in 0 .. arity {
        tuples = tuples
            .into_iter()
            .flat_map(|prefix| {
                OperandKind::ALL.into_iter().map(move |kind| {
                    let mut tuple = prefix.clone();
                    tuple.push(kind);
                    tuple
                })
            })
            .collect();
    }
    tuples
}
