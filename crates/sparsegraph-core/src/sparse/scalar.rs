//! Scalar domains, binary operators and semirings.
//!
//! A semiring here is plain data: a pair of [`BinaryOp`]s drawn from a closed
//! set. The multiply routines dispatch on that pair through
//! [`Scalar::apply`], so adding an algorithm never requires a new type.

use std::fmt;

/// Binary operators usable as semiring add/multiply or as `eadd` combiners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Logical or. Numeric domains return one/zero.
    Lor,
    /// Logical and. Numeric domains return one/zero.
    Land,
    Min,
    Plus,
    Times,
    /// Keep the left operand.
    First,
    /// Keep the right operand.
    Second,
}

/// An (add, multiply) pair used in place of `+`/`×` inside matrix products.
///
/// `add` must be associative and commutative; it is only ever applied to
/// stored values, so no explicit identity element is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Semiring {
    pub add: BinaryOp,
    pub multiply: BinaryOp,
}

impl Semiring {
    /// Boolean reachability: `(OR, AND)`.
    pub const LOR_LAND: Self = Self::new(BinaryOp::Lor, BinaryOp::Land);
    /// Tropical shortest paths: `(MIN, +)`.
    pub const MIN_PLUS: Self = Self::new(BinaryOp::Min, BinaryOp::Plus);
    /// Lowest-labelled predecessor: `(MIN, FIRST)`.
    pub const MIN_FIRST: Self = Self::new(BinaryOp::Min, BinaryOp::First);
    /// Conventional arithmetic: `(+, ×)`.
    pub const PLUS_TIMES: Self = Self::new(BinaryOp::Plus, BinaryOp::Times);

    #[must_use]
    pub const fn new(add: BinaryOp, multiply: BinaryOp) -> Self {
        Self { add, multiply }
    }
}

/// Element type of a sparse matrix or vector.
///
/// Implemented for `bool`, `i32` and `f64`.
pub trait Scalar: Copy + PartialEq + fmt::Debug + 'static {
    /// Additive zero of the domain, stored explicitly when a diagonal is
    /// zeroed. A stored zero is still a present entry.
    const ZERO: Self;
    const ONE: Self;

    /// Convert an edge weight into this domain.
    fn from_weight(weight: f64) -> Self;

    /// Convert a position index into this domain.
    fn from_index(index: usize) -> Self;

    /// Whether a stored value passes a value (non-structural) mask.
    fn is_truthy(self) -> bool;

    /// Evaluate `op(a, b)`.
    fn apply(op: BinaryOp, a: Self, b: Self) -> Self;
}

impl Scalar for bool {
    const ZERO: Self = false;
    const ONE: Self = true;

    fn from_weight(_weight: f64) -> Self {
        true
    }

    fn from_index(_index: usize) -> Self {
        true
    }

    fn is_truthy(self) -> bool {
        self
    }

    fn apply(op: BinaryOp, a: Self, b: Self) -> Self {
        match op {
            BinaryOp::Lor | BinaryOp::Plus => a || b,
            BinaryOp::Land | BinaryOp::Times | BinaryOp::Min => a && b,
            BinaryOp::First => a,
            BinaryOp::Second => b,
        }
    }
}

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[allow(clippy::cast_possible_truncation)]
    fn from_weight(weight: f64) -> Self {
        // Truncates toward zero and saturates at the i32 bounds.
        weight as Self
    }

    fn from_index(index: usize) -> Self {
        Self::try_from(index).unwrap_or(Self::MAX)
    }

    fn is_truthy(self) -> bool {
        self != 0
    }

    fn apply(op: BinaryOp, a: Self, b: Self) -> Self {
        match op {
            BinaryOp::Lor => Self::from(a != 0 || b != 0),
            BinaryOp::Land => Self::from(a != 0 && b != 0),
            BinaryOp::Min => a.min(b),
            BinaryOp::Plus => a.saturating_add(b),
            BinaryOp::Times => a.saturating_mul(b),
            BinaryOp::First => a,
            BinaryOp::Second => b,
        }
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    fn from_weight(weight: f64) -> Self {
        weight
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_index(index: usize) -> Self {
        index as Self
    }

    fn is_truthy(self) -> bool {
        self != 0.0
    }

    fn apply(op: BinaryOp, a: Self, b: Self) -> Self {
        let flag = |v: bool| if v { 1.0 } else { 0.0 };
        match op {
            BinaryOp::Lor => flag(a != 0.0 || b != 0.0),
            BinaryOp::Land => flag(a != 0.0 && b != 0.0),
            BinaryOp::Min => a.min(b),
            BinaryOp::Plus => a + b,
            BinaryOp::Times => a * b,
            BinaryOp::First => a,
            BinaryOp::Second => b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_ops() {
        assert!(bool::apply(BinaryOp::Lor, false, true));
        assert!(!bool::apply(BinaryOp::Land, false, true));
        assert!(!bool::apply(BinaryOp::First, false, true));
        assert!(bool::apply(BinaryOp::Second, false, true));
    }

    #[test]
    fn int_ops_saturate() {
        assert_eq!(i32::apply(BinaryOp::Plus, i32::MAX, 1), i32::MAX);
        assert_eq!(i32::apply(BinaryOp::Min, 4, -2), -2);
        assert_eq!(i32::apply(BinaryOp::Lor, 0, 5), 1);
        assert_eq!(i32::from_weight(2.9), 2);
        assert_eq!(i32::from_weight(-2.9), -2);
    }

    #[test]
    fn float_min_plus() {
        assert!((f64::apply(BinaryOp::Plus, 0.5, 0.25) - 0.75).abs() < f64::EPSILON);
        assert_eq!(f64::apply(BinaryOp::Min, f64::INFINITY, 3.0), 3.0);
    }

    #[test]
    fn zero_is_not_truthy() {
        assert!(!0_i32.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(!false.is_truthy());
        assert!(1_i32.is_truthy());
    }
}
