//! Sparse matrix with masked, semiring-parameterized operations.
//!
//! Storage is one ordered map per row (`column → value`). Iteration order is
//! therefore always ascending by row and then column, which keeps every
//! algorithm built on top deterministic.

use std::collections::BTreeMap;

use crate::error::GraphError;

use super::mask::Mask;
use super::scalar::{BinaryOp, Scalar, Semiring};
use super::vector::SparseVector;

/// An `nrows × ncols` sparse matrix over a [`Scalar`] domain.
///
/// Absent entries carry no value; a stored [`Scalar::ZERO`] is present.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    rows: Vec<BTreeMap<usize, T>>,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Create an empty matrix of the given shape.
    #[must_use]
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: vec![BTreeMap::new(); nrows],
        }
    }

    /// Build a matrix from `(row, col, value)` triplets. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] if a triplet lies outside the
    /// requested shape.
    pub fn from_triplets(
        nrows: usize,
        ncols: usize,
        triplets: impl IntoIterator<Item = (usize, usize, T)>,
    ) -> Result<Self, GraphError> {
        let mut m = Self::new(nrows, ncols);
        for (i, j, v) in triplets {
            m.set(i, j, v)?;
        }
        Ok(m)
    }

    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored entries.
    #[must_use]
    pub fn nvals(&self) -> usize {
        self.rows.iter().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(&col)).copied()
    }

    /// Store `value` at `(row, col)`, replacing any previous entry.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] if the position is out of
    /// range.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GraphError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(GraphError::DimensionMismatch {
                expected: self.shape(),
                actual: (row + 1, col + 1),
            });
        }
        self.rows[row].insert(col, value);
        Ok(())
    }

    pub(crate) fn insert_unchecked(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.nrows && col < self.ncols);
        self.rows[row].insert(col, value);
    }

    /// Drop the entry at `(row, col)`, returning it if present.
    pub fn remove(&mut self, row: usize, col: usize) -> Option<T> {
        self.rows.get_mut(row).and_then(|r| r.remove(&col))
    }

    /// Stored entries of one row as `(col, value)`, ascending by column.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().map(|(&c, &v)| (c, v)))
    }

    /// All stored entries as `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(i, r)| r.iter().map(move |(&c, &v)| (i, c, v)))
    }

    // -----------------------------------------------------------------------
    // Masked multiply
    // -----------------------------------------------------------------------

    /// Generalized product `C = self ⊗ other` under `semiring`.
    ///
    /// `C[i, j] = add_k multiply(self[i, k], other[k, j])` over every `k`
    /// where both operands store a value. With a mask, only positions the
    /// mask allows are computed; the result never holds anything else.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when the inner dimensions
    /// differ or the mask shape is not `(self.nrows, other.ncols)`.
    pub fn mxm(
        &self,
        other: &Self,
        semiring: Semiring,
        mask: Option<&Mask>,
    ) -> Result<Self, GraphError> {
        if self.ncols != other.nrows {
            return Err(GraphError::DimensionMismatch {
                expected: (self.ncols, other.ncols),
                actual: other.shape(),
            });
        }
        check_mask(mask, (self.nrows, other.ncols))?;

        let mut out = Self::new(self.nrows, other.ncols);
        for (i, out_row) in out.rows.iter_mut().enumerate() {
            for (&k, &a) in &self.rows[i] {
                for (&j, &b) in &other.rows[k] {
                    if mask.is_some_and(|m| !m.allows(i, j)) {
                        continue;
                    }
                    let product = T::apply(semiring.multiply, a, b);
                    out_row
                        .entry(j)
                        .and_modify(|acc| *acc = T::apply(semiring.add, *acc, product))
                        .or_insert(product);
                }
            }
        }
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Element-wise combine
    // -----------------------------------------------------------------------

    /// Element-wise union: positions present in either operand survive,
    /// `op` combines positions present in both.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when shapes differ.
    pub fn eadd(&self, other: &Self, op: BinaryOp, mask: Option<&Mask>) -> Result<Self, GraphError> {
        if self.shape() != other.shape() {
            return Err(GraphError::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        check_mask(mask, self.shape())?;

        let mut out = Self::new(self.nrows, self.ncols);
        for (i, out_row) in out.rows.iter_mut().enumerate() {
            let allowed = |j: usize| mask.is_none_or(|m| m.allows(i, j));
            for (&j, &a) in &self.rows[i] {
                if allowed(j) {
                    out_row.insert(j, a);
                }
            }
            for (&j, &b) in &other.rows[i] {
                if allowed(j) {
                    out_row
                        .entry(j)
                        .and_modify(|acc| *acc = T::apply(op, *acc, b))
                        .or_insert(b);
                }
            }
        }
        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Sub-block extraction
    // -----------------------------------------------------------------------

    /// Row `row` as a `1 × ncols` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when `row` is out of range.
    pub fn extract_row(&self, row: usize) -> Result<Self, GraphError> {
        let Some(source) = self.rows.get(row) else {
            return Err(GraphError::DimensionMismatch {
                expected: self.shape(),
                actual: (row + 1, self.ncols),
            });
        };
        Ok(Self {
            nrows: 1,
            ncols: self.ncols,
            rows: vec![source.clone()],
        })
    }

    /// Column `col` as an `nrows × 1` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when `col` is out of range.
    pub fn extract_col(&self, col: usize) -> Result<Self, GraphError> {
        if col >= self.ncols {
            return Err(GraphError::DimensionMismatch {
                expected: self.shape(),
                actual: (self.nrows, col + 1),
            });
        }
        let rows = self
            .rows
            .iter()
            .map(|r| r.get(&col).map(|&v| (0, v)).into_iter().collect())
            .collect();
        Ok(Self {
            nrows: self.nrows,
            ncols: 1,
            rows,
        })
    }

    // -----------------------------------------------------------------------
    // Masked scalar assignment
    // -----------------------------------------------------------------------

    /// Overwrite every mask-allowed position with `value`, in place.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when the mask shape differs.
    pub fn assign_scalar(&mut self, value: T, mask: &Mask) -> Result<(), GraphError> {
        check_mask(Some(mask), self.shape())?;
        for (i, row) in self.rows.iter_mut().enumerate() {
            for j in mask.allowed_in_row(i) {
                row.insert(j, value);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Structural helpers
    // -----------------------------------------------------------------------

    /// Strictly lower-triangular part (`col < row`).
    #[must_use]
    pub fn tril(&self) -> Self {
        self.select(|i, j| j < i)
    }

    /// Strictly upper-triangular part (`col > row`).
    #[must_use]
    pub fn triu(&self) -> Self {
        self.select(|i, j| j > i)
    }

    fn select(&self, keep: impl Fn(usize, usize) -> bool) -> Self {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.iter()
                    .filter(|&(&j, _)| keep(i, j))
                    .map(|(&j, &v)| (j, v))
                    .collect()
            })
            .collect();
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            rows,
        }
    }

    /// Replace every stored value with its column index.
    #[must_use]
    pub fn apply_col_index(&self) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|r| r.keys().map(|&j| (j, T::from_index(j))).collect())
            .collect();
        Self {
            nrows: self.nrows,
            ncols: self.ncols,
            rows,
        }
    }

    /// Fold each non-empty row with `op`. Empty rows stay absent.
    #[must_use]
    pub fn reduce_rows(&self, op: BinaryOp) -> SparseVector<T> {
        let mut out = SparseVector::new(self.nrows);
        for (i, r) in self.rows.iter().enumerate() {
            if let Some(v) = r.values().copied().reduce(|a, b| T::apply(op, a, b)) {
                out.insert_unchecked(i, v);
            }
        }
        out
    }

    /// Fold every stored entry with `op`; `None` when the matrix is empty.
    #[must_use]
    pub fn reduce(&self, op: BinaryOp) -> Option<T> {
        self.iter().map(|(_, _, v)| v).reduce(|a, b| T::apply(op, a, b))
    }
}

impl SparseMatrix<f64> {
    /// Whether `self` shortens any distance recorded in `previous`.
    ///
    /// A position counts when it is present here but absent in `previous`,
    /// or when its value is lower by more than `tolerance`. Shapes are
    /// assumed equal; positions beyond `previous` count as new.
    #[must_use]
    pub fn improves_on(&self, previous: &Self, tolerance: f64) -> bool {
        self.iter().any(|(i, j, v)| {
            previous
                .get(i, j)
                .is_none_or(|old| v < old - tolerance)
        })
    }
}

fn check_mask(mask: Option<&Mask>, expected: (usize, usize)) -> Result<(), GraphError> {
    match mask {
        Some(m) if m.shape() != expected => Err(GraphError::DimensionMismatch {
            expected,
            actual: m.shape(),
        }),
        _ => Ok(()),
    }
}
