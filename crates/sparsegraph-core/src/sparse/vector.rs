//! Sparse vector with masked vector-matrix multiply.

use std::collections::BTreeMap;

use crate::error::GraphError;

use super::mask::Mask;
use super::matrix::SparseMatrix;
use super::scalar::{BinaryOp, Scalar, Semiring};

/// A sparse vector of length `size`. Absent entries carry no value.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T> {
    size: usize,
    entries: BTreeMap<usize, T>,
}

impl<T: Scalar> SparseVector<T> {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            entries: BTreeMap::new(),
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of stored entries.
    #[must_use]
    pub fn nvals(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.entries.get(&index).copied()
    }

    /// Store `value` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] if `index >= size`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), GraphError> {
        if index >= self.size {
            return Err(GraphError::DimensionMismatch {
                expected: (1, self.size),
                actual: (1, index + 1),
            });
        }
        self.entries.insert(index, value);
        Ok(())
    }

    pub(crate) fn insert_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.size);
        self.entries.insert(index, value);
    }

    /// Stored entries as `(index, value)`, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, T)> + '_ {
        self.entries.iter().map(|(&i, &v)| (i, v))
    }

    /// Row-vector product `w = self ⊗ matrix` under `semiring`, written only
    /// where `mask` (a single-row mask) allows.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when `self.size` differs from
    /// `matrix.nrows()` or the mask is not `1 × matrix.ncols()`.
    pub fn vxm(
        &self,
        matrix: &SparseMatrix<T>,
        semiring: Semiring,
        mask: Option<&Mask>,
    ) -> Result<Self, GraphError> {
        if self.size != matrix.nrows() {
            return Err(GraphError::DimensionMismatch {
                expected: (1, matrix.nrows()),
                actual: (1, self.size),
            });
        }
        if let Some(m) = mask {
            if m.shape() != (1, matrix.ncols()) {
                return Err(GraphError::DimensionMismatch {
                    expected: (1, matrix.ncols()),
                    actual: m.shape(),
                });
            }
        }

        let mut out = Self::new(matrix.ncols());
        for (k, u) in self.iter() {
            for (j, a) in matrix.row(k) {
                if mask.is_some_and(|m| !m.allows(0, j)) {
                    continue;
                }
                let product = T::apply(semiring.multiply, u, a);
                out.entries
                    .entry(j)
                    .and_modify(|acc| *acc = T::apply(semiring.add, *acc, product))
                    .or_insert(product);
            }
        }
        Ok(out)
    }

    /// Element-wise union with `op` applied where both store a value.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when sizes differ.
    pub fn eadd(&self, other: &Self, op: BinaryOp) -> Result<Self, GraphError> {
        if self.size != other.size {
            return Err(GraphError::DimensionMismatch {
                expected: (1, self.size),
                actual: (1, other.size),
            });
        }
        let mut out = self.clone();
        for (i, b) in other.iter() {
            out.entries
                .entry(i)
                .and_modify(|acc| *acc = T::apply(op, *acc, b))
                .or_insert(b);
        }
        Ok(out)
    }

    /// Overwrite every mask-allowed index with `value`, in place.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DimensionMismatch`] when the mask is not
    /// `1 × size`.
    pub fn assign_scalar(&mut self, value: T, mask: &Mask) -> Result<(), GraphError> {
        if mask.shape() != (1, self.size) {
            return Err(GraphError::DimensionMismatch {
                expected: (1, self.size),
                actual: mask.shape(),
            });
        }
        for i in mask.allowed_in_row(0) {
            self.entries.insert(i, value);
        }
        Ok(())
    }

    /// Fold every stored entry with `op`; `None` when empty.
    #[must_use]
    pub fn reduce(&self, op: BinaryOp) -> Option<T> {
        self.entries
            .values()
            .copied()
            .reduce(|a, b| T::apply(op, a, b))
    }
}
