//! Write masks and their descriptors.
//!
//! A [`Mask`] restricts which output positions an operation may write.
//! It is built from any sparse matrix or vector under a [`Descriptor`]:
//!
//! | descriptor | position `(i, j)` is writable when …                      |
//! |------------|-----------------------------------------------------------|
//! | `DEFAULT`  | the source stores a truthy value at `(i, j)`              |
//! | `S`        | the source stores any value at `(i, j)`                   |
//! | `C`        | the source does **not** store a truthy value at `(i, j)`  |
//! | `SC`       | the source stores nothing at `(i, j)`                     |
//!
//! Vectors are treated as a single row.

use fixedbitset::FixedBitSet;

use super::matrix::SparseMatrix;
use super::scalar::Scalar;
use super::vector::SparseVector;

/// How a mask source is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Descriptor {
    /// Use the stored pattern only, ignoring values.
    pub structural: bool,
    /// Invert the set of writable positions.
    pub complement: bool,
}

impl Descriptor {
    pub const DEFAULT: Self = Self {
        structural: false,
        complement: false,
    };
    pub const S: Self = Self {
        structural: true,
        complement: false,
    };
    pub const C: Self = Self {
        structural: false,
        complement: true,
    };
    pub const SC: Self = Self {
        structural: true,
        complement: true,
    };
}

/// A materialized write mask.
#[derive(Debug, Clone)]
pub struct Mask {
    rows: Vec<FixedBitSet>,
    ncols: usize,
    complement: bool,
}

impl Mask {
    /// Build a mask from the pattern (or truthy values) of `source`.
    #[must_use]
    pub fn from_matrix<T: Scalar>(source: &SparseMatrix<T>, desc: Descriptor) -> Self {
        let ncols = source.ncols();
        let rows = (0..source.nrows())
            .map(|i| pattern_bits(source.row(i), ncols, desc.structural))
            .collect();
        Self {
            rows,
            ncols,
            complement: desc.complement,
        }
    }

    /// Build a single-row mask from a vector.
    #[must_use]
    pub fn from_vector<T: Scalar>(source: &SparseVector<T>, desc: Descriptor) -> Self {
        let ncols = source.size();
        Self {
            rows: vec![pattern_bits(source.iter(), ncols, desc.structural)],
            ncols,
            complement: desc.complement,
        }
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.ncols)
    }

    /// Whether `(row, col)` may be written. Out-of-range positions never are.
    #[must_use]
    pub fn allows(&self, row: usize, col: usize) -> bool {
        if col >= self.ncols {
            return false;
        }
        self.rows
            .get(row)
            .is_some_and(|bits| bits.contains(col) != self.complement)
    }

    /// Writable columns of `row`, ascending.
    pub fn allowed_in_row(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.ncols).filter(move |&col| self.allows(row, col))
    }
}

fn pattern_bits<T: Scalar>(
    entries: impl Iterator<Item = (usize, T)>,
    ncols: usize,
    structural: bool,
) -> FixedBitSet {
    let mut bits = FixedBitSet::with_capacity(ncols);
    for (col, value) in entries {
        if structural || value.is_truthy() {
            bits.insert(col);
        }
    }
    bits
}
