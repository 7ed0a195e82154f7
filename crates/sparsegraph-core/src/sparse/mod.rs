//! Sparse matrix/vector substrate.
//!
//! # Overview
//!
//! Every matrix-based algorithm in this workspace is assembled from four
//! masked primitives:
//!
//! | primitive        | matrix                          | vector                          |
//! |------------------|---------------------------------|---------------------------------|
//! | multiply         | [`SparseMatrix::mxm`]           | [`SparseVector::vxm`]           |
//! | combine          | [`SparseMatrix::eadd`]          | [`SparseVector::eadd`]          |
//! | extraction       | `extract_row` / `extract_col`   | n/a                             |
//! | scalar overwrite | [`SparseMatrix::assign_scalar`] | [`SparseVector::assign_scalar`] |
//!
//! Multiplication is parameterized by a [`Semiring`] value and restricted
//! by an optional [`Mask`] whose interpretation comes from a
//! [`Descriptor`]. Algorithm correctness depends on choosing the right
//! descriptor at each call site, so masks are always built explicitly.
//!
//! Absent entries are "no value". A stored zero is a real entry and passes
//! structural masks.

pub mod mask;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use mask::{Descriptor, Mask};
pub use matrix::SparseMatrix;
pub use scalar::{BinaryOp, Scalar, Semiring};
pub use vector::SparseVector;
