//! Triangle counting on undirected (symmetric) graphs.
//!
//! All three variants work on the structural `i32` pattern of the
//! adjacency, so weights never affect a count, and they all multiply under
//! `(+, ×)` with a structural mask so only closing edges are kept.
//!
//! | variant  | product              | mask          | scale  |
//! |----------|----------------------|---------------|--------|
//! | per-node | `A ⊗ A`              | `A`           | `/ 2`  |
//! | Cohen    | `tril(A) ⊗ triu(A)`  | `A`           | `/ 2`  |
//! | Sandia   | `L ⊗ L`, `L=tril(A)` | `L`           | `× 1`  |
//!
//! For a symmetric input the per-node counts sum to three times the total.
//! Asymmetric input is counted as given and the variants may then disagree.

use std::fmt;
use std::hash::Hash;

use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::Graph;
use sparsegraph_core::sparse::{BinaryOp, Descriptor, Mask, Semiring, SparseMatrix};
use tracing::{debug, instrument};

/// Number of triangles each node participates in, indexed by node order.
///
/// # Errors
///
/// Propagates substrate [`GraphError::DimensionMismatch`], which a
/// well-formed graph never produces.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn triangles_count_for_each_vertex<V>(graph: &Graph<V>) -> Result<Vec<i32>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let a = graph.pattern_matrix();
    let closing = a.mxm(&a, Semiring::PLUS_TIMES, Some(&structure_of(&a)))?;
    let per_row = closing.reduce_rows(BinaryOp::Plus);
    debug!(rows = per_row.nvals(), "per-node triangle rows reduced");
    Ok((0..graph.node_count())
        .map(|i| per_row.get(i).unwrap_or(0) / 2)
        .collect())
}

/// Total triangle count using the Cohen `tril ⊗ triu` formulation.
///
/// # Errors
///
/// As [`triangles_count_for_each_vertex`].
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn triangles_count_cohen<V>(graph: &Graph<V>) -> Result<i32, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let a = graph.pattern_matrix();
    let closing = a
        .tril()
        .mxm(&a.triu(), Semiring::PLUS_TIMES, Some(&structure_of(&a)))?;
    Ok(closing.reduce(BinaryOp::Plus).unwrap_or(0) / 2)
}

/// Total triangle count using the Sandia `L ⊗ L` formulation.
///
/// # Errors
///
/// As [`triangles_count_for_each_vertex`].
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn triangles_count_sandia<V>(graph: &Graph<V>) -> Result<i32, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let lower = graph.pattern_matrix().tril();
    let closing = lower.mxm(&lower, Semiring::PLUS_TIMES, Some(&structure_of(&lower)))?;
    Ok(closing.reduce(BinaryOp::Plus).unwrap_or(0))
}

fn structure_of(m: &SparseMatrix<i32>) -> Mask {
    Mask::from_matrix(m, Descriptor::S)
}
