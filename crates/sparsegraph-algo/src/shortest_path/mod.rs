//! Shortest-path engines.
//!
//! # Overview
//!
//! | engine                      | sources | weights       | negative cycles |
//! |-----------------------------|---------|---------------|-----------------|
//! | [`bellman_ford_multi_source`] | many  | any finite    | detected        |
//! | [`floyd_warshall`]          | all     | any finite    | detected        |
//! | [`dijkstra`]                | one     | non-negative  | n/a             |
//!
//! The matrix engines run over the `f64` adjacency with an explicit zero on
//! every diagonal slot, which is the identity of `(MIN, +)`. A consequence
//! is that self-loops never contribute a path, negative or otherwise.
//!
//! All engines report unreachable destinations as [`f64::INFINITY`].
//!
//! # Negative-cycle detection
//!
//! After the relaxation bound is reached one more pass is run. If it
//! shortens any distance by more than
//! [`ShortestPathConfig::cycle_tolerance`](sparsegraph_core::config::ShortestPathConfig)
//! the call fails with [`GraphError::NegativeWeightCycle`].
//!
//! [`GraphError::NegativeWeightCycle`]: sparsegraph_core::error::GraphError::NegativeWeightCycle

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;

pub use bellman_ford::{
    bellman_ford, bellman_ford_multi_source, bellman_ford_multi_source_with_config,
};
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with_config};

use sparsegraph_core::sparse::SparseMatrix;

/// Decode one row of a distance matrix; absent entries become infinity.
pub(crate) fn decode_row(distances: &SparseMatrix<f64>, row: usize) -> Vec<f64> {
    let mut out = vec![f64::INFINITY; distances.ncols()];
    for (col, d) in distances.row(row) {
        out[col] = d;
    }
    out
}
