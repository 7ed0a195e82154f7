//! All-pairs distances by pivot-at-a-time `(MIN, +)` relaxation.
//!
//! For pivot `k` the column `D[:, k]` (n × 1) times the row `D[k, :]`
//! (1 × n) gives every route through `k`; merging that product into `D`
//! with element-wise `MIN` completes the pivot. Each pivot reads the result
//! of the previous one, so pivots run strictly in order.

use std::fmt;
use std::hash::Hash;

use sparsegraph_core::config::ShortestPathConfig;
use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::Graph;
use sparsegraph_core::sparse::{BinaryOp, Semiring, SparseMatrix};
use tracing::{debug, instrument, warn};

use super::decode_row;

/// Distances between every pair of nodes, as `(row, distances)` for each
/// node order.
///
/// # Errors
///
/// Returns [`GraphError::NegativeWeightCycle`] if the graph contains one.
pub fn floyd_warshall<V>(graph: &Graph<V>) -> Result<Vec<(usize, Vec<f64>)>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    floyd_warshall_with_config(graph, &ShortestPathConfig::default())
}

/// [`floyd_warshall`] with an explicit cycle-detection tolerance.
///
/// # Errors
///
/// Same as [`floyd_warshall`].
#[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn floyd_warshall_with_config<V>(
    graph: &Graph<V>,
    config: &ShortestPathConfig,
) -> Result<Vec<(usize, Vec<f64>)>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.node_count();
    let distances = relax_all_pivots(graph.adjacency_matrix::<f64>(true))?;
    debug!(pivots = n, entries = distances.nvals(), "all pivots relaxed");

    let check = relax_all_pivots(distances.clone())?;
    if check.improves_on(&distances, config.cycle_tolerance) {
        warn!(nodes = n, "negative weight cycle found by extra pass");
        return Err(GraphError::NegativeWeightCycle);
    }

    Ok((0..n).map(|row| (row, decode_row(&distances, row))).collect())
}

fn relax_all_pivots(mut distances: SparseMatrix<f64>) -> Result<SparseMatrix<f64>, GraphError> {
    for k in 0..distances.nrows() {
        let through = distances
            .extract_col(k)?
            .mxm(&distances.extract_row(k)?, Semiring::MIN_PLUS, None)?;
        distances = distances.eadd(&through, BinaryOp::Min, None)?;
    }
    Ok(distances)
}
