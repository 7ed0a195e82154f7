//! Bellman-Ford as repeated `(MIN, +)` frontier relaxation.
//!
//! Each start owns one row of a `k × n` distance matrix seeded with `0` at
//! the start's column. One round is `D = D ⊗ A`; since `A` stores zero on
//! the diagonal, each round keeps every distance already found. After `n`
//! rounds every shortest simple path has been seen, so any further change
//! means a reachable negative cycle.

use std::fmt;
use std::hash::Hash;

use sparsegraph_core::config::ShortestPathConfig;
use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::Graph;
use sparsegraph_core::sparse::{Semiring, SparseMatrix};
use tracing::{debug, instrument, warn};

use super::decode_row;

/// Single-source distances from `start`, indexed by node order.
///
/// Returns an empty vector for an empty graph.
///
/// # Errors
///
/// - [`GraphError::UnknownNode`] if `start` is out of range.
/// - [`GraphError::NegativeWeightCycle`] if a negative cycle is reachable
///   from `start`.
pub fn bellman_ford<V>(graph: &Graph<V>, start: usize) -> Result<Vec<f64>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    Ok(bellman_ford_multi_source(graph, &[start])?
        .into_iter()
        .next()
        .map(|(_, distances)| distances)
        .unwrap_or_default())
}

/// Distances from each start, as `(start, distances)` in input order.
///
/// # Errors
///
/// Same as [`bellman_ford`], for any of the starts.
pub fn bellman_ford_multi_source<V>(
    graph: &Graph<V>,
    starts: &[usize],
) -> Result<Vec<(usize, Vec<f64>)>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    bellman_ford_multi_source_with_config(graph, starts, &ShortestPathConfig::default())
}

/// [`bellman_ford_multi_source`] with an explicit cycle-detection tolerance.
///
/// # Errors
///
/// Same as [`bellman_ford_multi_source`].
#[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn bellman_ford_multi_source_with_config<V>(
    graph: &Graph<V>,
    starts: &[usize],
    config: &ShortestPathConfig,
) -> Result<Vec<(usize, Vec<f64>)>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.node_count();
    if n == 0 || starts.is_empty() {
        return Ok(Vec::new());
    }

    let mut frontier = SparseMatrix::<f64>::new(starts.len(), n);
    for (row, &s) in starts.iter().enumerate() {
        frontier.set(row, graph.check_order(s)?, 0.0)?;
    }
    let adjacency = graph.adjacency_matrix::<f64>(true);

    for _ in 0..n {
        frontier = frontier.mxm(&adjacency, Semiring::MIN_PLUS, None)?;
    }
    debug!(rounds = n, reached = frontier.nvals(), "relaxation bound reached");

    let check = frontier.mxm(&adjacency, Semiring::MIN_PLUS, None)?;
    if check.improves_on(&frontier, config.cycle_tolerance) {
        warn!(sources = starts.len(), "negative weight cycle reachable from a source");
        return Err(GraphError::NegativeWeightCycle);
    }

    Ok(starts
        .iter()
        .enumerate()
        .map(|(row, &s)| (s, decode_row(&frontier, row)))
        .collect())
}
