//! Level-synchronous breadth-first search over the boolean adjacency matrix.
//!
//! # Algorithm
//!
//! The frontier is a sparse vector. Each round multiplies it by the
//! adjacency matrix under `(OR, AND)`, masked by the *structural complement*
//! of the level vector so that only never-visited nodes can appear in the
//! next frontier. Every surviving position is assigned the round number.
//! The search stops as soon as a round produces an empty frontier, so it
//! runs at most `n` rounds.
//!
//! # Sentinels
//!
//! | result | meaning                |
//! |--------|------------------------|
//! | `-1`   | unreachable from start |
//! | `0`    | the start node         |
//! | `k>0`  | reached in `k` hops    |
//!
//! The multi-source parent variant uses `-2` for unreached, `-1` for the
//! source itself and otherwise the order of the parent node.

use std::fmt;
use std::hash::Hash;

use sparsegraph_core::config::BfsConfig;
use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::Graph;
use sparsegraph_core::sparse::{BinaryOp, Descriptor, Mask, Semiring, SparseMatrix, SparseVector};
use tracing::{debug, instrument};

/// Level value for nodes the search never reaches.
pub const UNREACHABLE: i32 = -1;
/// Parent value for nodes a parent search never reaches.
pub const NO_PARENT: i32 = -2;
/// Parent value stored for each search's own source.
pub const SOURCE_PARENT: i32 = -1;

/// Hop distance from `start` to every node, indexed by node order.
///
/// Returns an empty vector for an empty graph regardless of `start`.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `start` is not a node order of a
/// non-empty graph.
pub fn bfs<V>(graph: &Graph<V>, start: usize) -> Result<Vec<i32>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    bfs_with_config(graph, start, &BfsConfig::default())
}

/// [`bfs`] with the start node given by identity.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `start` is not in the graph.
pub fn bfs_from<V>(graph: &Graph<V>, start: &V) -> Result<Vec<i32>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    bfs(graph, graph.order(start)?)
}

/// [`bfs`] honouring [`BfsConfig::max_depth`]: nodes further than the limit
/// are reported as [`UNREACHABLE`].
///
/// # Errors
///
/// Same as [`bfs`].
#[instrument(skip(graph, config), fields(nodes = graph.node_count()))]
pub fn bfs_with_config<V>(
    graph: &Graph<V>,
    start: usize,
    config: &BfsConfig,
) -> Result<Vec<i32>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }
    let start = graph.check_order(start)?;

    let adjacency = graph.adjacency_matrix::<bool>(false);
    let mut levels = SparseVector::<i32>::new(n);
    levels.set(start, 0)?;
    let mut frontier = SparseVector::<bool>::new(n);
    frontier.set(start, true)?;

    let max_depth = config.max_depth.map_or(i32::MAX, |d| i32::try_from(d).unwrap_or(i32::MAX));
    let mut step = 0;
    while step < max_depth {
        step += 1;
        let unvisited = Mask::from_vector(&levels, Descriptor::SC);
        frontier = frontier.vxm(&adjacency, Semiring::LOR_LAND, Some(&unvisited))?;
        if frontier.is_empty() {
            break;
        }
        levels.assign_scalar(step, &Mask::from_vector(&frontier, Descriptor::S))?;
    }
    debug!(rounds = step, reached = levels.nvals(), "bfs finished");

    Ok((0..n)
        .map(|i| levels.get(i).unwrap_or(UNREACHABLE))
        .collect())
}

/// Simultaneous BFS from several sources recording each node's parent.
///
/// Uses the `(MIN, FIRST)` semiring over a frontier whose stored values are
/// node orders, so a node reached from several frontier nodes in the same
/// round records the lowest-ordered one. Results are returned in the order
/// the sources were given.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if any source is not a node order.
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn bfs_multi_source_parents<V>(
    graph: &Graph<V>,
    starts: &[usize],
) -> Result<Vec<(usize, Vec<i32>)>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.node_count();
    if n == 0 || starts.is_empty() {
        return Ok(Vec::new());
    }
    for &s in starts {
        graph.check_order(s)?;
    }

    let adjacency = graph.pattern_matrix();
    let k = starts.len();
    let mut parents = SparseMatrix::<i32>::new(k, n);
    let mut frontier = SparseMatrix::<i32>::new(k, n);
    for (row, &s) in starts.iter().enumerate() {
        parents.set(row, s, SOURCE_PARENT)?;
        frontier.set(row, s, 0)?;
    }
    // Frontier values carry the order of the node they sit on.
    frontier = frontier.apply_col_index();

    let mut rounds = 0_usize;
    loop {
        let unvisited = Mask::from_matrix(&parents, Descriptor::SC);
        let reached = frontier.mxm(&adjacency, Semiring::MIN_FIRST, Some(&unvisited))?;
        if reached.nvals() == 0 {
            break;
        }
        rounds += 1;
        parents = parents.eadd(&reached, BinaryOp::First, None)?;
        frontier = reached.apply_col_index();
    }
    debug!(sources = k, rounds, "multi-source parent bfs finished");

    Ok(starts
        .iter()
        .enumerate()
        .map(|(row, &s)| {
            let decoded = (0..n)
                .map(|col| parents.get(row, col).unwrap_or(NO_PARENT))
                .collect();
            (s, decoded)
        })
        .collect())
}
