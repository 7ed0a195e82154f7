//! Incremental single-source shortest paths.
//!
//! # Overview
//!
//! [`DynamicDijkstra`] owns a graph and keeps a believed distance `dist[v]`
//! for every node. Edge edits only mark the edge target as *pending*; the
//! distances are repaired the next time they are read, so a burst of edits
//! costs one repair.
//!
//! # Repair
//!
//! The repair compares `dist[v]` with the one-step lookahead
//!
//! ```text
//! rhs(start) = 0
//! rhs(v)     = min over edges (u, v) of dist[u] + w(u, v)
//! ```
//!
//! and works through inconsistent nodes in order of `min(rhs, dist)`:
//!
//! - `rhs < dist`: the node got closer. Commit `dist = rhs` and re-check
//!   its successors.
//! - `rhs > dist`: the path the node relied on is gone. Reset `dist` to
//!   infinity, re-check its successors and re-queue the node itself if some
//!   other route still reaches it.
//! - `rhs == dist`: nothing to do, dropped.
//!
//! Each node has at most one live queue entry. Re-queuing supersedes the
//! previous entry and a node that becomes consistent leaves the queue, so
//! superseded entries are skipped when popped. When the queue drains
//! `dist[v] == rhs(v)` holds for every node.
//!
//! Edge weights must be positive and finite. With a zero-weight cycle an
//! invalidated distance could keep supporting itself through the cycle.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::Hash;

use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::{Edge, Graph};
use tracing::{debug, instrument, trace};

use crate::shortest_path::dijkstra::{MinQueue, QueueEntry, dijkstra};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Single-source distances kept up to date across edge edits.
#[derive(Debug, Clone)]
pub struct DynamicDijkstra<V> {
    graph: Graph<V>,
    start: usize,
    dist: Vec<f64>,
    pending: BTreeSet<usize>,
    queue: MinQueue,
    /// Sequence number of each node's live queue entry.
    live: Vec<Option<u64>>,
}

impl<V> DynamicDijkstra<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Take ownership of `graph` and seed distances from `start` with a
    /// one-shot Dijkstra.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if `start` is out of range, including
    ///   any start on an empty graph.
    /// - [`GraphError::InvalidEdgeWeight`] if an edge weight is not positive
    ///   and finite.
    #[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    pub fn new(graph: Graph<V>, start: usize) -> Result<Self, GraphError> {
        let start = graph.check_order(start)?;
        graph.edges().try_for_each(check_positive)?;
        let dist = dijkstra(&graph, start)?;
        let live = vec![None; dist.len()];
        Ok(Self {
            graph,
            start,
            dist,
            pending: BTreeSet::new(),
            queue: MinQueue::default(),
            live,
        })
    }

    /// [`DynamicDijkstra::new`] with the start given by identity.
    ///
    /// # Errors
    ///
    /// As [`DynamicDijkstra::new`].
    pub fn from_node(graph: Graph<V>, start: &V) -> Result<Self, GraphError> {
        let order = graph.order(start)?;
        Self::new(graph, order)
    }

    #[must_use]
    pub const fn graph(&self) -> &Graph<V> {
        &self.graph
    }

    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Nodes touched by edits since the last repair.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Insert `edge` (replacing an existing edge with the same endpoints)
    /// and mark its target for repair.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if an endpoint is out of range.
    /// - [`GraphError::InvalidEdgeWeight`] if the weight is not positive and
    ///   finite.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        check_positive(edge)?;
        self.graph.insert_edge(edge)?;
        self.pending.insert(edge.target);
        trace!(source = edge.source, target = edge.target, "edge added");
        Ok(())
    }

    /// Remove the edge with `edge`'s endpoints and mark its target for
    /// repair. Returns the removed edge, or `None` if it was not present.
    pub fn remove_edge(&mut self, edge: &Edge) -> Option<Edge> {
        let removed = self.graph.remove_edge(edge)?;
        self.pending.insert(removed.target);
        trace!(source = removed.source, target = removed.target, "edge removed");
        Some(removed)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Repaired distances from the start, indexed by node order.
    pub fn dists(&mut self) -> Vec<f64> {
        self.repair();
        self.dist.clone()
    }

    /// Repaired distance to one node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn distance(&mut self, node: &V) -> Result<f64, GraphError> {
        let order = self.graph.order(node)?;
        self.repair();
        Ok(self.dist[order])
    }

    // -----------------------------------------------------------------------
    // Repair
    // -----------------------------------------------------------------------

    fn rhs(&self, node: usize) -> f64 {
        if node == self.start {
            return 0.0;
        }
        self.graph
            .predecessors(node)
            .map(|e| self.dist[e.source] + e.weight)
            .fold(f64::INFINITY, f64::min)
    }

    #[allow(clippy::float_cmp)]
    fn update_vertex(&mut self, node: usize) {
        let rhs = self.rhs(node);
        let dist = self.dist[node];
        let entry = if rhs == dist {
            None
        } else {
            Some(self.queue.push(rhs.min(dist), node))
        };
        self.live[node] = entry;
    }

    fn update_successors(&mut self, node: usize) {
        let targets: Vec<usize> = self.graph.successors(node).map(|e| e.target).collect();
        for t in targets {
            self.update_vertex(t);
        }
    }

    fn repair(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        for node in std::mem::take(&mut self.pending) {
            self.update_vertex(node);
        }
        debug!(queued = self.queue.len(), "repairing distances");

        let mut pops = 0_usize;
        while let Some(QueueEntry { key, seq, node }) = self.queue.pop() {
            if self.live[node] != Some(seq) {
                continue;
            }
            self.live[node] = None;
            pops += 1;
            let rhs = self.rhs(node);
            let dist = self.dist[node];
            if rhs < dist {
                trace!(node, key, from = dist, to = rhs, "distance lowered");
                self.dist[node] = rhs;
                self.update_successors(node);
            } else if rhs > dist {
                trace!(node, key, from = dist, "distance invalidated");
                self.dist[node] = f64::INFINITY;
                self.update_vertex(node);
                self.update_successors(node);
            }
        }
        debug!(pops, "repair finished");
    }
}

fn check_positive(edge: Edge) -> Result<(), GraphError> {
    if edge.weight.is_finite() && edge.weight > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidEdgeWeight {
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    fn chain(n: u32) -> Graph<u32> {
        Graph::from_lists(0..n, (1..n).map(|i| (i - 1, i))).expect("graph")
    }

    #[test]
    fn seeded_from_dijkstra() {
        let mut dd = DynamicDijkstra::new(chain(3), 0).expect("maintainer");
        assert_eq!(dd.start(), 0);
        assert_eq!(dd.pending(), 0);
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn remove_then_restore_chain_link() {
        let mut dd = DynamicDijkstra::new(chain(3), 0).expect("maintainer");
        assert!(dd.remove_edge(&Edge::unit(0, 1)).is_some());
        assert_eq!(dd.pending(), 1);
        assert_eq!(dd.dists(), vec![0.0, INF, INF]);
        dd.add_edge(Edge::unit(0, 1)).expect("add");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0]);
        assert_eq!(dd.pending(), 0);
    }

    #[test]
    fn shortcut_then_cut() {
        let mut dd = DynamicDijkstra::new(chain(4), 0).expect("maintainer");
        dd.remove_edge(&Edge::unit(0, 1));
        assert_eq!(dd.dists(), vec![0.0, INF, INF, INF]);
        dd.add_edge(Edge::unit(0, 1)).expect("add");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 3.0]);
        dd.add_edge(Edge::unit(0, 3)).expect("shortcut");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 1.0]);
        dd.remove_edge(&Edge::unit(0, 1));
        assert_eq!(dd.dists(), vec![0.0, INF, INF, 1.0]);
    }

    #[test]
    fn cycle_edits() {
        let g = Graph::from_lists(0..4_u32, [(0, 1), (1, 2), (2, 3), (3, 0)]).expect("graph");
        let mut dd = DynamicDijkstra::new(g, 0).expect("maintainer");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 3.0]);
        dd.remove_edge(&Edge::unit(0, 1));
        assert_eq!(dd.dists(), vec![0.0, INF, INF, INF]);
        dd.add_edge(Edge::unit(0, 1)).expect("add");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 3.0]);
        dd.add_edge(Edge::unit(0, 3)).expect("shortcut");
        assert_eq!(dd.dists(), vec![0.0, 1.0, 2.0, 1.0]);
        dd.remove_edge(&Edge::unit(0, 1));
        assert_eq!(dd.dists(), vec![0.0, INF, INF, 1.0]);
        dd.add_edge(Edge::unit(3, 1)).expect("back edge");
        assert_eq!(dd.dists(), vec![0.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn reweight_replaces_edge() {
        let mut dd = DynamicDijkstra::new(chain(3), 0).expect("maintainer");
        dd.add_edge(Edge::new(0, 1, 5.0)).expect("reweight");
        assert_eq!(dd.dists(), vec![0.0, 5.0, 6.0]);
        dd.add_edge(Edge::new(0, 1, 0.5)).expect("reweight");
        assert_eq!(dd.dists(), vec![0.0, 0.5, 1.5]);
    }

    #[test]
    fn removing_missing_edge_is_noop() {
        let mut dd = DynamicDijkstra::new(chain(3), 0).expect("maintainer");
        assert!(dd.remove_edge(&Edge::unit(2, 0)).is_none());
        assert_eq!(dd.pending(), 0);
    }

    #[test]
    fn rejects_bad_weights_and_nodes() {
        let mut dd = DynamicDijkstra::new(chain(3), 0).expect("maintainer");
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                dd.add_edge(Edge::new(0, 2, weight)),
                Err(GraphError::InvalidEdgeWeight { .. })
            ));
        }
        assert!(matches!(
            dd.add_edge(Edge::unit(0, 9)),
            Err(GraphError::UnknownNode(_))
        ));
        assert_eq!(dd.graph().edge_count(), 2);

        let zero = Graph::from_weighted_lists([0, 1], [(0, 0.0, 1)]).expect("graph");
        assert!(DynamicDijkstra::new(zero, 0).is_err());
        assert!(DynamicDijkstra::new(Graph::<u8>::empty(), 0).is_err());
    }

    #[test]
    fn distance_by_identity() {
        let g = Graph::from_lists(["a", "b", "c"], [("a", "b"), ("b", "c")]).expect("graph");
        let mut dd = DynamicDijkstra::from_node(g, &"a").expect("maintainer");
        assert_eq!(dd.distance(&"c"), Ok(2.0));
        dd.remove_edge(&Edge::unit(1, 2));
        assert_eq!(dd.distance(&"c"), Ok(INF));
        assert!(dd.distance(&"z").is_err());
    }

    #[test]
    fn dists_is_idempotent() {
        let mut dd = DynamicDijkstra::new(chain(5), 0).expect("maintainer");
        dd.remove_edge(&Edge::unit(2, 3));
        dd.add_edge(Edge::new(0, 4, 2.5)).expect("add");
        let first = dd.dists();
        assert_eq!(first, vec![0.0, 1.0, 2.0, INF, 2.5]);
        assert_eq!(dd.dists(), first);
    }
}
