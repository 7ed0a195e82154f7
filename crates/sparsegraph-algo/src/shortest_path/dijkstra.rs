//! One-shot Dijkstra over the graph's successor lists, plus the
//! deterministic min-queue it shares with the dynamic maintainer.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;

use sparsegraph_core::error::GraphError;
use sparsegraph_core::graph::{Edge, Graph};
use tracing::{debug, instrument};

// ---------------------------------------------------------------------------
// Min-queue
// ---------------------------------------------------------------------------

/// One queued `(key, node)` pair; `seq` is unique per push.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub(crate) key: f64,
    pub(crate) seq: u64,
    pub(crate) node: usize,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    // Reversed so BinaryHeap pops the smallest key, earliest push first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue of `(key, node)` popping the smallest key first; equal
/// keys pop in push order.
///
/// Entries are never updated in place. Callers push again and recognise
/// stale pops by the `seq` that [`MinQueue::push`] returned.
#[derive(Debug, Clone, Default)]
pub(crate) struct MinQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl MinQueue {
    pub(crate) fn push(&mut self, key: f64, node: usize) -> u64 {
        let seq = self.next_seq;
        self.heap.push(QueueEntry { key, seq, node });
        self.next_seq += 1;
        seq
    }

    pub(crate) fn pop(&mut self) -> Option<QueueEntry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

// ---------------------------------------------------------------------------
// Dijkstra
// ---------------------------------------------------------------------------

/// Reject weights Dijkstra cannot settle: negative values and NaN.
fn check_non_negative(edge: Edge) -> Result<(), GraphError> {
    if edge.weight >= 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidEdgeWeight {
            from: edge.source,
            to: edge.target,
            weight: edge.weight,
        })
    }
}

/// Single-source distances from `start` by label-setting search.
///
/// Returns an empty vector for an empty graph.
///
/// # Errors
///
/// - [`GraphError::UnknownNode`] if `start` is out of range.
/// - [`GraphError::InvalidEdgeWeight`] if any edge weight is negative or
///   NaN.
#[instrument(skip(graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn dijkstra<V>(graph: &Graph<V>, start: usize) -> Result<Vec<f64>, GraphError>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    let n = graph.node_count();
    if n == 0 {
        return Ok(Vec::new());
    }
    let start = graph.check_order(start)?;
    graph.edges().try_for_each(check_non_negative)?;

    let mut dist = vec![f64::INFINITY; n];
    let mut settled = vec![false; n];
    let mut queue = MinQueue::default();
    dist[start] = 0.0;
    queue.push(0.0, start);

    let mut pops = 0_usize;
    while let Some(QueueEntry { key, node: u, .. }) = queue.pop() {
        pops += 1;
        if settled[u] {
            continue;
        }
        settled[u] = true;
        for e in graph.successors(u) {
            let candidate = key + e.weight;
            if candidate < dist[e.target] {
                dist[e.target] = candidate;
                queue.push(candidate, e.target);
            }
        }
    }
    debug!(pops, "dijkstra settled");
    Ok(dist)
}
