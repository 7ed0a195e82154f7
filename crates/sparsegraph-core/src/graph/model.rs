//! Nodes, weighted directed edges and the adjacency-backed graph.
//!
//! # Ordering
//!
//! Every node receives a stable *order* in `[0, n)` when the graph is built.
//! Orders index adjacency matrices, result vectors and the dynamic
//! maintainer's distance table, so they never change after construction.
//!
//! # Edge identity
//!
//! An [`Edge`] is identified by its `(source, target)` pair only. Inserting
//! an edge whose pair already exists replaces the old weight instead of
//! adding a parallel edge.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::instrument;

use crate::error::GraphError;
use crate::sparse::{Scalar, SparseMatrix};

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A graph node: an identity value plus its order in the node sequence.
///
/// Equality and hashing use the identity value only.
#[derive(Debug, Clone)]
pub struct Node<V> {
    value: V,
    order: usize,
}

impl<V> Node<V> {
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }
}

impl<V: PartialEq> PartialEq for Node<V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<V: Eq> Eq for Node<V> {}

impl<V: Hash> Hash for Node<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed, weighted edge between two node orders.
///
/// Equality and hashing use the endpoint pair only; the weight is payload.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

impl Edge {
    pub const DEFAULT_WEIGHT: f64 = 1.0;

    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Edge with [`Edge::DEFAULT_WEIGHT`].
    #[must_use]
    pub const fn unit(source: usize, target: usize) -> Self {
        Self::new(source, target, Self::DEFAULT_WEIGHT)
    }

    /// The same edge pointing the other way.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::new(self.target, self.source, self.weight)
    }

    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// A directed weighted graph over a fixed, duplicate-free node sequence.
///
/// Successor and predecessor maps are kept in step so both directions are
/// answered in time proportional to the degree.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    nodes: Vec<Node<V>>,
    index: HashMap<V, usize>,
    successors: Vec<BTreeMap<usize, f64>>,
    predecessors: Vec<BTreeMap<usize, f64>>,
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Build an edgeless graph from an ordered node sequence.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if a value repeats.
    pub fn new(nodes: impl IntoIterator<Item = V>) -> Result<Self, GraphError> {
        let mut graph = Self::empty();
        for value in nodes {
            let order = graph.nodes.len();
            if graph.index.insert(value.clone(), order).is_some() {
                return Err(GraphError::DuplicateNode(format!("{value:?}")));
            }
            graph.nodes.push(Node { value, order });
            graph.successors.push(BTreeMap::new());
            graph.predecessors.push(BTreeMap::new());
        }
        Ok(graph)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            successors: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in order.
    #[must_use]
    pub fn nodes(&self) -> &[Node<V>] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, order: usize) -> Option<&Node<V>> {
        self.nodes.get(order)
    }

    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.index.contains_key(value)
    }

    /// Look up the order of a node by identity.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `value` is not in the graph.
    pub fn order(&self, value: &V) -> Result<usize, GraphError> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| GraphError::unknown_node(value))
    }

    /// Validate that `order` names a node of this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if `order >= node_count()`.
    pub fn check_order(&self, order: usize) -> Result<usize, GraphError> {
        if order < self.nodes.len() {
            Ok(order)
        } else {
            Err(GraphError::UnknownNode(format!("#{order}")))
        }
    }

    /// Resolve two identities into an [`Edge`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is missing.
    pub fn edge_between(&self, from: &V, to: &V, weight: f64) -> Result<Edge, GraphError> {
        Ok(Edge::new(self.order(from)?, self.order(to)?, weight))
    }

    /// Insert `edge`, replacing the weight of an existing `(source, target)`
    /// pair. Returns the replaced weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if an endpoint is out of range.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<Option<f64>, GraphError> {
        let (s, t) = (self.check_order(edge.source)?, self.check_order(edge.target)?);
        self.predecessors[t].insert(s, edge.weight);
        Ok(self.successors[s].insert(t, edge.weight))
    }

    /// Remove the edge with the same endpoints as `edge`, returning it with
    /// its stored weight.
    pub fn remove_edge(&mut self, edge: &Edge) -> Option<Edge> {
        let (s, t) = edge.endpoints();
        let weight = self.successors.get_mut(s)?.remove(&t)?;
        self.predecessors[t].remove(&s);
        Some(Edge::new(s, t, weight))
    }

    #[must_use]
    pub fn weight(&self, source: usize, target: usize) -> Option<f64> {
        self.successors.get(source)?.get(&target).copied()
    }

    /// Outgoing edges of `order`, ascending by target.
    pub fn successors(&self, order: usize) -> impl Iterator<Item = Edge> + '_ {
        self.successors
            .get(order)
            .into_iter()
            .flat_map(move |m| m.iter().map(move |(&t, &w)| Edge::new(order, t, w)))
    }

    /// Incoming edges of `order`, ascending by source.
    pub fn predecessors(&self, order: usize) -> impl Iterator<Item = Edge> + '_ {
        self.predecessors
            .get(order)
            .into_iter()
            .flat_map(move |m| m.iter().map(move |(&s, &w)| Edge::new(s, order, w)))
    }

    /// All edges in source-then-target order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.nodes.len()).flat_map(|s| self.successors(s))
    }

    /// Derive the `n × n` adjacency matrix over `T`.
    ///
    /// Weights are converted with [`Scalar::from_weight`]. With `zero_diag`
    /// every diagonal slot stores an explicit [`Scalar::ZERO`], overriding
    /// self-loops so the diagonal acts as the `(min, +)` identity.
    #[must_use]
    #[instrument(skip(self), fields(nodes = self.nodes.len()))]
    pub fn adjacency_matrix<T: Scalar>(&self, zero_diag: bool) -> SparseMatrix<T> {
        let n = self.nodes.len();
        let mut m = SparseMatrix::new(n, n);
        for e in self.edges() {
            m.insert_unchecked(e.source, e.target, T::from_weight(e.weight));
        }
        if zero_diag {
            for i in 0..n {
                m.insert_unchecked(i, i, T::ZERO);
            }
        }
        m
    }

    /// Adjacency pattern with every edge stored as `1`, ignoring weights.
    #[must_use]
    pub fn pattern_matrix(&self) -> SparseMatrix<i32> {
        let n = self.nodes.len();
        let mut m = SparseMatrix::new(n, n);
        for e in self.edges() {
            m.insert_unchecked(e.source, e.target, 1);
        }
        m
    }

    /// BLAKE3 hash of the node count and the sorted weighted edge set.
    ///
    /// Compare against a stored value to decide whether derived matrices
    /// must be rebuilt.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.nodes.len() as u64).to_le_bytes());
        for e in self.edges() {
            hasher.update(&(e.source as u64).to_le_bytes());
            hasher.update(&(e.target as u64).to_le_bytes());
            hasher.update(&e.weight.to_bits().to_le_bytes());
        }
        format!("blake3:{}", hasher.finalize())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
