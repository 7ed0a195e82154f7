//! Builders that turn raw node/edge lists or a petgraph graph into a
//! [`Graph`].
//!
//! These sit at the boundary of the engine: they validate their input
//! (every edge endpoint must be in the node list, node identities must be
//! unique) and hand back a ready-made [`Graph`]. The algorithm crates never
//! parse anything themselves.

use std::fmt;
use std::hash::Hash;

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use tracing::{debug, instrument};

use crate::error::GraphError;

use super::model::{Edge, Graph};

impl<V> Graph<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Build a graph from a node list and unit-weight `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateNode`] if a node repeats.
    /// - [`GraphError::MalformedEdgeList`] if an edge names a node absent
    ///   from `nodes`.
    pub fn from_lists(
        nodes: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self, GraphError> {
        Self::from_weighted_lists(
            nodes,
            edges
                .into_iter()
                .map(|(from, to)| (from, Edge::DEFAULT_WEIGHT, to)),
        )
    }

    /// Build a graph from a node list and `(from, weight, to)` triples.
    ///
    /// A repeated `(from, to)` pair keeps the last weight.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_lists`].
    #[instrument(skip_all)]
    pub fn from_weighted_lists(
        nodes: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, f64, V)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(nodes)?;
        for (from, weight, to) in edges {
            let edge = graph
                .edge_between(&from, &to, weight)
                .map_err(|_| GraphError::MalformedEdgeList {
                    from: format!("{from:?}"),
                    to: format!("{to:?}"),
                })?;
            graph.insert_edge(edge)?;
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph from lists"
        );
        Ok(graph)
    }

    /// Build a symmetric graph: every `(a, b)` pair is inserted in both
    /// directions with unit weight.
    ///
    /// # Errors
    ///
    /// Same as [`Graph::from_lists`].
    pub fn undirected_from_lists(
        nodes: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (V, V)>,
    ) -> Result<Self, GraphError> {
        Self::from_lists(
            nodes,
            edges
                .into_iter()
                .flat_map(|(a, b)| [(a.clone(), b.clone()), (b, a)]),
        )
    }

    /// Import a petgraph `DiGraph` whose node weights are identities and
    /// whose edge weights are distances. Node order follows petgraph's
    /// index order; parallel edges collapse to the last one visited.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if two petgraph nodes carry equal
    /// identities.
    #[instrument(skip_all, fields(nodes = foreign.node_count(), edges = foreign.edge_count()))]
    pub fn from_petgraph(foreign: &DiGraph<V, f64>) -> Result<Self, GraphError> {
        let mut graph = Self::new(foreign.node_indices().map(|i| foreign[i].clone()))?;
        for e in foreign.edge_references() {
            graph.insert_edge(Edge::new(
                e.source().index(),
                e.target().index(),
                *e.weight(),
            ))?;
        }
        Ok(graph)
    }

    /// Export to a petgraph `DiGraph`, preserving node order.
    #[must_use]
    pub fn to_petgraph(&self) -> DiGraph<V, f64> {
        let mut out = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let indices: Vec<_> = self
            .nodes()
            .iter()
            .map(|n| out.add_node(n.value().clone()))
            .collect();
        for e in self.edges() {
            out.add_edge(indices[e.source], indices[e.target], e.weight);
        }
        out
    }
}
