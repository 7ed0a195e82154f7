//! Graph model and input adapters.
//!
//! # Overview
//!
//! [`Graph`] is the single input type of every engine in the workspace. It
//! holds an ordered, duplicate-free node sequence and a weighted directed
//! edge relation, and it derives the sparse adjacency matrices the
//! matrix-based engines multiply.
//!
//! ## Pipeline
//!
//! ```text
//! node list + edge list      petgraph::DiGraph
//!        ↓ convert::from_lists      ↓ convert::from_petgraph
//!                    Graph<V>
//!        ↓ model::adjacency_matrix::<bool | i32 | f64>(zero_diag)
//!                 SparseMatrix<T>
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use sparsegraph_core::graph::Graph;
//!
//! let g = Graph::from_weighted_lists(["a", "b", "c"], [("a", 1.0, "b"), ("b", 2.0, "c")])?;
//! assert_eq!(g.order(&"c")?, 2);
//! let adj = g.adjacency_matrix::<f64>(true);
//! assert_eq!(adj.get(1, 2), Some(2.0));
//! # Ok::<(), sparsegraph_core::error::GraphError>(())
//! ```

pub mod convert;
pub mod model;

pub use model::{Edge, Graph, Node};
