#![forbid(unsafe_code)]
//! sparsegraph-algo library.
//!
//! Graph algorithms expressed over the sparse substrate in
//! `sparsegraph-core`.
//!
//! | module            | entry points                                               |
//! |-------------------|------------------------------------------------------------|
//! | [`bfs`]           | `bfs`, `bfs_from`, `bfs_with_config`, `bfs_multi_source_parents` |
//! | [`shortest_path`] | `bellman_ford`, `bellman_ford_multi_source`, `floyd_warshall`, `dijkstra` |
//! | [`triangles`]     | `triangles_count_for_each_vertex`, `triangles_count_cohen`, `triangles_count_sandia` |
//! | [`dynamic`]       | [`DynamicDijkstra`]                                        |
//!
//! # Conventions
//!
//! - **Errors**: every entry point returns
//!   `Result<_, sparsegraph_core::GraphError>`.
//! - **Logging**: Use `tracing` macros (`debug!`, `warn!`, `trace!`).
//! - **Results**: vectors indexed by node order; multi-source queries return
//!   `(source, values)` pairs in the order the sources were given.

pub mod bfs;
pub mod dynamic;
pub mod shortest_path;
pub mod triangles;

pub use bfs::{bfs, bfs_from, bfs_multi_source_parents, bfs_with_config};
pub use dynamic::DynamicDijkstra;
pub use shortest_path::{bellman_ford, bellman_ford_multi_source, dijkstra, floyd_warshall};
pub use triangles::{triangles_count_cohen, triangles_count_for_each_vertex, triangles_count_sandia};
