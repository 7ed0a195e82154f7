#![forbid(unsafe_code)]
//! sparsegraph-core library.
//!
//! Graph model, sparse matrix/vector substrate, error taxonomy and
//! configuration shared by the algorithm engines in `sparsegraph-algo`.
//!
//! # Conventions
//!
//! - **Errors**: library operations return [`error::GraphError`];
//!   configuration loading uses `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`debug!`, `warn!`, `trace!`). The
//!   library never installs a subscriber.

pub mod config;
pub mod error;
pub mod graph;
pub mod sparse;

pub use error::{ErrorCode, GraphError};
pub use graph::{Edge, Graph, Node};
