//! Error taxonomy shared by the graph model, the sparse substrate and every
//! algorithm engine.
//!
//! Library operations return [`GraphError`]. Each variant maps onto a stable
//! [`ErrorCode`] so callers can branch on a machine-readable identifier
//! instead of matching message text.
//!
//! None of these conditions are transient: every algorithm is a
//! deterministic function of its inputs, so nothing here is retried.

use std::fmt;

/// Errors raised by graph construction, substrate operations and algorithms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// A relaxation pass after convergence still shortened a distance.
    #[error("negative weight cycle detected")]
    NegativeWeightCycle,

    /// A node lookup failed: the node (or order) is not part of the graph.
    #[error("graph does not contain node {0}")]
    UnknownNode(String),

    /// An edge list referenced a node absent from the supplied node list.
    #[error("edge ({from}, {to}) references a node not in the node list")]
    MalformedEdgeList {
        /// Debug rendering of the edge source.
        from: String,
        /// Debug rendering of the edge target.
        to: String,
    },

    /// The supplied node list contained the same identity twice.
    #[error("node {0} appears more than once in the node list")]
    DuplicateNode(String),

    /// Two sparse operands (or an operand and its mask) disagree on shape.
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Shape required by the operation.
        expected: (usize, usize),
        /// Shape actually supplied.
        actual: (usize, usize),
    },

    /// A Dijkstra-based engine was handed a weight it cannot settle.
    #[error("edge ({from}, {to}) has unsupported weight {weight}")]
    InvalidEdgeWeight {
        /// Order of the edge source.
        from: usize,
        /// Order of the edge target.
        to: usize,
        /// Offending weight.
        weight: f64,
    },
}

impl GraphError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NegativeWeightCycle => ErrorCode::NegativeWeightCycle,
            Self::UnknownNode(_) => ErrorCode::UnknownNode,
            Self::MalformedEdgeList { .. } => ErrorCode::MalformedEdgeList,
            Self::DuplicateNode(_) => ErrorCode::DuplicateNode,
            Self::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
            Self::InvalidEdgeWeight { .. } => ErrorCode::InvalidEdgeWeight,
        }
    }

    /// Build a [`GraphError::UnknownNode`] from any debuggable identity.
    pub fn unknown_node(node: impl fmt::Debug) -> Self {
        Self::UnknownNode(format!("{node:?}"))
    }
}

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    UnknownNode,
    DuplicateNode,
    MalformedEdgeList,
    InvalidEdgeWeight,
    DimensionMismatch,
    NegativeWeightCycle,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::UnknownNode => "E2001",
            Self::DuplicateNode => "E2002",
            Self::MalformedEdgeList => "E2003",
            Self::InvalidEdgeWeight => "E2004",
            Self::DimensionMismatch => "E3001",
            Self::NegativeWeightCycle => "E4001",
        }
    }

    /// Short human-facing summary for logs.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::UnknownNode => "Node not in graph",
            Self::DuplicateNode => "Duplicate node in node list",
            Self::MalformedEdgeList => "Edge references unknown node",
            Self::InvalidEdgeWeight => "Unsupported edge weight",
            Self::DimensionMismatch => "Sparse operand dimension mismatch",
            Self::NegativeWeightCycle => "Negative weight cycle",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix the TOML syntax or field types and retry."),
            Self::UnknownNode => Some("Only reference nodes that were part of the node list."),
            Self::DuplicateNode => Some("Deduplicate the node list before building the graph."),
            Self::MalformedEdgeList => Some("Add the missing endpoint to the node list."),
            Self::InvalidEdgeWeight => Some(
                "Dijkstra needs non-negative weights, the dynamic maintainer positive ones. \
                 Use Bellman-Ford otherwise.",
            ),
            Self::DimensionMismatch => None,
            Self::NegativeWeightCycle => {
                Some("Shortest paths are undefined; remove or reweight the cycle.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
