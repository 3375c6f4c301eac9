use thiserror::Error;

use crate::graph::NodeId;

/// Malformed input handed to the library.
///
/// Not finding a path is never an error; searches report it with an empty
/// `Path`, an empty list or `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("No heuristic value for node {0}")]
    MissingHeuristic(NodeId),

    #[error("Edge {src}->{dest} must have a positive weight")]
    NonPositiveWeight { src: NodeId, dest: NodeId },

    #[error("Beam width must be at least 1")]
    InvalidBeamWidth,

    #[error("Game tree has no leaves")]
    EmptyGameTree,

    #[error("Game tree needs a power-of-two number of leaves, got {0}")]
    InvalidLeafCount(usize),

    #[error("Invalid edge '{0}', expected SRC-DEST or SRC-DEST:WEIGHT")]
    InvalidEdgeSpec(String),

    #[error("Invalid heuristic '{0}', expected NODE=VALUE")]
    InvalidHeuristicSpec(String),
}

/// Result when an operation may reject its input.
pub type Result<T> = std::result::Result<T, SearchError>;
