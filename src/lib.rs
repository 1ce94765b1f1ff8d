//! Acyclic SP - shortest and longest paths in edge-weighted DAGs
//!
//! Given a directed acyclic graph and a source vertex, this library computes both the
//! minimum-weight and the maximum-weight path to every reachable vertex with a single
//! relaxation pass over a topological order, in O(V + E) time.
//!
//! Because acyclicity (not weight sign) is what makes one relaxation per vertex correct,
//! negative edge weights are fully supported.

pub mod algorithm;
pub mod cli;
pub mod graph;

pub use algorithm::{
    acyclic::{solve_all_sources, AcyclicSP, CriticalPath},
    report::PathReport,
    Extremum, Maximize, Minimize, PathTree,
};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, DirectedGraph, EdgeId, Topological};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Edge weight must be finite, got {0}")]
    InvalidWeight(f64),

    #[error("Graph has a directed cycle through vertex {vertex}")]
    CycleDetected { vertex: usize },

    #[error("Invalid topological order: {0}")]
    InvalidOrder(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
