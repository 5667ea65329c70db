//! SCC DAG-Path - condensation analysis for directed graphs
//!
//! This library decomposes a directed graph into strongly connected components
//! (Tarjan), collapses them into an acyclic condensation graph, orders that graph
//! topologically (Kahn) and computes single-source shortest and longest distances
//! over the resulting DAG by relaxation in topological order.
//!
//! Every algorithm engine records its own [`Metrics`] so callers can report the
//! cost of each phase.

pub mod algorithm;
pub mod batch;
pub mod config;
pub mod graph;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use algorithm::{
    dag_paths::DagPathSolver, kahn::KahnTopoSort, tarjan::TarjanScc, CondensationWeight,
    Distance, Instrumented, Objective, PathResult, TopoOrder,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;
pub use metrics::Metrics;
pub use pipeline::{Analysis, Pipeline, PipelineConfig};
pub use report::SummaryRow;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("Components requested before the SCC engine was run")]
    NotRun,

    #[error("Graph has {found} vertices but the components cover {expected}")]
    GraphMismatch { expected: usize, found: usize },

    #[error("Graph contains a cycle: only {ordered} of {total} vertices could be ordered")]
    CycleDetected { ordered: usize, total: usize },

    #[error("Path distance overflowed the weight type")]
    WeightOverflow,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed graph document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
