use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{AdjacencyGraph, Graph, MutableGraph};
use crate::Result;

/// JSON representation of a graph
///
/// ```json
/// { "n": 3, "directed": true, "edges": [ { "u": 0, "v": 1, "w": 4 } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    pub n: usize,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

/// One edge of a [`GraphDocument`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: usize,
    pub v: usize,
    #[serde(default = "default_weight")]
    pub w: i64,
}

fn default_directed() -> bool {
    true
}

fn default_weight() -> i64 {
    1
}

impl GraphDocument {
    /// Builds the graph, rejecting edges with endpoints outside `0..n`
    pub fn into_graph(self) -> Result<AdjacencyGraph<i64>> {
        let mut graph = AdjacencyGraph::new(self.n, self.directed);
        for edge in self.edges {
            graph.add_edge(edge.u, edge.v, edge.w)?;
        }
        Ok(graph)
    }

    pub fn from_graph(graph: &AdjacencyGraph<i64>) -> Self {
        GraphDocument {
            n: graph.vertex_count(),
            directed: graph.is_directed(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeRecord { u: e.from, v: e.to, w: e.weight })
                .collect(),
        }
    }
}

/// Parses a graph from a JSON string
pub fn from_json_str(json: &str) -> Result<AdjacencyGraph<i64>> {
    let document: GraphDocument = serde_json::from_str(json)?;
    document.into_graph()
}

/// Parses a graph from a JSON reader
pub fn from_reader<R: Read>(reader: R) -> Result<AdjacencyGraph<i64>> {
    let document: GraphDocument = serde_json::from_reader(reader)?;
    document.into_graph()
}

/// Loads a graph from a JSON file
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<AdjacencyGraph<i64>> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Writes a graph to a JSON file
pub fn save_file<P: AsRef<Path>>(path: P, graph: &AdjacencyGraph<i64>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &GraphDocument::from_graph(graph))?;
    Ok(())
}
