use crate::graph::traits::{Edge, Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A graph stored as both an edge list and per-vertex adjacency lists
///
/// Undirected graphs record each inserted edge once in the edge list and in
/// both directions in the adjacency lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<W = i64>
where
    W: Weight,
{
    /// Whether edges are one-directional
    directed: bool,

    /// Inserted edges in insertion order
    edges: Vec<Edge<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [edge]
    adjacency: Vec<Vec<Edge<W>>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` isolated vertices
    pub fn new(vertices: usize, directed: bool) -> Self {
        AdjacencyGraph {
            directed,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// Creates a directed graph with the specified number of vertices
    pub fn directed(vertices: usize) -> Self {
        Self::new(vertices, true)
    }

    /// Creates an undirected graph with the specified number of vertices
    pub fn undirected(vertices: usize) -> Self {
        Self::new(vertices, false)
    }

    /// Builds a directed graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::directed(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Number of outgoing edges of a vertex, 0 for unknown vertices
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.adjacency.get(vertex).map_or(0, |edges| edges.len())
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }

        let edge = Edge::new(from, to, weight);
        self.edges.push(edge);
        self.adjacency[from].push(edge);
        if !self.directed {
            self.adjacency[to].push(Edge::new(to, from, weight));
        }

        Ok(())
    }
}
