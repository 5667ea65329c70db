use std::fmt::Debug;
use num_traits::{PrimInt, Signed};

use crate::Result;

/// Integer edge weight.
///
/// Any signed primitive integer qualifies. Weights may be zero or negative;
/// relaxation over a topological order never needs them to be positive.
pub trait Weight: PrimInt + Signed + Debug + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Send + Sync + 'static {}

/// A weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

/// Trait representing a weighted graph with contiguous vertex ids `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of inserted edges (an undirected edge counts once)
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns true if edges are one-directional
    fn is_directed(&self) -> bool;

    /// Returns every inserted edge in insertion order
    fn edges(&self) -> &[Edge<W>];

    /// Returns the outgoing edges of a vertex in insertion order
    ///
    /// Vertices outside the graph have no outgoing edges.
    fn outgoing_edges(&self, vertex: usize) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds an edge between existing vertices with the given weight
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()>;
}
