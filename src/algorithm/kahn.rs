use std::collections::VecDeque;

use crate::algorithm::Instrumented;
use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Vertex order produced by [`KahnTopoSort`]
///
/// When the graph has a cycle the order stops short: vertices on a cycle, and
/// everything reachable only through one, never reach in-degree zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoOrder {
    order: Vec<usize>,
    total: usize,
}

impl TopoOrder {
    /// The (possibly partial) order
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True if every vertex of the graph was ordered
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.total
    }

    /// Number of vertices left out because of cycles
    pub fn unordered(&self) -> usize {
        self.total - self.order.len()
    }

    /// Position of every vertex in the order, `None` for unordered vertices
    pub fn positions(&self) -> Vec<Option<usize>> {
        let mut positions = vec![None; self.total];
        for (i, &v) in self.order.iter().enumerate() {
            positions[v] = Some(i);
        }
        positions
    }

    /// The full order, or [`Error::CycleDetected`] if it is partial
    pub fn as_complete(&self) -> Result<&[usize]> {
        if self.is_complete() {
            Ok(&self.order)
        } else {
            Err(self.cycle_error())
        }
    }

    /// Consumes the order, failing with [`Error::CycleDetected`] if it is partial
    pub fn into_complete(self) -> Result<Vec<usize>> {
        if self.is_complete() {
            Ok(self.order)
        } else {
            Err(self.cycle_error())
        }
    }

    /// The (possibly partial) order as a vector
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    fn cycle_error(&self) -> Error {
        Error::CycleDetected {
            ordered: self.order.len(),
            total: self.total,
        }
    }
}

/// Kahn's topological sort with a FIFO queue
///
/// Vertices with in-degree zero are seeded in ascending id order, so the
/// result is deterministic for a given graph.
#[derive(Debug, Default)]
pub struct KahnTopoSort {
    metrics: Metrics,
}

impl KahnTopoSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orders the vertices of `graph` so every edge points forward
    ///
    /// A cyclic graph is not an error here; check
    /// [`TopoOrder::is_complete`] or use [`TopoOrder::into_complete`].
    pub fn run<W, G>(&mut self, graph: &G) -> Result<TopoOrder>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.metrics.reset();
        self.metrics.start();
        let outcome = self.sort(graph);
        self.metrics.stop();

        let order = outcome?;
        if !order.is_complete() {
            log::debug!(
                "kahn: {} of {} vertices left unordered by a cycle",
                order.unordered(),
                order.total
            );
        }
        Ok(order)
    }

    fn sort<W, G>(&mut self, graph: &G) -> Result<TopoOrder>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        // In-degrees from one pass over the edge list; an undirected edge
        // feeds both endpoints, matching its two adjacency entries
        let mut in_degree = vec![0usize; n];
        for edge in graph.edges() {
            if !graph.has_vertex(edge.from) || !graph.has_vertex(edge.to) {
                return Err(Error::InvalidEdge(edge.from, edge.to));
            }
            in_degree[edge.to] += 1;
            if !graph.is_directed() {
                in_degree[edge.from] += 1;
            }
        }

        let mut queue = VecDeque::new();
        for (v, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                queue.push_back(v);
                self.metrics.pushes += 1;
            }
        }

        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            self.metrics.pops += 1;
            order.push(u);

            for edge in graph.outgoing_edges(u) {
                self.metrics.edges_processed += 1;
                if !graph.has_vertex(edge.to) {
                    return Err(Error::InvalidVertex(edge.to));
                }
                let degree = &mut in_degree[edge.to];
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(edge.to);
                    self.metrics.pushes += 1;
                }
            }
        }

        Ok(TopoOrder { order, total: n })
    }
}

impl Instrumented for KahnTopoSort {
    fn name(&self) -> &'static str {
        "Kahn topological sort"
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
