use crate::algorithm::{Distance, Instrumented, Objective, PathResult};
use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Single-source shortest and longest paths over a DAG
///
/// Vertices are relaxed once each, in a topological order supplied by the
/// caller, so negative weights need no special handling. The order is
/// trusted: a sequence that is not a topological order of `graph`, or a graph
/// with cycles, yields meaningless distances.
#[derive(Debug, Default)]
pub struct DagPathSolver {
    metrics: Metrics,
}

impl DagPathSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimal distances from `source`; unreachable vertices stay at `+inf`
    pub fn shortest_paths<W, G>(
        &mut self,
        graph: &G,
        source: usize,
        topo_order: &[usize],
    ) -> Result<PathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.run(graph, source, topo_order, Objective::Shortest)
    }

    /// Maximal distances from `source`; unreachable vertices stay at `-inf`
    pub fn longest_paths<W, G>(
        &mut self,
        graph: &G,
        source: usize,
        topo_order: &[usize],
    ) -> Result<PathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.run(graph, source, topo_order, Objective::Longest)
    }

    fn run<W, G>(
        &mut self,
        graph: &G,
        source: usize,
        topo_order: &[usize],
        objective: Objective,
    ) -> Result<PathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.metrics.reset();
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        self.metrics.start();
        let outcome = self.relax_in_order(graph, source, topo_order, objective);
        self.metrics.stop();
        outcome
    }

    fn relax_in_order<W, G>(
        &mut self,
        graph: &G,
        source: usize,
        topo_order: &[usize],
        objective: Objective,
    ) -> Result<PathResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances = vec![objective.unreached(); n];
        let mut predecessors = vec![None; n];
        distances[source] = Distance::Finite(W::zero());

        for &u in topo_order {
            if !graph.has_vertex(u) {
                return Err(Error::InvalidVertex(u));
            }
            let Distance::Finite(dist_u) = distances[u] else {
                continue;
            };

            // Relax all outgoing edges
            for edge in graph.outgoing_edges(u) {
                self.metrics.edges_processed += 1;
                let v = edge.to;
                if !graph.has_vertex(v) {
                    return Err(Error::InvalidVertex(v));
                }

                let candidate = dist_u
                    .checked_add(&edge.weight)
                    .map(Distance::Finite)
                    .ok_or(Error::WeightOverflow)?;
                if objective.improves(&candidate, &distances[v]) {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    self.metrics.relaxations += 1;
                }
            }
        }

        Ok(PathResult {
            source,
            objective,
            distances,
            predecessors,
        })
    }
}

impl Instrumented for DagPathSolver {
    fn name(&self) -> &'static str {
        "DAG path relaxation"
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
