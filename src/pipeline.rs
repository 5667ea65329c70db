use crate::algorithm::dag_paths::DagPathSolver;
use crate::algorithm::kahn::KahnTopoSort;
use crate::algorithm::tarjan::TarjanScc;
use crate::algorithm::{Component, CondensationWeight, Instrumented, PathResult, TopoOrder};
use crate::graph::{AdjacencyGraph, Graph, Weight};
use crate::metrics::Metrics;
use crate::report::SummaryRow;
use crate::{Error, Result};

/// Parameters of an analysis
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Source vertex in the original graph; distances start from its component
    pub source: usize,
}

/// Everything produced by one analysis of one graph
#[derive(Debug, Clone)]
pub struct Analysis<W>
where
    W: Weight,
{
    pub label: String,
    pub node_count: usize,
    pub edge_count: usize,

    /// Components in root-finish order; index = component id
    pub components: Vec<Component>,
    /// Component id of every original vertex
    pub component_of: Vec<usize>,

    /// Condensation keeping the smallest weight between two components
    pub shortest_dag: AdjacencyGraph<W>,
    /// Condensation keeping the largest weight between two components
    pub longest_dag: AdjacencyGraph<W>,
    /// Topological order of the condensation (shared by both weightings)
    pub order: TopoOrder,

    /// `None` when the graph has no vertices
    pub shortest: Option<PathResult<W>>,
    pub longest: Option<PathResult<W>>,

    pub scc_metrics: Metrics,
    pub topo_metrics: Metrics,
    pub dag_metrics: Metrics,
}

impl<W> Analysis<W>
where
    W: Weight,
{
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Component holding the configured source vertex
    pub fn source_component(&self) -> Option<usize> {
        self.shortest.as_ref().map(|result| result.source)
    }

    /// The summary table row for this graph
    pub fn summary(&self) -> SummaryRow {
        SummaryRow {
            label: self.label.clone(),
            nodes: self.node_count,
            edges: self.edge_count,
            components: self.component_count(),
            scc_ms: self.scc_metrics.elapsed_ms(),
            topo_ms: self.topo_metrics.elapsed_ms(),
            dag_ms: self.dag_metrics.elapsed_ms(),
        }
    }
}

/// SCC decomposition, condensation, topological sort and DAG distances
///
/// Fresh engines are created for every call, so one pipeline can analyze
/// any number of graphs, also from several threads.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Pipeline { config }
    }

    pub fn analyze<W, G>(&self, label: &str, graph: &G) -> Result<Analysis<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let source = self.config.source;
        if n > 0 && !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let mut scc = TarjanScc::new();
        let components = scc.run(graph)?;
        let shortest_dag = scc.build_condensation(graph, CondensationWeight::Min)?;
        let longest_dag = scc.build_condensation(graph, CondensationWeight::Max)?;

        // Both condensations have the same edges in the same order, only the
        // weights differ, so one order serves both
        let mut topo = KahnTopoSort::new();
        let order = topo.run(&shortest_dag)?;
        let sequence = order.as_complete()?;

        let mut solver = DagPathSolver::new();
        let mut dag_metrics = Metrics::new();
        let (shortest, longest) = if n > 0 {
            let source_component = scc.component_of()[source];
            let shortest = solver.shortest_paths(&shortest_dag, source_component, sequence)?;
            dag_metrics.merge(solver.metrics());
            let longest = solver.longest_paths(&longest_dag, source_component, sequence)?;
            dag_metrics.merge(solver.metrics());
            (Some(shortest), Some(longest))
        } else {
            (None, None)
        };

        log::debug!(
            "{}: {} vertices, {} edges, {} components",
            label,
            n,
            graph.edge_count(),
            components.len()
        );
        for (name, metrics) in [
            (scc.name(), scc.metrics()),
            (topo.name(), topo.metrics()),
            (solver.name(), &dag_metrics),
        ] {
            log::debug!("{}: {} {}", label, name, metrics);
        }

        Ok(Analysis {
            label: label.to_string(),
            node_count: n,
            edge_count: graph.edge_count(),
            component_of: scc.component_of().to_vec(),
            components,
            shortest_dag,
            longest_dag,
            order,
            shortest,
            longest,
            scc_metrics: scc.metrics().clone(),
            topo_metrics: topo.metrics().clone(),
            dag_metrics,
        })
    }
}
