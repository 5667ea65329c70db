use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::algorithm::Instrumented;
use crate::graph::{AdjacencyGraph, Graph, MutableGraph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Vertices of one strongly connected component, sorted ascending
pub type Component = Vec<usize>;

/// How the weight of a condensation edge is chosen when several original
/// edges connect the same pair of components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CondensationWeight {
    /// Keep the weight of the first crossing edge in insertion order
    #[default]
    First,
    /// Keep the smallest crossing weight
    Min,
    /// Keep the largest crossing weight
    Max,
}

impl CondensationWeight {
    fn combine<W: Weight>(self, kept: W, next: W) -> W {
        match self {
            CondensationWeight::First => kept,
            CondensationWeight::Min => kept.min(next),
            CondensationWeight::Max => kept.max(next),
        }
    }
}

/// Tarjan's strongly connected components algorithm
///
/// The depth-first search runs on an explicit stack of frames instead of the
/// call stack, so deep graphs cannot overflow it. Discovery order and low-link
/// values are the same as in the recursive formulation.
#[derive(Debug, Default)]
pub struct TarjanScc {
    metrics: Metrics,
    /// Component id of each vertex from the last run
    component_of: Vec<usize>,
    component_count: usize,
    ran: bool,
}

/// Suspended visit of `node`; `next_edge` indexes its outgoing edges
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next_edge: usize,
}

/// Per-run traversal state
struct TarjanState {
    counter: usize,
    index: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    active: Vec<usize>,
    frames: Vec<Frame>,
    component_of: Vec<usize>,
    components: Vec<Component>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        TarjanState {
            counter: 0,
            index: vec![None; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            active: Vec::new(),
            frames: Vec::new(),
            component_of: vec![usize::MAX; n],
            components: Vec::new(),
        }
    }

    fn discover(&mut self, v: usize, metrics: &mut Metrics) {
        metrics.dfs_visits += 1;
        self.index[v] = Some(self.counter);
        self.low[v] = self.counter;
        self.counter += 1;
        self.active.push(v);
        self.on_stack[v] = true;
        self.frames.push(Frame { node: v, next_edge: 0 });
    }

    /// Called once every edge of `u` has been examined
    fn finish(&mut self, u: usize) {
        if let Some(parent) = self.frames.last() {
            let parent = parent.node;
            self.low[parent] = self.low[parent].min(self.low[u]);
        }

        if self.index[u] != Some(self.low[u]) {
            return;
        }

        // u is a root: everything above it on the active stack is its component
        let id = self.components.len();
        let mut component = Vec::new();
        while let Some(w) = self.active.pop() {
            self.on_stack[w] = false;
            self.component_of[w] = id;
            component.push(w);
            if w == u {
                break;
            }
        }
        component.sort_unstable();
        self.components.push(component);
    }
}

impl TarjanScc {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds the strongly connected components of `graph`
    ///
    /// Components are returned in the order their roots finish, which is a
    /// reverse topological order of the condensation graph.
    pub fn run<W, G>(&mut self, graph: &G) -> Result<Vec<Component>>
    where
        W: Weight,
        G: Graph<W>,
    {
        self.metrics.reset();
        self.ran = false;
        self.component_of.clear();
        self.component_count = 0;
        self.metrics.start();
        let outcome = self.traverse(graph);
        self.metrics.stop();

        let state = outcome?;
        self.component_of = state.component_of;
        self.component_count = state.components.len();
        self.ran = true;

        log::debug!(
            "tarjan: {} vertices, {} components",
            graph.vertex_count(),
            self.component_count
        );
        Ok(state.components)
    }

    fn traverse<W, G>(&mut self, graph: &G) -> Result<TarjanState>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut state = TarjanState::new(n);

        for root in 0..n {
            if state.index[root].is_some() {
                continue;
            }
            state.discover(root, &mut self.metrics);

            while let Some(&Frame { node: u, next_edge }) = state.frames.last() {
                let Some(edge) = graph.outgoing_edges(u).get(next_edge) else {
                    state.frames.pop();
                    state.finish(u);
                    continue;
                };

                let top = state.frames.len() - 1;
                state.frames[top].next_edge += 1;
                self.metrics.edges_processed += 1;

                let v = edge.to;
                if !graph.has_vertex(v) {
                    return Err(Error::InvalidVertex(v));
                }

                match state.index[v] {
                    None => state.discover(v, &mut self.metrics),
                    Some(v_index) if state.on_stack[v] => {
                        state.low[u] = state.low[u].min(v_index);
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(state)
    }

    /// Component id of every vertex from the last run
    pub fn component_of(&self) -> &[usize] {
        &self.component_of
    }

    /// Number of components found by the last run
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Builds the condensation graph of `graph`, one vertex per component
    ///
    /// Every original edge crossing two components contributes to exactly one
    /// condensation edge for that ordered pair; edges inside a component are
    /// dropped. Condensation edges appear in the order their pair is first
    /// seen, whatever the weight policy.
    pub fn build_condensation<W, G>(
        &self,
        graph: &G,
        policy: CondensationWeight,
    ) -> Result<AdjacencyGraph<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        if !self.ran {
            return Err(Error::NotRun);
        }
        if graph.vertex_count() != self.component_of.len() {
            return Err(Error::GraphMismatch {
                expected: self.component_of.len(),
                found: graph.vertex_count(),
            });
        }

        let mut slots: HashMap<(usize, usize), usize> = HashMap::new();
        let mut crossings: Vec<(usize, usize, W)> = Vec::new();

        for edge in graph.edges() {
            if !graph.has_vertex(edge.from) || !graph.has_vertex(edge.to) {
                return Err(Error::InvalidEdge(edge.from, edge.to));
            }
            let a = self.component_of[edge.from];
            let b = self.component_of[edge.to];
            if a == b {
                continue;
            }

            match slots.entry((a, b)) {
                Entry::Occupied(slot) => {
                    let kept = &mut crossings[*slot.get()].2;
                    *kept = policy.combine(*kept, edge.weight);
                }
                Entry::Vacant(slot) => {
                    slot.insert(crossings.len());
                    crossings.push((a, b, edge.weight));
                }
            }
        }

        let mut dag = AdjacencyGraph::directed(self.component_count);
        for (a, b, weight) in crossings {
            dag.add_edge(a, b, weight)?;
        }
        Ok(dag)
    }
}

impl Instrumented for TarjanScc {
    fn name(&self) -> &'static str {
        "Tarjan SCC"
    }

    fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
