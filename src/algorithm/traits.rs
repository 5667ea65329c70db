use std::fmt;

use crate::graph::Weight;
use crate::metrics::Metrics;

/// Trait for algorithm engines that record their own metrics
pub trait Instrumented {
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Metrics of the most recent run
    fn metrics(&self) -> &Metrics;
}

/// Tentative distance of a vertex from the source
///
/// Variants are ordered `NegInfinity < Finite(_) < PosInfinity`, so the
/// infinities compare correctly against any finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    NegInfinity,
    Finite(W),
    PosInfinity,
}

impl<W: Copy> Distance<W> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, `None` for either infinity
    pub fn finite(&self) -> Option<W> {
        match *self {
            Distance::Finite(value) => Some(value),
            _ => None,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::NegInfinity => f.write_str("-inf"),
            Distance::Finite(value) => value.fmt(f),
            Distance::PosInfinity => f.write_str("inf"),
        }
    }
}

/// Which extreme a path computation optimizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    /// Distance of a vertex that the source cannot reach
    pub fn unreached<W>(self) -> Distance<W> {
        match self {
            Objective::Shortest => Distance::PosInfinity,
            Objective::Longest => Distance::NegInfinity,
        }
    }

    /// True if `candidate` is strictly better than `current`
    pub fn improves<W: Ord>(self, candidate: &Distance<W>, current: &Distance<W>) -> bool {
        match self {
            Objective::Shortest => candidate < current,
            Objective::Longest => candidate > current,
        }
    }
}

/// Result of a single-source path computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult<W>
where
    W: Weight,
{
    /// Source vertex ID
    pub source: usize,

    /// Whether distances are minimal or maximal
    pub objective: Objective,

    /// Distances from source to each vertex
    pub distances: Vec<Distance<W>>,

    /// Predecessor vertices in the path tree
    pub predecessors: Vec<Option<usize>>,
}

impl<W> PathResult<W>
where
    W: Weight,
{
    /// Distance to a vertex, `None` if the vertex is out of range
    pub fn distance(&self, vertex: usize) -> Option<Distance<W>> {
        self.distances.get(vertex).copied()
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_finite()).count()
    }

    /// Get the path from source to target as a sequence of vertices
    ///
    /// Walks the predecessor recorded by the relaxation that produced each
    /// vertex's final distance. Returns `None` for unreachable targets.
    pub fn reconstruct_path(&self, target: usize) -> Option<Vec<usize>> {
        if !self.distance(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);

            // A predecessor chain longer than the graph means a corrupted tree
            if path.len() > self.predecessors.len() {
                log::warn!("predecessor chain from {} exceeds graph size", target);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}
