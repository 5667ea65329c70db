use crate::graph::{AdjacencyGraph, MutableGraph};
use crate::Result;
use rand::prelude::*;

/// Generates a random directed graph with about `edge_factor * n` edges
///
/// Self-loops are skipped. Weights are drawn from `1..=max_weight`.
pub fn random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyGraph<i64>> {
    let mut graph = AdjacencyGraph::directed(n);
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a random DAG: every edge goes from a lower to a higher id
///
/// Weights are drawn from `-max_weight..=max_weight`, so negative edges occur.
pub fn random_dag<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    rng: &mut R,
) -> Result<AdjacencyGraph<i64>> {
    let mut graph = AdjacencyGraph::directed(n);
    if n < 2 {
        return Ok(graph);
    }

    let bound = max_weight.abs();
    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            let weight = rng.gen_range(-bound..=bound);
            graph.add_edge(a.min(b), a.max(b), weight)?;
        }
    }

    Ok(graph)
}

/// Generates `clusters` rings of `cluster_size` vertices joined by random
/// forward bridges
///
/// Cluster `c` holds vertices `c * cluster_size..(c + 1) * cluster_size`; every
/// ring is strongly connected and bridges only go from a lower cluster to a
/// higher one, so the graph has exactly `clusters` components when
/// `cluster_size > 0`.
pub fn clustered_graph<R: Rng>(
    clusters: usize,
    cluster_size: usize,
    bridges: usize,
    rng: &mut R,
) -> Result<AdjacencyGraph<i64>> {
    let n = clusters * cluster_size;
    let mut graph = AdjacencyGraph::directed(n);
    if cluster_size == 0 {
        return Ok(graph);
    }

    for c in 0..clusters {
        let base = c * cluster_size;
        for i in 0..cluster_size {
            let next = base + (i + 1) % cluster_size;
            if cluster_size > 1 {
                graph.add_edge(base + i, next, rng.gen_range(1..=10))?;
            }
        }
    }

    if clusters > 1 {
        for _ in 0..bridges {
            let a = rng.gen_range(0..clusters);
            let b = rng.gen_range(0..clusters);
            if a == b {
                continue;
            }
            let (low, high) = (a.min(b), a.max(b));
            let from = low * cluster_size + rng.gen_range(0..cluster_size);
            let to = high * cluster_size + rng.gen_range(0..cluster_size);
            graph.add_edge(from, to, rng.gen_range(1..=100))?;
        }
    }

    Ok(graph)
}
