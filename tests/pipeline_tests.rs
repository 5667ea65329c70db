use rand::rngs::StdRng;
use rand::SeedableRng;
use scc_dagpath::graph::generators::{clustered_graph, random_graph};
use scc_dagpath::graph::loader::load_file;
use scc_dagpath::graph::{AdjacencyGraph, Graph, MutableGraph};
use scc_dagpath::{Distance, Error, Pipeline, PipelineConfig};
use std::collections::VecDeque;
use std::path::Path;

fn reachable_from(graph: &AdjacencyGraph<i64>, source: usize) -> Vec<bool> {
    let mut seen = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::from([source]);
    seen[source] = true;
    while let Some(u) = queue.pop_front() {
        for edge in graph.outgoing_edges(u) {
            if !seen[edge.to] {
                seen[edge.to] = true;
                queue.push_back(edge.to);
            }
        }
    }
    seen
}

#[test]
fn test_small_dataset_end_to_end() {
    let graph = load_file(Path::new(env!("CARGO_MANIFEST_DIR")).join("data/tasks_small.json")).unwrap();
    let analysis = Pipeline::default().analyze("tasks_small.json", &graph).unwrap();

    // {0}, {1,2,3}, {4,5}, {6}, {7}
    assert_eq!(analysis.component_count(), 5);
    assert!(analysis.components.contains(&vec![1, 2, 3]));
    assert!(analysis.components.contains(&vec![4, 5]));
    assert!(analysis.order.is_complete());

    let target = analysis.component_of[7];
    let shortest = analysis.shortest.as_ref().unwrap();
    let longest = analysis.longest.as_ref().unwrap();
    assert_eq!(analysis.source_component(), Some(analysis.component_of[0]));
    assert_eq!(shortest.distances[target], Distance::Finite(12)); // 0→6→7
    assert_eq!(longest.distances[target], Distance::Finite(13)); // 0→{1,2,3}→{4,5}→6→7
    assert_eq!(longest.reconstruct_path(target).unwrap().len(), 5);

    let row = analysis.summary();
    assert_eq!(row.label, "tasks_small.json");
    assert_eq!((row.nodes, row.edges, row.components), (8, 10, 5));
}

#[test]
fn test_condensation_keeps_extreme_weights_per_objective() {
    // Two parallel crossings from {0,1} into {2}: weights 4 and 9
    let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1i64), (1, 0, 1), (0, 2, 4), (1, 2, 9)]).unwrap();
    let analysis = Pipeline::default().analyze("parallel", &graph).unwrap();

    let target = analysis.component_of[2];
    assert_eq!(analysis.shortest.unwrap().distances[target], Distance::Finite(4));
    assert_eq!(analysis.longest.unwrap().distances[target], Distance::Finite(9));
    assert_eq!(analysis.shortest_dag.edge_count(), analysis.longest_dag.edge_count());
}

#[test]
fn test_finite_distance_iff_reachable_in_original() {
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(120, 1.8, 25, &mut rng).unwrap();
        let pipeline = Pipeline::new(PipelineConfig { source: 5 });
        let analysis = pipeline.analyze("random", &graph).unwrap();

        assert!(analysis.order.is_complete());
        let reach = reachable_from(&graph, 5);
        let shortest = analysis.shortest.as_ref().unwrap();
        let longest = analysis.longest.as_ref().unwrap();
        for v in 0..graph.vertex_count() {
            let c = analysis.component_of[v];
            assert_eq!(shortest.distances[c].is_finite(), reach[v], "seed {} vertex {}", seed, v);
            assert_eq!(longest.distances[c].is_finite(), reach[v], "seed {} vertex {}", seed, v);
            if reach[v] {
                assert!(shortest.distances[c] <= longest.distances[c]);
            }
        }
    }
}

#[test]
fn test_clustered_graph_components() {
    let mut rng = StdRng::seed_from_u64(8);
    let graph = clustered_graph(40, 5, 120, &mut rng).unwrap();
    let analysis = Pipeline::default().analyze("clustered", &graph).unwrap();

    assert_eq!(analysis.component_count(), 40);
    assert_eq!(analysis.order.len(), 40);
    assert_eq!(analysis.scc_metrics.dfs_visits, 200);
    assert_eq!(analysis.topo_metrics.pops, 40);
}

#[test]
fn test_empty_graph_and_bad_source() {
    let empty: AdjacencyGraph<i64> = AdjacencyGraph::directed(0);
    let analysis = Pipeline::default().analyze("empty", &empty).unwrap();
    assert_eq!(analysis.component_count(), 0);
    assert!(analysis.shortest.is_none());
    assert_eq!(analysis.summary().nodes, 0);

    let graph: AdjacencyGraph<i64> = AdjacencyGraph::directed(3);
    let pipeline = Pipeline::new(PipelineConfig { source: 3 });
    assert!(matches!(pipeline.analyze("bad", &graph), Err(Error::SourceNotFound(3))));
}

#[test]
fn test_undirected_graph_collapses_connected_parts() {
    let mut graph: AdjacencyGraph<i64> = AdjacencyGraph::undirected(5);
    graph.add_edge(0, 1, 3).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(3, 4, 1).unwrap();

    let analysis = Pipeline::default().analyze("undirected", &graph).unwrap();
    assert_eq!(analysis.component_count(), 2);
    assert_eq!(analysis.shortest_dag.edge_count(), 0);
    assert_eq!(analysis.shortest.unwrap().reachable_count(), 1);
}

#[test]
fn test_analysis_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(400, 2.2, 30, &mut rng).unwrap();
    let pipeline = Pipeline::default();

    let a = pipeline.analyze("g", &graph).unwrap();
    let b = pipeline.analyze("g", &graph).unwrap();

    assert_eq!(a.components, b.components);
    assert_eq!(a.order, b.order);
    assert_eq!(a.shortest, b.shortest);
    assert_eq!(a.longest, b.longest);
    assert_eq!(a.shortest_dag, b.shortest_dag);
    assert_eq!(a.scc_metrics.counters(), b.scc_metrics.counters());
    assert_eq!(a.dag_metrics.counters(), b.dag_metrics.counters());
}
