use rand::rngs::StdRng;
use rand::SeedableRng;
use scc_dagpath::graph::generators::random_dag;
use scc_dagpath::graph::{AdjacencyGraph, Graph};
use scc_dagpath::{DagPathSolver, Distance, Error, Instrumented, KahnTopoSort, Objective};

fn example_dag() -> AdjacencyGraph<i64> {
    AdjacencyGraph::from_edges(4, [(0, 1, 2i64), (1, 2, 3), (0, 2, 10), (2, 3, 1)]).unwrap()
}

// Reference distances by relaxing every edge n times
fn relax_all_edges(graph: &AdjacencyGraph<i64>, source: usize, objective: Objective) -> Vec<Distance<i64>> {
    let n = graph.vertex_count();
    let mut dist = vec![objective.unreached(); n];
    dist[source] = Distance::Finite(0);

    for _ in 0..n {
        for edge in graph.edges() {
            if let Distance::Finite(d) = dist[edge.from] {
                let candidate = Distance::Finite(d + edge.weight);
                if objective.improves(&candidate, &dist[edge.to]) {
                    dist[edge.to] = candidate;
                }
            }
        }
    }

    dist
}

fn path_weight(graph: &AdjacencyGraph<i64>, path: &[usize], objective: Objective) -> i64 {
    path.windows(2)
        .map(|pair| {
            let weights = graph
                .outgoing_edges(pair[0])
                .iter()
                .filter(|e| e.to == pair[1])
                .map(|e| e.weight);
            match objective {
                Objective::Shortest => weights.min().unwrap(),
                Objective::Longest => weights.max().unwrap(),
            }
        })
        .sum()
}

#[test]
fn test_dag_shortest_and_longest() {
    let dag = example_dag();
    let order = KahnTopoSort::new().run(&dag).unwrap().into_complete().unwrap();
    assert_eq!(order, vec![0, 1, 2, 3]);

    let mut solver = DagPathSolver::new();
    let shortest = solver.shortest_paths(&dag, 0, &order).unwrap();
    assert_eq!(solver.metrics().relaxations, 4);
    let longest = solver.longest_paths(&dag, 0, &order).unwrap();
    assert_eq!(solver.metrics().relaxations, 3);

    assert_eq!(shortest.distances[0], Distance::Finite(0));
    assert_eq!(shortest.distances[3], Distance::Finite(6)); // 0→1→2→3 (2+3+1)
    assert_eq!(longest.distances[3], Distance::Finite(11)); // 0→2→3 (10+1)

    assert_eq!(shortest.reconstruct_path(3), Some(vec![0, 1, 2, 3]));
    assert_eq!(longest.reconstruct_path(3), Some(vec![0, 2, 3]));
    assert_eq!(shortest.reconstruct_path(0), Some(vec![0]));
}

#[test]
fn test_unreachable_vertices_keep_sentinels() {
    let dag = AdjacencyGraph::from_edges(5, [(0, 1, 2i64), (1, 2, 3), (4, 3, 1), (4, 0, 1)]).unwrap();
    let order = KahnTopoSort::new().run(&dag).unwrap().into_complete().unwrap();

    let mut solver = DagPathSolver::new();
    let shortest = solver.shortest_paths(&dag, 0, &order).unwrap();
    let longest = solver.longest_paths(&dag, 0, &order).unwrap();

    for v in [3, 4] {
        assert_eq!(shortest.distances[v], Distance::PosInfinity);
        assert_eq!(longest.distances[v], Distance::NegInfinity);
        assert_eq!(shortest.reconstruct_path(v), None);
        assert_eq!(shortest.predecessors[v], None);
    }
    assert_eq!(shortest.reachable_count(), 3);
    assert_eq!(shortest.reconstruct_path(17), None);
    assert_eq!(shortest.distance(2).and_then(|d| d.finite()), Some(5));
}

#[test]
fn test_negative_weights() {
    let dag = AdjacencyGraph::from_edges(3, [(0, 1, -5i64), (1, 2, 3), (0, 2, -1)]).unwrap();
    let order = KahnTopoSort::new().run(&dag).unwrap().into_complete().unwrap();

    let mut solver = DagPathSolver::new();
    assert_eq!(solver.shortest_paths(&dag, 0, &order).unwrap().distances[2], Distance::Finite(-2));
    assert_eq!(solver.longest_paths(&dag, 0, &order).unwrap().distances[2], Distance::Finite(-1));
}

#[test]
fn test_matches_full_relaxation_on_random_dags() {
    for seed in 0..15 {
        let mut rng = StdRng::seed_from_u64(seed);
        let dag = random_dag(60, 2.5, 20, &mut rng).unwrap();
        let order = KahnTopoSort::new().run(&dag).unwrap().into_complete().unwrap();

        let mut solver = DagPathSolver::new();
        for objective in [Objective::Shortest, Objective::Longest] {
            let result = match objective {
                Objective::Shortest => solver.shortest_paths(&dag, 0, &order).unwrap(),
                Objective::Longest => solver.longest_paths(&dag, 0, &order).unwrap(),
            };
            assert_eq!(result.distances, relax_all_edges(&dag, 0, objective), "seed {}", seed);

            // Every reconstructed path realizes its recorded distance
            for target in 0..dag.vertex_count() {
                if let Some(path) = result.reconstruct_path(target) {
                    assert_eq!(path[0], 0);
                    assert_eq!(*path.last().unwrap(), target);
                    assert_eq!(
                        Distance::Finite(path_weight(&dag, &path, objective)),
                        result.distances[target],
                        "seed {} target {}",
                        seed,
                        target
                    );
                }
            }
        }
    }
}

#[test]
fn test_invalid_source_and_order() {
    let dag = example_dag();
    let mut solver = DagPathSolver::new();

    assert!(matches!(solver.shortest_paths(&dag, 4, &[0, 1, 2, 3]), Err(Error::SourceNotFound(4))));
    assert!(matches!(solver.longest_paths(&dag, 0, &[0, 9]), Err(Error::InvalidVertex(9))));
}

#[test]
fn test_failed_run_clears_previous_metrics() {
    let dag = example_dag();
    let mut solver = DagPathSolver::new();

    solver.shortest_paths(&dag, 0, &[0, 1, 2, 3]).unwrap();
    assert!(solver.metrics().relaxations > 0);

    assert!(matches!(solver.shortest_paths(&dag, 7, &[0, 1, 2, 3]), Err(Error::SourceNotFound(7))));
    assert_eq!(solver.metrics().counters(), [0; 5]);
    assert_eq!(solver.metrics().time_ns, 0);
}

#[test]
fn test_overflow_is_reported() {
    let dag: AdjacencyGraph<i8> = AdjacencyGraph::from_edges(3, [(0, 1, 100i8), (1, 2, 100)]).unwrap();
    let mut solver = DagPathSolver::new();

    assert!(matches!(solver.shortest_paths(&dag, 0, &[0, 1, 2]), Err(Error::WeightOverflow)));
}

#[test]
fn test_rerun_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(21);
    let dag = random_dag(100, 3.0, 10, &mut rng).unwrap();
    let order = KahnTopoSort::new().run(&dag).unwrap().into_complete().unwrap();

    let mut solver = DagPathSolver::new();
    let first = solver.longest_paths(&dag, 0, &order).unwrap();
    let counters = solver.metrics().counters();

    assert_eq!(DagPathSolver::new().longest_paths(&dag, 0, &order).unwrap(), first);
    assert_eq!(solver.longest_paths(&dag, 0, &order).unwrap(), first);
    assert_eq!(solver.metrics().counters(), counters);
}
