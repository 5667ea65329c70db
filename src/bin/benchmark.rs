use rand::rngs::StdRng;
use rand::SeedableRng;
use scc_dagpath::graph::generators::{clustered_graph, random_graph};
use scc_dagpath::graph::loader::save_file;
use scc_dagpath::graph::AdjacencyGraph;
use scc_dagpath::report::SummaryRow;
use scc_dagpath::{Pipeline, PipelineConfig};
use std::env;
use std::path::PathBuf;

// Function to run the full pipeline on a graph and report it
fn benchmark_graph(label: &str, pipeline: &Pipeline, graph: &AdjacencyGraph<i64>) -> Option<SummaryRow> {
    println!("Running pipeline on {}...", label);

    match pipeline.analyze(label, graph) {
        Ok(analysis) => {
            let reachable = analysis.shortest.as_ref().map_or(0, |r| r.reachable_count());
            let mut total = analysis.scc_metrics.clone();
            total.merge(&analysis.topo_metrics);
            total.merge(&analysis.dag_metrics);
            println!(
                "  - {} components, {} reachable from the source component, {:?} total",
                analysis.component_count(),
                reachable,
                total.elapsed()
            );
            Some(analysis.summary())
        }
        Err(err) => {
            println!("  - failed: {}", err);
            None
        }
    }
}

fn main() -> scc_dagpath::Result<()> {
    env_logger::init();

    // Optional directory to store the generated graphs as JSON datasets
    let emit_dir = env::args().nth(1).map(PathBuf::from);

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: SCC + condensation + topological sort + DAG paths");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let pipeline = Pipeline::new(PipelineConfig::default());
    let mut rng = StdRng::seed_from_u64(0x5cc);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating graphs with {} vertices...", size);
        let graphs = [
            (format!("random_{}", size), random_graph(size, edge_factor, 100, &mut rng)?),
            (format!("clustered_{}", size), clustered_graph(size / 10, 10, size, &mut rng)?),
        ];

        for (label, graph) in &graphs {
            if let Some(dir) = &emit_dir {
                if let Err(err) = save_file(dir.join(format!("{}.json", label)), graph) {
                    println!("  - could not save {}: {}", label, err);
                }
            }
            if let Some(row) = benchmark_graph(label, &pipeline, graph) {
                results.push(row);
            }
        }
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<18} | {:<10} | {:<10} | {:<10} | {:<10} | {:<10} | {:<10}",
        "Dataset", "Vertices", "Edges", "SCCs", "SCC (ms)", "Topo (ms)", "DAG (ms)"
    );
    println!("-----------------------------------------------------");

    for row in &results {
        println!(
            "{:<18} | {:<10} | {:<10} | {:<10} | {:<10.3} | {:<10.3} | {:<10.3}",
            row.label, row.nodes, row.edges, row.components, row.scc_ms, row.topo_ms, row.dag_ms
        );
    }

    Ok(())
}
