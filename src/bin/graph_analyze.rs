use colored::Colorize;
use scc_dagpath::batch::run_batch;
use scc_dagpath::config::BatchConfig;
use scc_dagpath::report::write_summary_file;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = match BatchConfig::from_env_and_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            eprintln!("usage: graph-analyze [--data DIR] [--out FILE] [--source N] [--sequential]");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "=== Running analysis for all datasets ===".bold());
    println!("   Data directory: {}", config.data_dir.display());
    println!("   Source vertex: {}", config.source);
    println!();

    let outcome = match run_batch(&config) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    for row in &outcome.rows {
        println!("============================================");
        println!("Processing file: {}", row.label.cyan());
        println!("Nodes: {}, Edges: {}", row.nodes, row.edges);
        println!(
            "{} {} (SCC={}, total time≈{:.3} ms)",
            "→ Done:".green(),
            row.label,
            row.components,
            row.total_ms()
        );
        println!();
    }

    for failure in &outcome.failures {
        eprintln!("{} {}: {}", "Error loading graph:".red(), failure.dataset, failure.error);
    }

    if let Err(err) = write_summary_file(&config.output, &outcome.rows) {
        eprintln!("{} writing {}: {}", "error:".red().bold(), config.output.display(), err);
        return ExitCode::FAILURE;
    }
    println!("{} {}", "✅ Results saved to:".green().bold(), config.output.display());

    if outcome.failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
