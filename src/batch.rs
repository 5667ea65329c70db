use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::config::BatchConfig;
use crate::graph::loader;
use crate::pipeline::Pipeline;
use crate::report::SummaryRow;
use crate::{Error, Result};

/// A dataset that could not be analyzed
#[derive(Debug)]
pub struct DatasetFailure {
    pub dataset: String,
    pub error: Error,
}

/// Rows and failures of a batch run, both in file name order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<SummaryRow>,
    pub failures: Vec<DatasetFailure>,
}

/// Lists the `*.json` files of `dir`, sorted by name
pub fn discover_datasets(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::Config(format!("data directory not found: {}", dir.display())));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Label of a dataset: its file name
pub fn dataset_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loads and analyzes one graph file
pub fn analyze_file(path: &Path, pipeline: &Pipeline) -> Result<SummaryRow> {
    let graph = loader::load_file(path)?;
    let analysis = pipeline.analyze(&dataset_label(path), &graph)?;
    Ok(analysis.summary())
}

/// Analyzes every dataset of the configured directory
///
/// A dataset that fails to load or analyze is recorded in
/// [`BatchOutcome::failures`] and does not stop the others.
pub fn run_batch(config: &BatchConfig) -> Result<BatchOutcome> {
    let files = discover_datasets(&config.data_dir)?;
    if files.is_empty() {
        return Err(Error::Config(format!(
            "no JSON files found in {}",
            config.data_dir.display()
        )));
    }
    log::info!("found {} dataset(s) in {}", files.len(), config.data_dir.display());

    let pipeline = Pipeline::new(config.pipeline_config());
    let analyze = |path: &PathBuf| (dataset_label(path), analyze_file(path, &pipeline));
    let results: Vec<(String, Result<SummaryRow>)> = if config.parallel {
        files.par_iter().map(analyze).collect()
    } else {
        files.iter().map(analyze).collect()
    };

    let mut outcome = BatchOutcome::default();
    for (dataset, result) in results {
        match result {
            Ok(row) => outcome.rows.push(row),
            Err(error) => {
                log::warn!("skipping {}: {}", dataset, error);
                outcome.failures.push(DatasetFailure { dataset, error });
            }
        }
    }
    Ok(outcome)
}
