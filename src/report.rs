use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Result;

/// Column names of the summary table
pub const SUMMARY_COLUMNS: [&str; 7] = [
    "dataset",
    "nodes",
    "edges",
    "scc_count",
    "time_scc_ms",
    "time_topo_ms",
    "time_dag_ms",
];

/// One row of the summary table, describing one analyzed graph
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub scc_ms: f64,
    pub topo_ms: f64,
    pub dag_ms: f64,
}

impl SummaryRow {
    pub fn total_ms(&self) -> f64 {
        self.scc_ms + self.topo_ms + self.dag_ms
    }

    /// Fields of the row in column order, times with three decimals
    pub fn record(&self) -> [String; 7] {
        [
            self.label.clone(),
            self.nodes.to_string(),
            self.edges.to_string(),
            self.components.to_string(),
            format!("{:.3}", self.scc_ms),
            format!("{:.3}", self.topo_ms),
            format!("{:.3}", self.dag_ms),
        ]
    }
}

/// Writes the header followed by one record per row
pub fn write_summary<Wr: Write>(out: Wr, rows: &[SummaryRow]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(SUMMARY_COLUMNS)?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the summary table to it
pub fn write_summary_file<P: AsRef<Path>>(path: P, rows: &[SummaryRow]) -> Result<()> {
    write_summary(File::create(path)?, rows)
}
