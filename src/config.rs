use std::env;
use std::path::PathBuf;

use crate::pipeline::PipelineConfig;
use crate::{Error, Result};

/// Configuration for a batch run over a directory of graph files
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for `*.json` graph documents
    pub data_dir: PathBuf,
    /// Where the summary table is written
    pub output: PathBuf,
    /// Source vertex for path distances, as an original vertex id
    pub source: usize,
    /// Analyze independent files on the rayon thread pool
    pub parallel: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            data_dir: PathBuf::from("data"),
            output: PathBuf::from("results.csv"),
            source: 0,
            parallel: true,
        }
    }
}

impl BatchConfig {
    /// Defaults, then `DATA_DIR` / `RESULTS_PATH`, then command line arguments
    ///
    /// `args` excludes the program name.
    pub fn from_env_and_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Ok(dir) = env::var("DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("RESULTS_PATH") {
            config.output = PathBuf::from(path);
        }
        config.apply_args(args)?;
        Ok(config)
    }

    /// Defaults overridden by command line arguments only
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        config.apply_args(args)?;
        Ok(config)
    }

    fn apply_args<I>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" | "-d" => self.data_dir = PathBuf::from(value_for(&arg, args.next())?),
                "--out" | "-o" => self.output = PathBuf::from(value_for(&arg, args.next())?),
                "--source" | "-s" => {
                    let value = value_for(&arg, args.next())?;
                    self.source = value
                        .parse()
                        .map_err(|_| Error::Config(format!("invalid source vertex: {}", value)))?;
                }
                "--sequential" => self.parallel = false,
                other => return Err(Error::Config(format!("unknown argument: {}", other))),
            }
        }
        Ok(())
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig { source: self.source }
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::Config(format!("{} expects a value", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_all_flags() {
        let config = BatchConfig::from_args(args(&[
            "--data", "graphs", "-o", "out.csv", "--source", "4", "--sequential",
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("graphs"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.source, 4);
        assert!(!config.parallel);
        assert_eq!(config.pipeline_config().source, 4);
    }

    #[test]
    fn defaults_without_args() {
        let config = BatchConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output, PathBuf::from("results.csv"));
        assert!(config.parallel);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(BatchConfig::from_args(args(&["--source", "x"])), Err(Error::Config(_))));
        assert!(matches!(BatchConfig::from_args(args(&["--out"])), Err(Error::Config(_))));
        assert!(matches!(BatchConfig::from_args(args(&["--verbose"])), Err(Error::Config(_))));
    }
}
