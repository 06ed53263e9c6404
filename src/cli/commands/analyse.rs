use super::{persist_results, print_summary, review_output};
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Analyse a captured Substreams output file
#[derive(Args)]
pub struct AnalyseCommand {
    /// Path to the captured output text
    #[arg(short, long)]
    pub input: PathBuf,

    /// Directory for the stable contract dump (default from config)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Directory for timestamped results (default from config)
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Skip the per-day aggregation
    #[arg(long)]
    pub no_daily_stats: bool,
}

impl AnalyseCommand {
    pub fn run(&self) -> AppResult<()> {
        let mut config = AppConfig::load().unwrap_or_else(|_| AppConfig::get_defaults());
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir = dir.clone();
        }
        if let Some(dir) = &self.results_dir {
            config.paths.results_dir = dir.clone();
        }
        if self.no_daily_stats {
            config.analysis.include_daily_stats = false;
        }

        info!(input = %self.input.display(), "analysing captured output");
        let text = std::fs::read_to_string(&self.input)?;

        let (records, report) = review_output(&text, &config)?;
        persist_results(&records, &report, &config)?;
        print_summary(&report);
        Ok(())
    }
}
