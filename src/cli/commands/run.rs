use super::{persist_results, print_summary, review_output};
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::runner::SubstreamsRunner;
use clap::Args;
use tracing::info;

/// Run the Substreams CLI and analyse its output
#[derive(Args)]
pub struct RunCommand {
    /// First block to process (default from config)
    #[arg(long)]
    pub start_block: Option<u64>,

    /// Number of blocks to process
    #[arg(long, conflicts_with = "days")]
    pub blocks: Option<u64>,

    /// Day span to cover (~7200 blocks per day, capped by config)
    #[arg(long)]
    pub days: Option<u64>,
}

impl RunCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load().unwrap_or_else(|_| AppConfig::get_defaults());

        let start_block = self.start_block.unwrap_or(config.substreams.start_block);
        let block_count = match (self.blocks, self.days) {
            (Some(blocks), _) => blocks,
            (None, Some(days)) => {
                let estimate = SubstreamsRunner::estimate_blocks_for_days(days);
                info!(days, estimate, "covering day span");
                estimate
            }
            (None, None) => 50,
        };

        let runner = SubstreamsRunner::new(config.substreams.clone())?;
        let text = runner.run(start_block, block_count).await?;

        let (records, report) = review_output(&text, &config)?;
        persist_results(&records, &report, &config)?;
        print_summary(&report);
        Ok(())
    }
}
