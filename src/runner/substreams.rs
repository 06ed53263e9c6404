//! Substreams CLI runner

use crate::config::SubstreamsConfig;
use crate::errors::{UpstreamError, UpstreamResult};
use crate::utils::time::{SECONDS_PER_BLOCK, SECONDS_PER_DAY};
use std::io::ErrorKind;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

/// Runner for the upstream `substreams` CLI
///
/// The API token is taken from the config passed at construction and
/// injected into the child's environment. The runner never reads the
/// process environment itself.
pub struct SubstreamsRunner {
    config: SubstreamsConfig,
}

impl SubstreamsRunner {
    /// Create a runner, erroring immediately when no API token is set
    pub fn new(config: SubstreamsConfig) -> UpstreamResult<Self> {
        if config.api_token.is_empty() {
            return Err(UpstreamError::MissingToken);
        }
        Ok(Self { config })
    }

    /// Estimate how many blocks cover a day span (~7200 blocks per day)
    pub fn estimate_blocks_for_days(days: u64) -> u64 {
        days * SECONDS_PER_DAY as u64 / SECONDS_PER_BLOCK as u64
    }

    /// Run the CLI over `block_count` blocks and return its stdout text
    ///
    /// The block count is capped at the configured `max_blocks`; a full
    /// multi-month span would otherwise need incremental batch runs.
    pub async fn run(&self, start_block: u64, block_count: u64) -> UpstreamResult<String> {
        let block_count = if block_count > self.config.max_blocks {
            warn!(
                requested = block_count,
                cap = self.config.max_blocks,
                "block count capped for this run"
            );
            self.config.max_blocks
        } else {
            block_count
        };

        info!(
            endpoint = %self.config.endpoint,
            module = %self.config.module,
            start_block,
            block_count,
            "running substreams"
        );

        let child = Command::new("substreams")
            .arg("run")
            .arg("-e")
            .arg(&self.config.endpoint)
            .arg(&self.config.manifest)
            .arg(&self.config.module)
            .arg("--start-block")
            .arg(start_block.to_string())
            .arg("--stop-block")
            .arg(format!("+{}", block_count))
            .env("SUBSTREAMS_API_TOKEN", &self.config.api_token)
            .kill_on_drop(true)
            .output();

        let output = timeout(Duration::from_secs(self.config.timeout_seconds), child)
            .await
            .map_err(|_| UpstreamError::Timeout {
                timeout_seconds: self.config.timeout_seconds,
            })?
            .map_err(|err| match err.kind() {
                ErrorKind::NotFound => UpstreamError::CliNotFound(err.to_string()),
                _ => UpstreamError::Spawn(err.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(UpstreamError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
                stderr: stderr.chars().take(2000).collect(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(bytes = stdout.len(), "substreams run finished");
        Ok(stdout)
    }
}
