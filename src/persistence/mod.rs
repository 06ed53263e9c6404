//! Result persistence
//!
//! Writes the normalized contract dump and analysis reports as JSON:
//! a stable `contracts.json` plus timestamped copies, and a
//! `latest_analysis.json` that always points at the newest report.

use crate::errors::AppResult;
use crate::types::{AnalysisReport, ContractRecord};
use chrono::Utc;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// JSON writer for contract dumps and analysis reports
pub struct ResultsWriter {
    output_dir: PathBuf,
    results_dir: PathBuf,
}

impl ResultsWriter {
    pub fn new(output_dir: impl Into<PathBuf>, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            results_dir: results_dir.into(),
        }
    }

    /// Write `contracts.json` and a timestamped copy under the results dir
    ///
    /// Returns the path of the timestamped copy.
    pub fn write_contracts(&self, records: &[ContractRecord]) -> AppResult<PathBuf> {
        let stable = self.output_dir.join("contracts.json");
        write_json(&stable, &records)?;
        info!(path = %stable.display(), count = records.len(), "contract dump written");

        let timestamped = self
            .results_dir
            .join(format!("contracts_{}.json", file_timestamp()));
        write_json(&timestamped, &records)?;
        Ok(timestamped)
    }

    /// Write a timestamped analysis file plus `latest_analysis.json`
    ///
    /// Returns the path of the timestamped copy.
    pub fn write_analysis(&self, report: &AnalysisReport) -> AppResult<PathBuf> {
        let timestamped = self
            .results_dir
            .join(format!("analysis_{}.json", file_timestamp()));
        write_json(&timestamped, report)?;

        let latest = self.results_dir.join("latest_analysis.json");
        write_json(&latest, report)?;
        info!(path = %timestamped.display(), "analysis report written");
        Ok(timestamped)
    }
}

/// Filename-safe UTC timestamp (YYYYmmdd_HHMMSS)
fn file_timestamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Serialize to pretty JSON, creating parent directories as needed
fn write_json<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
