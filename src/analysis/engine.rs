//! Analytics engine
//!
//! Consumes normalized contract records and assembles the full analysis
//! report: four top-10 rankings, daily buckets, and new-vs-returning
//! counts.

use super::{aggregate_daily_stats, rank_by, TOP_N};
use crate::config::AnalysisOptions;
use crate::errors::{AppError, AppResult};
use crate::types::{AnalysisReport, ContractRecord, NewVsReturning};
use chrono::Utc;
use tracing::info;

/// Analytics over normalized contract records
pub struct AnalyticsEngine {
    options: AnalysisOptions,
}

impl AnalyticsEngine {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Analyse a record set into an `AnalysisReport`
    ///
    /// `avg_calls_per_wallet` is recomputed for every record up front, so
    /// a stale or tampered value in the input never reaches a ranking.
    /// Errors with `AppError::EmptyDataset` before any aggregation when
    /// `records` is empty.
    pub fn analyze(&self, records: &[ContractRecord]) -> AppResult<AnalysisReport> {
        if records.is_empty() {
            return Err(AppError::EmptyDataset);
        }

        let mut records: Vec<ContractRecord> = records.to_vec();
        for record in &mut records {
            record.avg_calls_per_wallet =
                record.total_calls as f64 / record.unique_wallets.max(1) as f64;
        }

        let most_active_contracts = rank_by(&records, TOP_N, |r| r.total_calls);
        let most_popular_contracts = rank_by(&records, TOP_N, |r| r.unique_wallets);
        let most_intensive_contracts = rank_by(&records, TOP_N, |r| r.avg_calls_per_wallet);
        let newest_contracts = rank_by(&records, TOP_N, |r| r.first_interaction_block);

        let daily_stats = if self.options.include_daily_stats {
            aggregate_daily_stats(&records)
        } else {
            Vec::new()
        };

        let new_contracts = records.iter().filter(|r| r.is_new_contract).count();
        let new_vs_returning_contracts = NewVsReturning {
            new_contracts,
            returning_contracts: records.len() - new_contracts,
        };

        info!(
            total = records.len(),
            new = new_contracts,
            days = daily_stats.len(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            most_active_contracts,
            most_popular_contracts,
            most_intensive_contracts,
            newest_contracts,
            daily_stats,
            new_vs_returning_contracts,
            total_contracts_analyzed: records.len(),
            analysis_timestamp: Utc::now(),
        })
    }

    /// Recompute derived averages on a record set in place
    ///
    /// Exposed for callers that persist normalized records alongside the
    /// report and want the dump to carry fresh averages too.
    pub fn recompute_averages(records: &mut [ContractRecord]) {
        for record in records {
            record.avg_calls_per_wallet =
                record.total_calls as f64 / record.unique_wallets.max(1) as f64;
        }
    }
}
