//! Analysis report types

use super::ContractRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregated statistics for one UTC day bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Day bucket start (Unix seconds, multiple of 86400)
    pub day_timestamp: i64,
    /// Number of contracts with activity in this bucket
    pub active_contracts: usize,
    /// Number of those flagged as new contracts
    pub new_contracts: usize,
    /// Sum of total_calls over the bucket's contracts
    pub total_calls: u64,
    /// Sum of each contract's own unique_wallets count. A wallet that
    /// interacts with several contracts on the same day is counted once
    /// per contract, so this is an upper bound on distinct wallets.
    pub unique_wallets: u64,
}

/// New vs returning contract counts across the whole dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewVsReturning {
    pub new_contracts: usize,
    pub returning_contracts: usize,
}

/// The full analysis report, produced once per `analyze` call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Top 10 by total_calls
    pub most_active_contracts: Vec<ContractRecord>,
    /// Top 10 by unique_wallets
    pub most_popular_contracts: Vec<ContractRecord>,
    /// Top 10 by avg_calls_per_wallet
    pub most_intensive_contracts: Vec<ContractRecord>,
    /// Top 10 by first_interaction_block (most recent first seen)
    pub newest_contracts: Vec<ContractRecord>,
    /// Per-day aggregates, ascending by day_timestamp. Empty when daily
    /// stats are disabled in the analysis options.
    pub daily_stats: Vec<DailyStats>,
    pub new_vs_returning_contracts: NewVsReturning,
    pub total_contracts_analyzed: usize,
    pub analysis_timestamp: DateTime<Utc>,
}
