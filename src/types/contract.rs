//! Normalized contract interaction records

use serde::{Deserialize, Serialize};

/// One smart contract's interaction statistics over the analysed block range
///
/// Constructed once by the record normalizer and treated as read-only by
/// the analytics engine, except for `avg_calls_per_wallet` which the
/// engine always recomputes immediately before ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractRecord {
    /// Contract address, case-preserved, not checksum-validated
    pub address: String,
    pub first_interaction_block: u64,
    pub last_interaction_block: u64,
    pub total_calls: u64,
    pub unique_wallets: u64,
    /// Sample of interacting wallet addresses, not necessarily exhaustive
    pub interacting_wallets: Vec<String>,
    /// Derived: total_calls / max(1, unique_wallets). Never trusted from
    /// input; recomputed at analysis time.
    #[serde(default)]
    pub avg_calls_per_wallet: f64,
    #[serde(default)]
    pub is_new_contract: bool,
    /// UTC day bucket (multiple of 86400 seconds)
    pub day_timestamp: i64,
}
