//! Daily bucket aggregation
//!
//! Groups contract records into UTC day buckets keyed by
//! `day_timestamp` and accumulates per-day totals.

use crate::types::{ContractRecord, DailyStats};
use std::collections::HashMap;

/// Aggregate records into daily buckets, ascending by day
///
/// `unique_wallets` is the sum of each contract's own count; a wallet
/// active on several contracts the same day is counted once per
/// contract (see `DailyStats` docs).
pub fn aggregate_daily_stats(records: &[ContractRecord]) -> Vec<DailyStats> {
    let mut buckets: HashMap<i64, DailyStats> = HashMap::new();

    for record in records {
        let bucket = buckets
            .entry(record.day_timestamp)
            .or_insert_with(|| DailyStats {
                day_timestamp: record.day_timestamp,
                active_contracts: 0,
                new_contracts: 0,
                total_calls: 0,
                unique_wallets: 0,
            });

        bucket.active_contracts += 1;
        if record.is_new_contract {
            bucket.new_contracts += 1;
        }
        bucket.total_calls += record.total_calls;
        bucket.unique_wallets += record.unique_wallets;
    }

    let mut daily: Vec<DailyStats> = buckets.into_values().collect();
    daily.sort_by_key(|stats| stats.day_timestamp);
    daily
}
