//! Time utilities for daily bucket analysis
//!
//! Shared helpers for converting block heights and timestamps into
//! UTC day buckets.

use chrono::{TimeZone, Utc};

/// Seconds in a day (24 × 60 × 60 = 86400)
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Approximate Ethereum block time in seconds
pub const SECONDS_PER_BLOCK: i64 = 12;

/// Floor a Unix timestamp to the start of its UTC day
///
/// # Examples
/// ```
/// use contract_reviewer::utils::time::day_bucket;
/// assert_eq!(day_bucket(0), 0);
/// assert_eq!(day_bucket(86399), 0);
/// assert_eq!(day_bucket(90000), 86400);
/// ```
pub fn day_bucket(timestamp: i64) -> i64 {
    (timestamp / SECONDS_PER_DAY) * SECONDS_PER_DAY
}

/// Approximate the Unix timestamp of a block height (12 s per block)
pub fn block_to_timestamp(block: u64) -> i64 {
    block as i64 * SECONDS_PER_BLOCK
}

/// Convert Unix timestamp to ISO 8601 date string (YYYY-MM-DD)
///
/// Returns "1970-01-01" for invalid timestamps.
///
/// # Examples
/// ```
/// use contract_reviewer::utils::time::timestamp_to_iso;
/// assert_eq!(timestamp_to_iso(0), "1970-01-01");
/// assert_eq!(timestamp_to_iso(1704067200), "2024-01-01");
/// ```
pub fn timestamp_to_iso(timestamp: i64) -> String {
    Utc.timestamp_opt(timestamp, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "1970-01-01".to_string())
}
