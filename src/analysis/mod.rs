//! Contract interaction analytics
//!
//! Rankings, daily aggregation, and report assembly over normalized
//! contract records.

mod daily_stats;
mod engine;
mod rankings;

pub use daily_stats::aggregate_daily_stats;
pub use engine::AnalyticsEngine;
pub use rankings::rank_by;

/// Ranking slice length used throughout the report
pub const TOP_N: usize = 10;
