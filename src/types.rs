//! Substreams Contract Reviewer - Type System
//!
//! - `raw`: Untyped records recovered by the output parser (RawRecord, RawValue)
//! - `contract`: Normalized contract interaction records (ContractRecord)
//! - `report`: Analysis report types (AnalysisReport, DailyStats, NewVsReturning)

mod contract;
mod raw;
mod report;

pub use contract::*;
pub use raw::*;
pub use report::*;
