//! Substreams CLI invocation
//!
//! Runs the upstream `substreams` binary and captures its raw output
//! text for the parser. Failures propagate unchanged as upstream
//! errors; there is no retry and no synthetic-data fallback.

mod substreams;

pub use substreams::SubstreamsRunner;
