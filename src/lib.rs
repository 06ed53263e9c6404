//! Substreams Contract Reviewer
//!

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod normalizer;
pub mod parser;
pub mod persistence;
pub mod runner;
pub mod types;
pub mod utils;
