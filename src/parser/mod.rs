//! Substreams output parsing
//!
//! Converts raw CLI output text into ordered untyped records. Strict
//! JSON decoding is the happy path; a line-oriented tolerant scanner
//! recovers records when the output is not valid JSON.

mod output_parser;

pub use output_parser::OutputParser;
