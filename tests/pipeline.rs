//! End-to-end pipeline tests
//!
//! Exercise the full path the CLI takes: malformed Substreams output
//! text through parsing, normalization, analysis, and persistence.

use contract_reviewer::analysis::AnalyticsEngine;
use contract_reviewer::config::{AnalysisOptions, AppConfig};
use contract_reviewer::errors::AppError;
use contract_reviewer::normalizer::RecordNormalizer;
use contract_reviewer::parser::OutputParser;
use contract_reviewer::persistence::ResultsWriter;
use contract_reviewer::types::{AnalysisReport, ContractRecord};
use tempfile::tempdir;

/// Realistic malformed output: log noise around a quasi-JSON array
const CAPTURED_OUTPUT: &str = r#"
Connected to mainnet.eth.streamingfast.io:443
----------- BLOCK #22,000,000 -----------
"contracts": [
{
"address": "0xabc",
"totalCalls": "120",
"uniqueWallets": "40",
"firstInteractionBlock": "100",
"lastInteractionBlock": "200",
"interactingWallets": ["0x1","0x2"]
},
{
"address": "0xdef",
"totalCalls": "900",
"uniqueWallets": "30",
"firstInteractionBlock": "150",
"lastInteractionBlock": "9000",
"isNewContract": "true",
"interactingWallets": ["0x3"]
}
]
all done
"#;

fn analyse(text: &str) -> (Vec<ContractRecord>, AnalysisReport) {
    let options = AnalysisOptions::default();
    let raw = OutputParser::parse(text).unwrap();
    let records = RecordNormalizer::new(options).normalize_all(&raw).unwrap();
    let report = AnalyticsEngine::new(options).analyze(&records).unwrap();
    (records, report)
}

#[test]
fn malformed_output_flows_through_to_a_report() {
    let (records, report) = analyse(CAPTURED_OUTPUT);

    assert_eq!(records.len(), 2);
    assert_eq!(report.total_contracts_analyzed, 2);

    // 0xdef dominates by calls and intensity, 0xabc by wallet count
    assert_eq!(report.most_active_contracts[0].address, "0xdef");
    assert_eq!(report.most_popular_contracts[0].address, "0xabc");
    assert_eq!(report.most_intensive_contracts[0].address, "0xdef");
    // 0xdef was first seen at a later block
    assert_eq!(report.newest_contracts[0].address, "0xdef");

    assert_eq!(report.new_vs_returning_contracts.new_contracts, 1);
    assert_eq!(report.new_vs_returning_contracts.returning_contracts, 1);

    // 0xabc lands on day 0 (200 * 12 s), 0xdef on day 1 (9000 * 12 s)
    assert_eq!(report.daily_stats.len(), 2);
    assert_eq!(report.daily_stats[0].day_timestamp, 0);
    assert_eq!(report.daily_stats[0].total_calls, 120);
    assert_eq!(report.daily_stats[0].unique_wallets, 40);
    assert_eq!(report.daily_stats[1].day_timestamp, 86_400);
    assert_eq!(report.daily_stats[1].new_contracts, 1);
}

#[test]
fn single_record_example_matches_expected_shape() {
    let text = r#"
"contracts": [
{
"address": "0xabc",
"totalCalls": "120",
"uniqueWallets": "40",
"firstInteractionBlock": "100",
"lastInteractionBlock": "200",
"interactingWallets": ["0x1","0x2"]
}
]
"#;
    let (records, report) = analyse(text);

    let record = &records[0];
    assert_eq!(record.address, "0xabc");
    assert_eq!(record.total_calls, 120);
    assert_eq!(record.unique_wallets, 40);
    assert_eq!(record.first_interaction_block, 100);
    assert_eq!(record.last_interaction_block, 200);
    assert_eq!(record.interacting_wallets, vec!["0x1", "0x2"]);
    assert!(!record.is_new_contract);
    assert_eq!(record.day_timestamp, 0);

    assert_eq!(report.most_active_contracts.len(), 1);
    assert_eq!(report.most_popular_contracts.len(), 1);
    assert_eq!(report.most_intensive_contracts.len(), 1);
    assert_eq!(report.newest_contracts.len(), 1);

    let day = &report.daily_stats[0];
    assert_eq!(day.active_contracts, 1);
    assert_eq!(day.total_calls, 120);
    assert_eq!(day.unique_wallets, 40);
}

#[test]
fn strict_json_output_takes_the_happy_path() {
    let text = r#"{"contracts": [
        {"address": "0xabc", "totalCalls": 120, "uniqueWallets": 40,
         "firstInteractionBlock": 100, "lastInteractionBlock": 200,
         "interactingWallets": ["0x1", "0x2"]}
    ]}"#;

    let (records, report) = analyse(text);
    assert_eq!(records[0].total_calls, 120);
    assert!((report.most_intensive_contracts[0].avg_calls_per_wallet - 3.0).abs() < 1e-9);
}

#[test]
fn unrecoverable_output_fails_instead_of_fabricating() {
    let result = OutputParser::parse("substreams run failed: connection refused");
    assert!(matches!(result, Err(AppError::DataFormat(_))));
}

#[test]
fn bad_numeric_field_surfaces_from_the_pipeline() {
    let text = "\"contracts\": [\n{\n\"totalCalls\": \"not-a-number\"\n}\n]";
    let raw = OutputParser::parse(text).unwrap();
    let result = RecordNormalizer::new(AnalysisOptions::default()).normalize_all(&raw);
    assert!(matches!(result, Err(AppError::FieldType { .. })));
}

#[test]
fn persisted_dump_round_trips_with_fresh_averages() {
    let dir = tempdir().unwrap();
    let mut config = AppConfig::get_defaults();
    config.paths.output_dir = dir.path().join("output");
    config.paths.results_dir = dir.path().join("results");

    let (mut records, report) = analyse(CAPTURED_OUTPUT);
    AnalyticsEngine::recompute_averages(&mut records);

    let writer = ResultsWriter::new(&config.paths.output_dir, &config.paths.results_dir);
    writer.write_contracts(&records).unwrap();
    writer.write_analysis(&report).unwrap();

    let dump = std::fs::read_to_string(config.paths.output_dir.join("contracts.json")).unwrap();
    let reloaded: Vec<ContractRecord> = serde_json::from_str(&dump).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!((reloaded[0].avg_calls_per_wallet - 3.0).abs() < 1e-9);
    assert!((reloaded[1].avg_calls_per_wallet - 30.0).abs() < 1e-9);

    let latest = std::fs::read_to_string(config.paths.results_dir.join("latest_analysis.json")).unwrap();
    let reloaded_report: AnalysisReport = serde_json::from_str(&latest).unwrap();
    assert_eq!(reloaded_report.total_contracts_analyzed, 2);
}
