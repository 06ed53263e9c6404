pub mod analyse;
pub mod run;

use crate::analysis::AnalyticsEngine;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::normalizer::RecordNormalizer;
use crate::parser::OutputParser;
use crate::persistence::ResultsWriter;
use crate::types::{AnalysisReport, ContractRecord};
use crate::utils::time::timestamp_to_iso;

/// Run the parse → normalize → analyse pipeline over raw output text
pub fn review_output(text: &str, config: &AppConfig) -> AppResult<(Vec<ContractRecord>, AnalysisReport)> {
    let raw_records = OutputParser::parse(text)?;
    let mut records = RecordNormalizer::new(config.analysis).normalize_all(&raw_records)?;

    let report = AnalyticsEngine::new(config.analysis).analyze(&records)?;
    // The persisted dump carries fresh averages too
    AnalyticsEngine::recompute_averages(&mut records);

    Ok((records, report))
}

/// Persist records and report, printing the result paths
pub fn persist_results(
    records: &[ContractRecord],
    report: &AnalysisReport,
    config: &AppConfig,
) -> AppResult<()> {
    let writer = ResultsWriter::new(&config.paths.output_dir, &config.paths.results_dir);
    let contracts_path = writer.write_contracts(records)?;
    let analysis_path = writer.write_analysis(report)?;

    println!("Contract data written to: {}", contracts_path.display());
    println!("Analysis written to: {}", analysis_path.display());
    Ok(())
}

/// Print the headline numbers the way the report consumers expect
pub fn print_summary(report: &AnalysisReport) {
    println!(
        "Analysis complete! Found {} contracts.",
        report.total_contracts_analyzed
    );
    if let Some(top) = report.most_active_contracts.first() {
        println!(
            "Most active contract: {} with {} calls",
            top.address, top.total_calls
        );
    }
    if let Some(top) = report.most_popular_contracts.first() {
        println!(
            "Most popular contract: {} with {} unique wallets",
            top.address, top.unique_wallets
        );
    }
    if let Some((from, to)) = daily_span(report) {
        println!("Daily activity from {} to {}", from, to);
    }
}

/// First and last day of the report's daily stats as ISO dates
fn daily_span(report: &AnalysisReport) -> Option<(String, String)> {
    let first = report.daily_stats.first()?;
    let last = report.daily_stats.last()?;
    Some((
        timestamp_to_iso(first.day_timestamp),
        timestamp_to_iso(last.day_timestamp),
    ))
}
