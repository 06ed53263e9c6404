//! Tolerant parser for Substreams CLI output
//!
//! The CLI sometimes emits output that is not valid JSON: log lines
//! interleaved with data, or a `contracts` array printed without an
//! enclosing document. Strict decoding is attempted first; on failure a
//! line-oriented state machine recovers whatever flat records it can.
//!
//! The tolerant grammar is deliberately shallow: objects are flat, array
//! values hold scalars only. A nested structure inside a value is passed
//! through as an opaque string rather than recovered.

use crate::errors::{AppError, AppResult};
use crate::types::{RawRecord, RawValue};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

lazy_static! {
    /// `"key": value` lines inside an object, optional trailing comma
    static ref KEY_VALUE_RE: Regex =
        Regex::new(r#"^"?([^":]+?)"?\s*:\s*(.+?),?$"#).expect("key/value regex is valid");
}

/// Marker line that opens the contracts collection
const ARRAY_MARKER: &str = "\"contracts\": [";

/// Scanner states for the tolerant pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the contracts array marker (initial and terminal)
    Scanning,
    /// Inside the contracts array, between objects
    InArray,
    /// Inside one contract object, accumulating fields
    InObject,
}

/// Parser for Substreams CLI output text
pub struct OutputParser;

impl OutputParser {
    /// Parse output text into untyped records
    ///
    /// Tries a strict JSON decode of the whole text first; when that
    /// fails, falls back to the tolerant line scan. Errors with
    /// `AppError::DataFormat` when neither path recovers any record.
    pub fn parse(text: &str) -> AppResult<Vec<RawRecord>> {
        match serde_json::from_str::<Value>(text) {
            Ok(document) => {
                if let Some(contracts) = document.get("contracts").and_then(Value::as_array) {
                    debug!("Strict decode succeeded: {} contracts", contracts.len());
                    return Ok(contracts.iter().map(Self::value_to_record).collect());
                }
                // Valid JSON but not the shape we expect; the tolerant
                // scan will not do better on well-formed input.
                Err(AppError::DataFormat(
                    "output is valid JSON but has no 'contracts' collection".to_string(),
                ))
            }
            Err(decode_err) => {
                debug!("Strict decode failed ({}), trying tolerant scan", decode_err);
                let records = Self::tolerant_scan(text);
                if records.is_empty() {
                    warn!("Tolerant scan recovered no records");
                    return Err(AppError::DataFormat(format!(
                        "no records recovered: strict decode failed ({}) and tolerant scan found nothing",
                        decode_err
                    )));
                }
                debug!("Tolerant scan recovered {} records", records.len());
                Ok(records)
            }
        }
    }

    /// Line-oriented recovery pass over quasi-JSON output
    fn tolerant_scan(text: &str) -> Vec<RawRecord> {
        let mut records = Vec::new();
        let mut current = RawRecord::new();
        let mut state = ScanState::Scanning;

        for raw_line in text.lines() {
            let line = raw_line.trim();

            match state {
                ScanState::Scanning => {
                    if line.contains(ARRAY_MARKER) {
                        state = ScanState::InArray;
                    }
                }
                ScanState::InArray => match line {
                    "{" => {
                        current = RawRecord::new();
                        state = ScanState::InObject;
                    }
                    "]" => {
                        if !current.is_empty() {
                            records.push(std::mem::take(&mut current));
                        }
                        state = ScanState::Scanning;
                    }
                    _ => {}
                },
                ScanState::InObject => match line {
                    // An array element keeps its separator comma on the
                    // closing-brace line
                    "}" | "}," => {
                        records.push(std::mem::take(&mut current));
                        state = ScanState::InArray;
                    }
                    "]" => {
                        // Truncated output: the object never closed.
                        // Flush what accumulated and terminate.
                        if !current.is_empty() {
                            records.push(std::mem::take(&mut current));
                        }
                        state = ScanState::Scanning;
                    }
                    _ => {
                        if let Some(caps) = KEY_VALUE_RE.captures(line) {
                            let key = caps[1].trim().to_string();
                            let value = Self::parse_value(caps[2].trim());
                            current.insert(key, value);
                        }
                    }
                },
            }
        }

        // A record is only complete once a closing token is seen; an
        // object still open at end of input is dropped.
        records
    }

    /// Parse a value token: flat bracketed list or quote-stripped scalar
    fn parse_value(raw: &str) -> RawValue {
        if raw.starts_with('[') && raw.ends_with(']') {
            let inner = &raw[1..raw.len() - 1];
            let items: Vec<String> = inner
                .split(',')
                .map(|token| strip_quotes(token.trim()).to_string())
                .filter(|token| !token.is_empty())
                .collect();
            RawValue::List(items)
        } else {
            RawValue::Scalar(strip_quotes(raw).to_string())
        }
    }

    /// Convert a strict-path JSON value into an untyped record
    ///
    /// Numbers and booleans are rendered to their string form so both
    /// parse paths feed the normalizer through one coercion path.
    fn value_to_record(value: &Value) -> RawRecord {
        let mut record = RawRecord::new();
        if let Some(object) = value.as_object() {
            for (key, field) in object {
                record.insert(key.clone(), Self::json_to_raw(field));
            }
        }
        record
    }

    fn json_to_raw(value: &Value) -> RawValue {
        match value {
            Value::Array(items) => RawValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            Value::String(s) => RawValue::Scalar(s.clone()),
            other => RawValue::Scalar(other.to_string()),
        }
    }
}

/// Strip one pair of surrounding double quotes
fn strip_quotes(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}
