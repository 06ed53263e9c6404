//! Record normalization
//!
//! Turns untyped parser records into typed `ContractRecord`s: renames
//! the external camelCase field names, coerces numerics and booleans,
//! and derives the day bucket when the input does not carry one.

use crate::config::AnalysisOptions;
use crate::errors::{AppError, AppResult};
use crate::types::{ContractRecord, RawRecord, RawValue};
use crate::utils::time::{block_to_timestamp, day_bucket};
use tracing::warn;

/// Normalizer for untyped contract records
pub struct RecordNormalizer {
    options: AnalysisOptions,
}

impl RecordNormalizer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    /// Normalize a batch of records, preserving encounter order
    pub fn normalize_all(&self, raw_records: &[RawRecord]) -> AppResult<Vec<ContractRecord>> {
        raw_records.iter().map(|raw| self.normalize(raw)).collect()
    }

    /// Normalize one untyped record into a `ContractRecord`
    ///
    /// Coercion order matters: numeric fields first, then the
    /// new-contract flag, then the day bucket (which needs the already
    /// coerced `last_interaction_block`). Unrecognized keys are dropped.
    pub fn normalize(&self, raw: &RawRecord) -> AppResult<ContractRecord> {
        let address = scalar_field(raw, "address").unwrap_or_default().to_string();

        let first_interaction_block = numeric_field(raw, "firstInteractionBlock")?;
        let last_interaction_block = numeric_field(raw, "lastInteractionBlock")?;
        let total_calls = numeric_field(raw, "totalCalls")?;
        let unique_wallets = numeric_field(raw, "uniqueWallets")?;

        if last_interaction_block < first_interaction_block {
            warn!(
                address = %address,
                first_interaction_block,
                last_interaction_block,
                "contract has last interaction before first"
            );
        }

        let interacting_wallets = match raw.get("interactingWallets") {
            Some(RawValue::List(items)) => items.clone(),
            Some(RawValue::Scalar(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        };

        let is_new_contract = if self.options.allow_new_contract_field {
            boolean_field(raw, "isNewContract")
        } else {
            false
        };

        let day_timestamp = match optional_numeric_field(raw, "dayTimestamp") {
            Some(ts) => ts,
            None => day_bucket(block_to_timestamp(last_interaction_block)),
        };

        Ok(ContractRecord {
            address,
            first_interaction_block,
            last_interaction_block,
            total_calls,
            unique_wallets,
            interacting_wallets,
            // Always recomputed by the analytics engine before ranking
            avg_calls_per_wallet: 0.0,
            is_new_contract,
            day_timestamp,
        })
    }
}

fn scalar_field<'a>(raw: &'a RawRecord, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(RawValue::as_scalar)
}

/// Required numeric field: absent defaults to 0, present-but-unparseable
/// is a `FieldType` error naming the field and value
fn numeric_field(raw: &RawRecord, key: &str) -> AppResult<u64> {
    match scalar_field(raw, key) {
        None => Ok(0),
        Some(value) => value.parse::<u64>().map_err(|_| AppError::FieldType {
            field: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Optional numeric field: unparseable values fall back to derivation
fn optional_numeric_field(raw: &RawRecord, key: &str) -> Option<i64> {
    scalar_field(raw, key).and_then(|value| value.parse::<i64>().ok())
}

/// Case-insensitive true/false; absent or unrecognized is false
fn boolean_field(raw: &RawRecord, key: &str) -> bool {
    scalar_field(raw, key)
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
