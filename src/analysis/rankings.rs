//! Top-N contract rankings

use crate::types::ContractRecord;
use std::cmp::Ordering;

/// Rank records descending by a key, returning the top `n`
///
/// The sort is stable: records with equal keys keep their original
/// relative order. Returns `min(n, records.len())` elements.
pub fn rank_by<K, F>(records: &[ContractRecord], n: usize, key: F) -> Vec<ContractRecord>
where
    F: Fn(&ContractRecord) -> K,
    K: PartialOrd,
{
    let mut ranked: Vec<ContractRecord> = records.to_vec();
    ranked.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, total_calls: u64) -> ContractRecord {
        ContractRecord {
            address: address.to_string(),
            first_interaction_block: 0,
            last_interaction_block: 0,
            total_calls,
            unique_wallets: 0,
            interacting_wallets: Vec::new(),
            avg_calls_per_wallet: 0.0,
            is_new_contract: false,
            day_timestamp: 0,
        }
    }

    #[test]
    fn test_descending_order() {
        let records = vec![record("a", 5), record("b", 20), record("c", 10)];
        let ranked = rank_by(&records, 10, |r| r.total_calls);
        let order: Vec<&str> = ranked.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_returns_min_of_n_and_len() {
        let records = vec![record("a", 1), record("b", 2), record("c", 3)];
        assert_eq!(rank_by(&records, 2, |r| r.total_calls).len(), 2);
        assert_eq!(rank_by(&records, 10, |r| r.total_calls).len(), 3);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let records = vec![
            record("first", 7),
            record("second", 7),
            record("third", 7),
            record("top", 9),
        ];
        let ranked = rank_by(&records, 10, |r| r.total_calls);
        let order: Vec<&str> = ranked.iter().map(|r| r.address.as_str()).collect();
        assert_eq!(order, vec!["top", "first", "second", "third"]);
    }

    #[test]
    fn test_float_keys() {
        let mut a = record("a", 0);
        a.avg_calls_per_wallet = 1.5;
        let mut b = record("b", 0);
        b.avg_calls_per_wallet = 3.0;

        let ranked = rank_by(&[a, b], 10, |r| r.avg_calls_per_wallet);
        assert_eq!(ranked[0].address, "b");
    }
}
