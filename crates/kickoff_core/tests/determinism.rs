//! Same seed, same bytes.

mod common;

use kickoff_core::engine::config::EngineConfig;
use kickoff_core::{simulate, simulate_batch, simulate_match_json, MatchRequest};
use proptest::prelude::*;
use sha2::{Digest, Sha256};

use common::*;

fn digest(json: &str) -> Vec<u8> {
    Sha256::digest(json.as_bytes()).to_vec()
}

fn request(seed: u64) -> String {
    let request = MatchRequest { schema_version: 1, seed, setup: equal_setup(), config: None };
    serde_json::to_string(&request).unwrap()
}

#[test]
fn test_json_output_is_byte_identical() {
    let a = simulate_match_json(&request(42)).unwrap();
    let b = simulate_match_json(&request(42)).unwrap();
    assert_eq!(digest(&a), digest(&b));
}

#[test]
fn test_different_seeds_diverge() {
    let a = simulate_match_json(&request(1)).unwrap();
    let b = simulate_match_json(&request(2)).unwrap();
    assert_ne!(digest(&a), digest(&b));
}

#[test]
fn test_batch_is_order_stable() {
    let config = EngineConfig::default();
    let first = simulate_batch(&equal_setup(), 500, 8, &config).unwrap();
    let second = simulate_batch(&equal_setup(), 500, 8, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.iter().map(|r| r.seed).collect::<Vec<_>>(), (500..508).collect::<Vec<_>>());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn prop_replay_matches(seed in any::<u64>()) {
        let a = simulate(&equal_setup(), seed, EngineConfig::default()).unwrap();
        let b = simulate(&equal_setup(), seed, EngineConfig::default()).unwrap();
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn prop_ratings_within_display_bounds(seed in any::<u64>()) {
        let result = simulate(&equal_setup(), seed, EngineConfig::arcade()).unwrap();
        prop_assert!(result.ratings.values().all(|r| (1.0..=10.0).contains(r)));
    }
}
