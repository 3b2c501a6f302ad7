//! JSON boundary.
//!
//! Request: `{ "schema_version": 1, "seed": 42, "setup": {...}, "config": {...}? }`.
//! Response: the match result plus per-side totals. Validation errors come
//! back as `MatchError` before any tick runs.

use serde::{Deserialize, Serialize};

use crate::engine::config::EngineConfig;
use crate::engine::driver::simulate;
use crate::engine::result::{MatchResult, TeamTotals};
use crate::error::{MatchError, Result};
use crate::models::MatchSetup;

pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub seed: u64,
    pub setup: MatchSetup,
    /// Overrides the realistic preset when present
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub schema_version: u8,
    pub result: MatchResult,
    pub home_totals: TeamTotals,
    pub away_totals: TeamTotals,
}

pub fn simulate_request(request: &MatchRequest) -> Result<MatchResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(MatchError::UnsupportedSchema(request.schema_version));
    }
    let config = request.config.clone().unwrap_or_default();
    let result = simulate(&request.setup, request.seed, config)?;
    Ok(MatchResponse {
        schema_version: SCHEMA_VERSION,
        home_totals: result.team_totals(&request.setup.home),
        away_totals: result.team_totals(&request.setup.away),
        result,
    })
}

/// Parse, validate, simulate, serialize.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let response = simulate_request(&request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::standard_setup;
    use serde_json::{json, Value};

    fn request_json(seed: u64) -> String {
        let request = MatchRequest { schema_version: 1, seed, setup: standard_setup(), config: None };
        serde_json::to_string(&request).unwrap()
    }

    #[test]
    fn test_round_trip_through_json() {
        let out = simulate_match_json(&request_json(42)).unwrap();
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["result"]["seed"], 42);
        assert_eq!(value["result"]["minutes_played"], 90);
        assert!(value["result"]["events"].as_array().unwrap().len() > 1);
        assert_eq!(
            value["home_totals"]["goals"].as_u64().unwrap(),
            value["result"]["score_home"].as_u64().unwrap()
        );
    }

    #[test]
    fn test_same_request_same_bytes() {
        let a = simulate_match_json(&request_json(7)).unwrap();
        let b = simulate_match_json(&request_json(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let mut value: Value = serde_json::from_str(&request_json(1)).unwrap();
        value["schema_version"] = json!(2);
        let err = simulate_match_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, MatchError::UnsupportedSchema(2)));
    }

    #[test]
    fn test_schema_version_defaults_to_current() {
        let mut value: Value = serde_json::from_str(&request_json(1)).unwrap();
        value.as_object_mut().unwrap().remove("schema_version");
        assert!(simulate_match_json(&value.to_string()).is_ok());
    }

    #[test]
    fn test_malformed_json_is_an_input_error() {
        let err = simulate_match_json("{ not json").unwrap_err();
        assert!(matches!(err, MatchError::Deserialization(_)));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_invalid_lineup_fails_fast() {
        let mut request = MatchRequest { schema_version: 1, seed: 1, setup: standard_setup(), config: None };
        request.setup.away.lineup.truncate(10);
        let err = simulate_request(&request).unwrap_err();
        assert!(matches!(err, MatchError::InvalidLineupSize { .. }));
    }

    #[test]
    fn test_embedded_config_is_used() {
        let mut config = EngineConfig::default();
        config.clock.match_length = 30;
        let request = MatchRequest { schema_version: 1, seed: 3, setup: standard_setup(), config: Some(config) };
        let response = simulate_request(&request).unwrap();
        assert_eq!(response.result.minutes_played, 30);
    }
}
