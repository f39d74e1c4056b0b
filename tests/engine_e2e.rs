//! End-to-end tests through the public library surface

use swapfee::mocks::MockRegistry;
use swapfee::{
	calculate_amount_after_fee, calculate_fee, EngineError, FeeConfigFile, RuleEngine,
	RuleEngineBuilder, SwapRequest, Token,
};

fn config_file(json: &str) -> FeeConfigFile {
	serde_json::from_str(json).expect("test config must deserialize")
}

fn standard_config() -> FeeConfigFile {
	config_file(
		r#"{
			"version": 1,
			"defaultFee": {"bps": 5, "recipient": "treasury.near"},
			"rules": [
				{
					"id": "stable-pairs",
					"priority": 200,
					"match": {
						"in": {"symbol": ["USDC", "USDT"]},
						"out": {"symbol": ["USDC", "USDT"]}
					},
					"fee": {"bps": 1, "recipient": "treasury.near"}
				},
				{
					"id": "to-eth-first",
					"priority": 100,
					"match": {
						"in": {"blockchain": "*"},
						"out": {"blockchain": "eth"}
					},
					"fee": {"bps": 30, "recipient": "treasury.near"}
				},
				{
					"id": "to-eth-second",
					"priority": 100,
					"match": {
						"in": {"blockchain": "*"},
						"out": {"blockchain": "eth"}
					},
					"fee": {"bps": 40, "recipient": "other.near"}
				},
				{
					"id": "not-eth-origin",
					"priority": 50,
					"match": {
						"in": {"blockchain": ["arb", "!eth"]},
						"out": {"blockchain": "*"}
					},
					"fee": [
						{"bps": 8, "recipient": "treasury.near"},
						{"bps": 2, "recipient": "referrer.near"}
					]
				}
			]
		}"#,
	)
}

fn warmed_registry() -> MockRegistry {
	MockRegistry::warmed([
		Token::eth(),
		Token::near(),
		Token::usdc_ethereum(),
		Token::usdc_arbitrum(),
		Token::usdt_ethereum(),
		Token::wbtc_polygon(),
	])
}

fn engine() -> RuleEngine {
	RuleEngineBuilder::new()
		.with_config(standard_config())
		.with_registry(warmed_registry())
		.build()
		.expect("standard config must validate")
}

#[test]
fn higher_priority_rule_wins() {
	let engine = engine();
	// USDC->USDC is also a to-eth swap, but the 200-priority stable rule wins
	let result = engine
		.match_swap(&SwapRequest::new(
			Token::usdc_arbitrum().asset_id,
			Token::usdc_ethereum().asset_id,
		))
		.unwrap();
	assert!(result.matched);
	assert_eq!(result.match_details.as_ref().unwrap().rule_id, "stable-pairs");
	assert_eq!(result.fee.total_bps(), 1);
}

#[test]
fn equal_priority_breaks_ties_by_configuration_order() {
	let engine = engine();
	// NEAR->ETH matches both 100-priority rules; the first configured wins
	let result = engine
		.match_swap(&SwapRequest::new(
			Token::near().asset_id,
			Token::eth().asset_id,
		))
		.unwrap();
	assert_eq!(result.match_details.as_ref().unwrap().rule_id, "to-eth-first");
	assert_eq!(result.fee.total_bps(), 30);
}

#[test]
fn negation_arm_matches_non_excluded_chains() {
	let engine = engine();
	// polygon origin: matches ["arb", "!eth"] via the negation arm
	let result = engine
		.match_swap(&SwapRequest::new(
			Token::wbtc_polygon().asset_id,
			Token::near().asset_id,
		))
		.unwrap();
	assert_eq!(
		result.match_details.as_ref().unwrap().rule_id,
		"not-eth-origin"
	);
	// Split fee: total is the sum of the member rates
	assert_eq!(result.fee.total_bps(), 10);
	assert_eq!(result.fee.components().len(), 2);
}

#[test]
fn no_rule_yields_default_fee() {
	let engine = engine();
	// ETH -> NEAR: origin "eth" is excluded by the negation rule, and no
	// other rule covers a near destination
	let result = engine
		.match_swap(&SwapRequest::new(
			Token::eth().asset_id,
			Token::near().asset_id,
		))
		.unwrap();
	assert!(!result.matched);
	assert!(result.rule.is_none());
	assert!(result.match_details.is_none());
	assert_eq!(result.fee.total_bps(), 5);
}

#[test]
fn unresolved_asset_yields_default_fee_not_error() {
	let engine = engine();
	let result = engine
		.match_swap(&SwapRequest::new("unknown.near", Token::eth().asset_id))
		.unwrap();
	assert!(!result.matched);
	assert_eq!(result.fee.total_bps(), 5);
	assert!(result.match_details.is_none());
}

#[test]
fn cold_registry_is_not_ready() {
	let registry = MockRegistry::new();
	let engine = RuleEngineBuilder::new()
		.with_config(standard_config())
		.with_registry(registry)
		.build()
		.unwrap();

	let err = engine
		.match_swap(&SwapRequest::new("a.near", "b.near"))
		.unwrap_err();
	assert!(matches!(err, EngineError::NotReady));
}

#[tokio::test]
async fn async_path_warms_registry_then_matches() {
	let registry = MockRegistry::new();
	registry.insert(Token::near());
	registry.insert(Token::eth());

	let engine = RuleEngineBuilder::new()
		.with_config(standard_config())
		.with_registry(registry)
		.build()
		.unwrap();

	let result = engine
		.match_swap_fresh(&SwapRequest::new(
			Token::near().asset_id,
			Token::eth().asset_id,
		))
		.await
		.unwrap();
	assert!(result.matched);
}

#[tokio::test]
async fn concurrent_refreshes_collapse() {
	use std::sync::Arc;
	use swapfee::TokenRegistry;

	let registry = Arc::new(MockRegistry::new());
	let mut handles = Vec::new();
	for _ in 0..16 {
		let registry = Arc::clone(&registry);
		handles.push(tokio::spawn(async move { registry.ensure_fresh().await }));
	}
	for handle in handles {
		handle.await.unwrap().unwrap();
	}
	assert_eq!(registry.fetch_count(), 1);
}

#[test]
fn fee_amounts_are_exact() {
	assert_eq!(calculate_fee("1000000", 20).unwrap().as_str(), "2000");
	assert_eq!(
		calculate_amount_after_fee("1000000", 20).unwrap().as_str(),
		"998000"
	);
}

#[test]
fn result_serializes_for_api_consumers() {
	let engine = engine();
	let result = engine
		.match_swap(&SwapRequest::new(
			Token::near().asset_id,
			Token::eth().asset_id,
		))
		.unwrap();

	let json = serde_json::to_value(&result).unwrap();
	assert_eq!(json["matched"], true);
	assert_eq!(json["matchDetails"]["ruleId"], "to-eth-first");
	assert_eq!(json["rule"]["match"]["out"]["blockchain"], "eth");
}
