//! Configuration validation behavior through the builder

use swapfee::mocks::MockRegistry;
use swapfee::{
	ConfigError, EngineError, FeeConfigFile, RuleEngineBuilder, RuleValidationError,
};

fn config_file(json: &str) -> FeeConfigFile {
	serde_json::from_str(json).expect("test config must deserialize")
}

#[test]
fn build_fails_with_every_violation() {
	let file = config_file(
		r#"{
			"version": 1,
			"defaultFee": {"bps": 12000, "recipient": "treasury.near"},
			"rules": [
				{
					"id": "dup",
					"match": {"in": {}, "out": {"blockchain": "eth"}},
					"fee": {"bps": 10, "recipient": "treasury.near"}
				},
				{
					"id": "dup",
					"match": {"in": {"blockchain": "*"}, "out": {"blockchain": "eth"}},
					"fee": {"bps": 10, "recipient": "treasury.near"},
					"validUntil": "yesterday"
				}
			]
		}"#,
	);

	let err = RuleEngineBuilder::new().with_config(file).build().unwrap_err();
	let EngineError::Config(ConfigError::Validation(violations)) = err else {
		panic!("expected aggregated validation failure");
	};

	// Out-of-range default fee, empty "in" matcher, duplicate id, bad timestamp
	assert_eq!(violations.len(), 4);
	assert!(violations
		.iter()
		.any(|v| matches!(v, RuleValidationError::BpsOutOfRange { bps: 12000, .. })));
	assert!(violations
		.iter()
		.any(|v| matches!(v, RuleValidationError::EmptyMatcher { .. })));
	assert!(violations
		.iter()
		.any(|v| matches!(v, RuleValidationError::DuplicateRuleId { .. })));
	assert!(violations
		.iter()
		.any(|v| matches!(v, RuleValidationError::InvalidTimestamp { .. })));
}

#[test]
fn build_requires_a_configuration() {
	let err = RuleEngineBuilder::new()
		.with_registry(MockRegistry::new())
		.build()
		.unwrap_err();
	assert!(matches!(err, EngineError::Config(ConfigError::Load(_))));
}

#[test]
fn valid_config_builds_and_applies_defaults() {
	let file = config_file(
		r#"{
			"version": 3,
			"defaultFee": {"bps": 5, "recipient": "treasury.near"},
			"rules": [
				{
					"id": "no-priority",
					"match": {"in": {"blockchain": "*"}, "out": {"blockchain": "*"}},
					"fee": {"bps": 7, "recipient": "treasury.near"}
				}
			]
		}"#,
	);

	let engine = RuleEngineBuilder::new().with_config(file).build().unwrap();
	assert_eq!(engine.version(), 3);
	assert_eq!(engine.default_fee().total_bps(), 5);

	let rules = engine.selector().rules();
	assert_eq!(rules.len(), 1);
	assert_eq!(rules[0].priority, 100);
	assert!(rules[0].enabled);
}

#[test]
fn timestamps_parse_to_utc_during_validation() {
	let file = config_file(
		r#"{
			"version": 1,
			"defaultFee": {"bps": 5, "recipient": "treasury.near"},
			"rules": [
				{
					"id": "windowed",
					"match": {"in": {"blockchain": "*"}, "out": {"blockchain": "*"}},
					"fee": {"bps": 7, "recipient": "treasury.near"},
					"validFrom": "2026-01-01T02:00:00+02:00"
				}
			]
		}"#,
	);

	let engine = RuleEngineBuilder::new().with_config(file).build().unwrap();
	let from = engine.selector().rules()[0].valid_from.unwrap();
	assert_eq!(from.to_rfc3339(), "2026-01-01T00:00:00+00:00");
}
