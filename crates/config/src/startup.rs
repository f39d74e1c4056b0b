//! Startup logging for loaded configurations

use swapfee_types::FeeConfig;
use tracing::info;

/// Log a short summary of a validated configuration
pub fn log_config_summary(config: &FeeConfig) {
	let disabled = config.rules.iter().filter(|r| !r.enabled).count();
	let windowed = config
		.rules
		.iter()
		.filter(|r| r.valid_from.is_some() || r.valid_until.is_some())
		.count();

	info!(
		"Fee configuration v{} loaded: {} rule(s) ({} disabled, {} time-windowed), default fee {} bps",
		config.version,
		config.rules.len(),
		disabled,
		windowed,
		config.default_fee.total_bps()
	);
}
