//! Configuration loading utilities

use crate::FeeConfigFile;
use config::{Config, File};
use swapfee_types::ConfigError;

/// Load a raw configuration document from a file
///
/// The `config` crate resolves the format from the file extension, so JSON,
/// TOML, and YAML documents all work. The result still has to go through
/// [`crate::validate`] before an engine can be built from it.
pub fn load_config_file(path: &str) -> Result<FeeConfigFile, ConfigError> {
	let source = Config::builder()
		.add_source(File::with_name(path))
		.build()
		.map_err(|e| ConfigError::Load(e.to_string()))?;

	source
		.try_deserialize()
		.map_err(|e| ConfigError::Load(e.to_string()))
}
