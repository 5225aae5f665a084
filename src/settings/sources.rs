use std::path::PathBuf;

use anyhow::Result;
use citat::app_dirs;
use config::{Config, Environment, File};

use crate::cli::CliArgs;

/// Config file names looked up in the working directory, lowest priority first.
const LOCAL_FILES: [&str; 2] = [".citat.toml", "citat.toml"];

/// Layer the optional default files, explicit `--config` files and
/// `CITAT__SECTION__KEY` variables, in increasing priority.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	let builder = defaults
		.into_iter()
		.map(|path| File::from(path).required(false))
		.chain(cli.config.iter().map(|path| File::from(path.as_path()).required(true)))
		.fold(Config::builder(), |builder, file| builder.add_source(file));

	let config = builder
		.add_source(Environment::with_prefix("citat").separator("__"))
		.build()?;
	Ok(config)
}

/// The user-wide `config.toml` followed by the working-directory files.
fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir().map(|dir| dir.join("config.toml"));
	user.into_iter()
		.chain(LOCAL_FILES.iter().map(PathBuf::from))
		.collect()
}
