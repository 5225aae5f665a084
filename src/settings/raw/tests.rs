use std::path::PathBuf;

use citat::{DefaultSource, theme};
use clap::Parser;
use log::LevelFilter;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"citat",
		"--quotes",
		"q.txt",
		"--state",
		"s.json",
		"--title",
		"title",
		"--empty-message",
		"none left",
		"--theme",
		"dark",
		"--log-level",
		"trace",
	]);

	let mut config = RawConfig::default();
	config.ui.title = Some("from file".into());
	config.apply_cli_overrides(&cli);

	assert_eq!(config.quotes.source, Some(PathBuf::from("q.txt")));
	assert_eq!(config.state.path, Some(PathBuf::from("s.json")));
	assert_eq!(config.ui.title.as_deref(), Some("title"));
	assert_eq!(config.ui.empty_message.as_deref(), Some("none left"));
	assert_eq!(config.ui.theme.as_deref(), Some("dark"));
	assert_eq!(config.logging.level.as_deref(), Some("trace"));
}

#[test]
fn defaults_resolve_to_bundled_quotes_and_slate() {
	let mut config = RawConfig::default();
	config.state.path = Some(PathBuf::from("state.json"));

	let resolved = config.resolve().unwrap();
	assert_eq!(resolved.source, DefaultSource::Bundled);
	assert_eq!(resolved.theme_name, "slate");
	assert_eq!(resolved.theme, theme::SLATE);
	assert_eq!(resolved.ui.title, "Citat");
	assert_eq!(resolved.log_level, LevelFilter::Info);
	assert_eq!(resolved.state_path, Some(PathBuf::from("state.json")));
}

#[test]
fn theme_aliases_resolve() {
	let mut config = RawConfig::default();
	config.ui.theme = Some(" Paper ".into());
	let resolved = config.resolve().unwrap();
	assert_eq!(resolved.theme, theme::LIGHT);
}

#[test]
fn unknown_theme_is_rejected() {
	let mut config = RawConfig::default();
	config.ui.theme = Some("neon".into());
	let err = config.resolve().unwrap_err();
	assert!(err.to_string().contains("neon"));
}

#[test]
fn unknown_log_level_is_rejected() {
	let mut config = RawConfig::default();
	config.logging.level = Some("loud".into());
	assert!(config.resolve().is_err());
}

#[test]
fn empty_source_path_means_bundled() {
	let mut config = RawConfig::default();
	config.quotes.source = Some(PathBuf::new());
	assert_eq!(config.resolve().unwrap().source, DefaultSource::Bundled);
}
