use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use citat::{DefaultSource, UiConfig, app_dirs, logging, theme};
use log::LevelFilter;
use serde::Deserialize;

use super::resolved::ResolvedConfig;
use crate::cli::CliArgs;

#[cfg(test)]
mod tests;

const DEFAULT_THEME: &str = "slate";
pub(crate) const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Mirror of the configuration file representation before CLI overrides are
/// applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	quotes: QuotesSection,
	state: StateSection,
	ui: UiSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct QuotesSection {
	source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StateSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	empty_message: Option<String>,
	theme: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.quotes.clone() {
			self.quotes.source = Some(path);
		}
		if let Some(path) = cli.state.clone() {
			self.state.path = Some(path);
		}
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(message) = cli.empty_message.clone() {
			self.ui.empty_message = Some(message);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let source = match self.quotes.source {
			Some(path) if path.as_os_str().is_empty() => DefaultSource::Bundled,
			Some(path) => DefaultSource::File(path),
			None => DefaultSource::Bundled,
		};

		let state_path = match self.state.path {
			Some(path) => Some(path),
			None => match app_dirs::default_state_path() {
				Ok(path) => Some(path),
				Err(err) => {
					log::warn!("saved state disabled: {err}");
					None
				}
			},
		};

		let theme_name = self
			.ui
			.theme
			.map(|name| name.trim().to_string())
			.filter(|name| !name.is_empty())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = theme::by_name(&theme_name).with_context(|| {
			let known: Vec<_> = theme::names().collect();
			format!("unknown theme '{theme_name}' (known: {})", known.join(", "))
		})?;

		let mut ui = UiConfig::default();
		if let Some(title) = self.ui.title {
			ui = ui.with_title(title);
		}
		if let Some(message) = self.ui.empty_message {
			ui = ui.with_empty_message(message);
		}

		let log_level = match self.logging.level.as_deref() {
			None => DEFAULT_LOG_LEVEL,
			Some(value) => match logging::parse_level(value) {
				Some(level) => level,
				None => bail!("unknown log level '{value}'"),
			},
		};

		Ok(ResolvedConfig {
			source,
			state_path,
			theme_name,
			theme,
			ui,
			log_level,
		})
	}
}
