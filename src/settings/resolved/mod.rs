use std::path::PathBuf;

use citat::{DefaultSource, Theme, UiConfig};
use log::LevelFilter;

mod summary;

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub source: DefaultSource,
	/// `None` when no data directory could be determined; state then lives in memory.
	pub state_path: Option<PathBuf>,
	pub theme_name: String,
	pub theme: Theme,
	pub ui: UiConfig,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		for line in summary::summary_lines(self) {
			println!("{line}");
		}
	}
}
