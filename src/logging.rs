//! Route `log` records into an in-memory buffer that the UI can display.
//!
//! Writing to stderr would tear the alternate screen, so records are captured
//! by `tui-logger`, whose background thread feeds the log pane while the
//! terminal is active.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the logger once per process. Later calls only adjust the level.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
			eprintln!("citat: logging unavailable: {err:?}");
		}
	});
	tui_logger::set_default_level(level);
	log::set_max_level(level);
}

/// Parse a level name as used in configuration files.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	match value.trim().to_ascii_lowercase().as_str() {
		"off" | "none" => Some(LevelFilter::Off),
		"error" => Some(LevelFilter::Error),
		"warn" | "warning" => Some(LevelFilter::Warn),
		"info" => Some(LevelFilter::Info),
		"debug" => Some(LevelFilter::Debug),
		"trace" => Some(LevelFilter::Trace),
		_ => None,
	}
}
