use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let state = match &config.state_path {
		Some(path) => path.display().to_string(),
		None => "(in memory, not saved)".to_string(),
	};

	vec![
		"Effective configuration:".to_string(),
		format!("  Quotes: {}", config.source),
		format!("  State file: {state}"),
		format!("  Title: {}", config.ui.title),
		format!("  Empty message: {}", config.ui.empty_message),
		format!("  Theme: {}", config.theme_name),
		format!("  Log level: {}", config.log_level),
	]
}
