use anyhow::Result;
use citat::{BrowserState, display_state};
use citat::browser::QuoteView;
use serde_json::json;

use super::OutputFormat;

/// Print the current quote and its counter.
pub(crate) fn print_current(state: &BrowserState, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => println!("{}", format_current_plain(state)),
		OutputFormat::Json => println!("{}", format_current_json(state)?),
	}
	Ok(())
}

/// Print every quote with a marker on the current one.
pub(crate) fn print_list(state: &BrowserState, format: OutputFormat) -> Result<()> {
	match format {
		OutputFormat::Plain => {
			for line in format_list_plain(state) {
				println!("{line}");
			}
		}
		OutputFormat::Json => println!("{}", format_list_json(state)?),
	}
	Ok(())
}

fn format_current_plain(state: &BrowserState) -> String {
	match display_state(state).view {
		QuoteView::Quote { text, counter } => format!("[{counter}] {text}"),
		QuoteView::Empty => "No quotes available".to_string(),
	}
}

fn format_current_json(state: &BrowserState) -> Result<String> {
	Ok(serde_json::to_string_pretty(&display_state(state))?)
}

fn format_list_plain(state: &BrowserState) -> Vec<String> {
	let width = state.len().to_string().len();
	let cursor = state.cursor();
	state
		.quotes()
		.iter()
		.enumerate()
		.map(|(index, quote)| {
			let marker = if Some(index) == cursor { '>' } else { ' ' };
			format!("{marker} {:>width$}. {quote}", index + 1)
		})
		.collect()
}

fn format_list_json(state: &BrowserState) -> Result<String> {
	let payload = json!({
		"cursor": state.cursor(),
		"quotes": state.quotes(),
	});
	Ok(serde_json::to_string_pretty(&payload)?)
}
