mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, parse_cli, print_current, print_list};
use workflow::BrowseWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in citat::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = load_settings(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run(&cli, BrowseWorkflow::from_config(resolved))
}

/// Resolve settings with the logger already installed, so warnings raised
/// while resolving are kept, then apply the configured level.
fn load_settings(cli: &CliArgs) -> Result<settings::ResolvedConfig> {
	citat::logging::initialize(settings::DEFAULT_LOG_LEVEL);
	let resolved = settings::load(cli)?;
	citat::logging::initialize(resolved.log_level);
	Ok(resolved)
}

/// Dispatch to the non-interactive commands or the interactive browser.
fn run(cli: &CliArgs, workflow: BrowseWorkflow) -> Result<()> {
	if cli.reset {
		workflow.reset();
	}

	if cli.show {
		let browser = workflow.restore();
		return print_current(browser.state(), cli.output);
	}
	if cli.list {
		let browser = workflow.restore();
		return print_list(browser.state(), cli.output);
	}

	workflow.run()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn configured_level_replaces_the_startup_level() {
		let cli = CliArgs::parse_from(["citat", "--no-config", "--log-level", "error"]);
		let resolved = load_settings(&cli).unwrap();
		assert_eq!(resolved.log_level, log::LevelFilter::Error);
		assert_eq!(log::max_level(), log::LevelFilter::Error);
	}
}
