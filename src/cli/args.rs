use std::fmt::Write;
use std::path::PathBuf;

use citat::app_dirs;
use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("citat {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "citat",
	version,
	long_version = long_version(),
	about = "Browse quotes in the terminal and pick up where you left off",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `citat` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CITAT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'f',
		long = "quotes",
		value_name = "FILE",
		help = "Read default quotes from FILE, one per line (default: bundled quotes)"
	)]
	pub(crate) quotes: Option<PathBuf>,
	#[arg(
		short = 's',
		long = "state",
		value_name = "FILE",
		help = "Where to keep the saved position and edits (default: data directory)"
	)]
	pub(crate) state: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the title shown above the quote (default: Citat)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long = "empty-message",
		value_name = "TEXT",
		help = "Message shown when there are no quotes (default: No quotes available)"
	)]
	pub(crate) empty_message: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Minimum level shown in the log pane: off, error, warn, info, debug, trace (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long,
		help = "Forget the saved position and edits before starting (default: disabled)"
	)]
	pub(crate) reset: bool,
	#[arg(
		long,
		conflicts_with = "list",
		help = "Print the current quote and exit without saving (default: disabled)"
	)]
	pub(crate) show: bool,
	#[arg(
		long,
		help = "Print every quote, marking the current one, and exit without saving (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how --show and --list print")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the non-interactive commands.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
