use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Quotes compiled into the binary and used when no other source is configured.
pub const BUNDLED_QUOTES: &str = include_str!("../../assets/cites.txt");

/// Where the default collection comes from when nothing has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultSource {
	/// The quote file shipped with the application.
	#[default]
	Bundled,
	/// A user supplied quote file.
	File(PathBuf),
	/// Literal text, mostly useful for embedding and tests.
	Text(String),
}

impl DefaultSource {
	/// Read and parse the source.
	///
	/// Read failures are logged and produce an empty collection so the caller
	/// can fall into its empty state instead of aborting.
	#[must_use]
	pub fn load(&self) -> Vec<String> {
		match self {
			Self::Bundled => parse_quotes(BUNDLED_QUOTES),
			Self::Text(text) => parse_quotes(text),
			Self::File(path) => match fs::read_to_string(path) {
				Ok(text) => {
					let quotes = parse_quotes(&text);
					log::debug!("loaded {} quotes from {}", quotes.len(), path.display());
					quotes
				}
				Err(err) => {
					log::error!("failed to read quote file {}: {err}", path.display());
					Vec::new()
				}
			},
		}
	}
}

impl fmt::Display for DefaultSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bundled => f.write_str("(bundled)"),
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Text(_) => f.write_str("(inline text)"),
		}
	}
}

/// Split `text` into quotes, skipping blank lines and numbering prefixes.
#[must_use]
pub fn parse_quotes(text: &str) -> Vec<String> {
	text.lines()
		.filter(|line| !line.trim().is_empty())
		.map(strip_number_prefix)
		.filter(|quote| !quote.is_empty())
		.map(str::to_owned)
		.collect()
}

/// Remove a leading `<digits>.` marker and the whitespace around it.
///
/// The marker is only recognised when at least one digit is directly followed
/// by a dot; anything else is returned with leading whitespace trimmed.
#[must_use]
pub fn strip_number_prefix(line: &str) -> &str {
	let trimmed = line.trim_start();
	let digits = trimmed
		.bytes()
		.take_while(|byte| byte.is_ascii_digit())
		.count();
	if digits == 0 {
		return trimmed;
	}

	match trimmed[digits..].strip_prefix('.') {
		Some(rest) => rest.trim_start(),
		None => trimmed,
	}
}
