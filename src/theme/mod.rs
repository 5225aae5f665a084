//! Colour themes for the terminal UI.
//!
//! Themes are plain `const` values. [`by_name`] resolves a configured name or
//! alias case-insensitively.

mod light;
mod slate;

use ratatui::style::{Color, Modifier, Style};

pub use light::LIGHT;
pub use slate::SLATE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub title: Style,
	pub counter: Style,
	pub quote: Style,
	pub border: Style,
	pub key_enabled: Style,
	pub key_disabled: Style,
	pub empty: Style,
}

impl Theme {
	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn counter_style(&self) -> Style {
		self.counter
	}

	#[must_use]
	pub fn quote_style(&self) -> Style {
		self.quote
	}

	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	/// Style for a key hint depending on whether its action is available.
	#[must_use]
	pub fn key_style(&self, enabled: bool) -> Style {
		if enabled {
			self.key_enabled
		} else {
			self.key_disabled
		}
	}

	#[must_use]
	pub fn key_label_style(&self, enabled: bool) -> Style {
		if enabled {
			Style::new().fg(self.quote.fg.unwrap_or(Color::Reset))
		} else {
			self.key_disabled.remove_modifier(Modifier::BOLD)
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		SLATE
	}
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark", "default"],
	},
	ThemeDefinition {
		name: "light",
		theme: LIGHT,
		aliases: &["paper"],
	},
];

/// Names of the bundled themes in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN_DEFINITIONS.iter().map(|definition| definition.name)
}

/// Look up a theme by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			definition.name == normalized
				|| definition.aliases.iter().any(|alias| *alias == normalized)
		})
		.map(|definition| definition.theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}
