use std::fmt;

use serde::Serialize;

use super::BrowserState;

/// 1-indexed `position / total` counter shown next to the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counter {
	pub position: usize,
	pub total: usize,
}

impl fmt::Display for Counter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} / {}", self.position, self.total)
	}
}

/// Which user actions are currently possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ActionAvailability {
	pub previous: bool,
	pub next: bool,
	pub delete: bool,
}

/// What the front-end should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum QuoteView<'a> {
	Quote { text: &'a str, counter: Counter },
	Empty,
}

/// Everything a renderer needs, derived from a [`BrowserState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayState<'a> {
	#[serde(flatten)]
	pub view: QuoteView<'a>,
	pub actions: ActionAvailability,
}

impl<'a> DisplayState<'a> {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		matches!(self.view, QuoteView::Empty)
	}

	#[must_use]
	pub fn counter(&self) -> Option<Counter> {
		match self.view {
			QuoteView::Quote { counter, .. } => Some(counter),
			QuoteView::Empty => None,
		}
	}
}

/// Compute the display for `state`. Pure; no side effects.
#[must_use]
pub fn display_state(state: &BrowserState) -> DisplayState<'_> {
	let view = match (state.cursor(), state.current()) {
		(Some(cursor), Some(text)) => QuoteView::Quote {
			text,
			counter: Counter {
				position: cursor + 1,
				total: state.len(),
			},
		},
		_ => QuoteView::Empty,
	};

	let actions = ActionAvailability {
		previous: state.has_previous(),
		next: state.has_next(),
		delete: !state.is_empty(),
	};

	DisplayState { view, actions }
}
