//! The quote browser: a list of quotes, a cursor into it, and the rules for
//! restoring and saving both.
//!
//! [`BrowserState`] holds the data and the navigation rules, [`display_state`]
//! turns it into what a front-end shows, and the functions in [`lifecycle`]
//! move it in and out of a [`KeyValueStore`]. [`QuoteBrowser`] ties a state to
//! its store for callers that do not want to thread both around.

mod display;
pub mod lifecycle;
mod state;
#[cfg(test)]
mod tests;

pub use display::{ActionAvailability, Counter, DisplayState, QuoteView, display_state};
pub use lifecycle::{INDEX_KEY, QUOTES_KEY, on_exit, on_init, on_pause};
pub use state::BrowserState;

use crate::quotes::DefaultSource;
use crate::store::{KeyValueStore, StoreError};

/// A browser session bound to the store it was restored from.
pub struct QuoteBrowser {
	state: BrowserState,
	store: Box<dyn KeyValueStore>,
}

impl QuoteBrowser {
	/// Restore a session from `store`, using `source` when nothing is saved.
	pub fn open(store: Box<dyn KeyValueStore>, source: &DefaultSource) -> Self {
		let state = on_init(&*store, source);
		Self { state, store }
	}

	#[must_use]
	pub fn state(&self) -> &BrowserState {
		&self.state
	}

	#[must_use]
	pub fn display(&self) -> DisplayState<'_> {
		display_state(&self.state)
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.state.is_empty()
	}

	pub fn next(&mut self) -> bool {
		self.state.next()
	}

	pub fn previous(&mut self) -> bool {
		self.state.previous()
	}

	pub fn delete_current(&mut self) -> Option<String> {
		let removed = self.state.delete_current();
		if removed.is_some() && self.state.is_empty() {
			log::info!("deleted the last remaining quote");
		}
		removed
	}

	/// Save the cursor and keep the session going.
	pub fn pause(&mut self) -> Result<(), StoreError> {
		on_pause(&mut *self.store, &self.state)
	}

	/// Save the collection and cursor.
	pub fn exit(&mut self) -> Result<(), StoreError> {
		on_exit(&mut *self.store, &self.state)
	}

	/// Give back the store, e.g. to restore a fresh session from it.
	#[must_use]
	pub fn into_store(self) -> Box<dyn KeyValueStore> {
		self.store
	}
}
