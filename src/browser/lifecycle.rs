//! Session boundaries: restoring state on start and writing it back on
//! pause or exit.

use crate::quotes::DefaultSource;
use crate::store::{KeyValueStore, StoreError};

use super::BrowserState;

/// Key holding the JSON encoded quote collection.
pub const QUOTES_KEY: &str = "quotes";
/// Key holding the cursor of the last session.
pub const INDEX_KEY: &str = "index";

/// Restore the browser from `store`, falling back to `source`.
///
/// Nothing here fails: unreadable or malformed persisted values are logged
/// and treated as absent.
pub fn on_init(store: &dyn KeyValueStore, source: &DefaultSource) -> BrowserState {
	let quotes = match persisted_quotes(store) {
		Some(quotes) => {
			log::info!("restored {} quotes from saved state", quotes.len());
			quotes
		}
		None => {
			let quotes = source.load();
			log::info!("loaded {} quotes from {source}", quotes.len());
			quotes
		}
	};

	let cursor = match store.get_int(INDEX_KEY) {
		Ok(cursor) => cursor.unwrap_or(0),
		Err(err) => {
			log::warn!("ignoring saved position: {err}");
			0
		}
	};

	let state = BrowserState::new(quotes, cursor);
	if state.is_empty() {
		log::warn!("no quotes available");
	} else if state.cursor().map(|c| c as i64) != Some(cursor) {
		log::debug!("saved position {cursor} is out of range, starting at the first quote");
	}
	state
}

/// Write only the cursor, leaving any saved collection untouched.
pub fn on_pause(store: &mut dyn KeyValueStore, state: &BrowserState) -> Result<(), StoreError> {
	store.put_int(INDEX_KEY, cursor_value(state));
	store.commit()
}

/// Write the full collection and cursor.
pub fn on_exit(store: &mut dyn KeyValueStore, state: &BrowserState) -> Result<(), StoreError> {
	let encoded = serde_json::to_string(state.quotes())?;
	store.put_string(QUOTES_KEY, encoded);
	store.put_int(INDEX_KEY, cursor_value(state));
	store.commit()
}

/// Forget everything saved so the next start uses the default source.
pub fn reset(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
	store.remove(QUOTES_KEY);
	store.remove(INDEX_KEY);
	store.commit()
}

fn persisted_quotes(store: &dyn KeyValueStore) -> Option<Vec<String>> {
	let encoded = match store.get_string(QUOTES_KEY) {
		Ok(Some(encoded)) => encoded,
		Ok(None) => return None,
		Err(err) => {
			log::warn!("ignoring saved quotes: {err}");
			return None;
		}
	};

	match serde_json::from_str::<Vec<String>>(&encoded) {
		Ok(quotes) if quotes.is_empty() => None,
		Ok(quotes) => Some(quotes),
		Err(err) => {
			log::warn!("ignoring saved quotes, they are not a JSON list of strings: {err}");
			None
		}
	}
}

fn cursor_value(state: &BrowserState) -> i64 {
	state
		.cursor()
		.and_then(|cursor| i64::try_from(cursor).ok())
		.unwrap_or(0)
}
