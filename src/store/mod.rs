//! Small key-value store used to persist the browser between sessions.
//!
//! Values are either strings or integers. [`MemoryStore`] keeps everything in
//! process while [`JsonFileStore`] mirrors the entries to a JSON object on
//! disk whenever [`KeyValueStore::commit`] is called.

mod error;
mod json_file;
mod memory;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// A single stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoreValue {
	Int(i64),
	Text(String),
}

impl StoreValue {
	fn kind(&self) -> &'static str {
		match self {
			Self::Int(_) => "integer",
			Self::Text(_) => "string",
		}
	}
}

pub(crate) type Entries = BTreeMap<String, StoreValue>;

/// Access to persisted preferences.
///
/// Writes are buffered until [`commit`](Self::commit) so a caller can update
/// several keys and flush them together.
pub trait KeyValueStore {
	/// Borrow the raw value stored under `key`.
	fn get(&self, key: &str) -> Option<&StoreValue>;

	/// Insert or replace the value stored under `key`.
	fn put(&mut self, key: &str, value: StoreValue);

	/// Drop `key`, returning the previous value if there was one.
	fn remove(&mut self, key: &str) -> Option<StoreValue>;

	/// Flush pending writes to the backing medium.
	fn commit(&mut self) -> Result<(), StoreError>;

	fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
		match self.get(key) {
			None => Ok(None),
			Some(StoreValue::Text(text)) => Ok(Some(text.clone())),
			Some(other) => Err(StoreError::type_mismatch(key, "string", other)),
		}
	}

	fn get_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
		match self.get(key) {
			None => Ok(None),
			Some(StoreValue::Int(value)) => Ok(Some(*value)),
			Some(other) => Err(StoreError::type_mismatch(key, "integer", other)),
		}
	}

	fn put_string(&mut self, key: &str, value: String) {
		self.put(key, StoreValue::Text(value));
	}

	fn put_int(&mut self, key: &str, value: i64) {
		self.put(key, StoreValue::Int(value));
	}
}
