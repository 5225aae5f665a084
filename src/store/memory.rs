use super::{Entries, KeyValueStore, StoreError, StoreValue};

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
	entries: Entries,
	commits: usize,
}

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of times [`KeyValueStore::commit`] has been called.
	#[must_use]
	pub fn commits(&self) -> usize {
		self.commits
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Option<&StoreValue> {
		self.entries.get(key)
	}

	fn put(&mut self, key: &str, value: StoreValue) {
		self.entries.insert(key.to_string(), value);
	}

	fn remove(&mut self, key: &str) -> Option<StoreValue> {
		self.entries.remove(key)
	}

	fn commit(&mut self) -> Result<(), StoreError> {
		self.commits += 1;
		Ok(())
	}
}
