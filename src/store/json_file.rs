use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Entries, KeyValueStore, StoreError, StoreValue};

/// Store persisted as a single JSON object on disk.
///
/// The file is read once on [`open`](Self::open) and rewritten in full on
/// every [`commit`](KeyValueStore::commit).
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
	entries: Entries,
}

impl JsonFileStore {
	/// Open the store at `path`. A missing file is an empty store.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		let entries = match fs::read_to_string(&path) {
			Ok(text) if text.trim().is_empty() => Entries::new(),
			Ok(text) => serde_json::from_str::<Entries>(&text).map_err(|source| StoreError::Corrupt {
				path: path.clone(),
				source,
			})?,
			Err(err) if err.kind() == io::ErrorKind::NotFound => Entries::new(),
			Err(err) => return Err(StoreError::io("read", path, err)),
		};
		Ok(Self { path, entries })
	}

	/// Open the store at `path`, starting empty if the existing file is unusable.
	///
	/// The next commit overwrites whatever was on disk.
	#[must_use]
	pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		match Self::open(path.clone()) {
			Ok(store) => store,
			Err(err) => {
				log::warn!("ignoring persisted state: {err}");
				Self {
					path,
					entries: Entries::new(),
				}
			}
		}
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn temp_path(&self) -> PathBuf {
		let mut name = self
			.path
			.file_name()
			.map(|name| name.to_os_string())
			.unwrap_or_else(|| "state.json".into());
		name.push(".tmp");
		self.path.with_file_name(name)
	}
}

impl KeyValueStore for JsonFileStore {
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
		if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|err| StoreError::io("create", parent, err))?;
		}

		let json = serde_json::to_string_pretty(&self.entries)?;
		let temp = self.temp_path();
		fs::write(&temp, json).map_err(|err| StoreError::io("write", &temp, err))?;
		fs::rename(&temp, &self.path).map_err(|err| StoreError::io("replace", &self.path, err))?;
		log::debug!("committed {} keys to {}", self.entries.len(), self.path.display());
		Ok(())
	}
}
