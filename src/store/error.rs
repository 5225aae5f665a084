use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::StoreValue;

/// Errors raised while reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The backing file could not be read or written.
	#[error("failed to {action} {}: {source}", .path.display())]
	Io {
		action: &'static str,
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// The backing file exists but does not hold a JSON object of values.
	#[error("state file {} is corrupt: {source}", .path.display())]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A key holds a value of a different kind than the caller asked for.
	#[error("key '{key}' holds {found}, expected {expected}")]
	TypeMismatch {
		key: String,
		expected: &'static str,
		found: &'static str,
	},

	#[error("failed to encode state: {0}")]
	Encode(#[from] serde_json::Error),
}

impl StoreError {
	pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io {
			action,
			path: path.into(),
			source,
		}
	}

	pub(crate) fn type_mismatch(key: &str, expected: &'static str, found: &StoreValue) -> Self {
		Self::TypeMismatch {
			key: key.to_string(),
			expected,
			found: found.kind(),
		}
	}
}
