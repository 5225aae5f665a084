use anyhow::Result;
use citat::browser::lifecycle;
use citat::{App, JsonFileStore, KeyValueStore, MemoryStore, QuoteBrowser, SessionEnd};

use crate::settings::ResolvedConfig;

/// Coordinates opening the saved state and handing it to the UI.
pub(crate) struct BrowseWorkflow {
	config: ResolvedConfig,
}

impl BrowseWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self { config }
	}

	/// Open the configured store. Problems with the saved file are logged and
	/// start an empty store in its place.
	fn open_store(&self) -> Box<dyn KeyValueStore> {
		match &self.config.state_path {
			Some(path) => Box::new(JsonFileStore::open_or_empty(path)),
			None => Box::new(MemoryStore::new()),
		}
	}

	/// Drop any saved collection and position.
	pub(crate) fn reset(&self) {
		let mut store = self.open_store();
		match lifecycle::reset(&mut *store) {
			Ok(()) => log::info!("cleared saved state"),
			Err(err) => log::error!("failed to clear saved state: {err}"),
		}
	}

	/// Restore the browser without starting the UI.
	pub(crate) fn restore(&self) -> QuoteBrowser {
		QuoteBrowser::open(self.open_store(), &self.config.source)
	}

	/// Run the interactive browser until the user ends the session.
	pub(crate) fn run(self) -> Result<SessionEnd> {
		let browser = self.restore();
		let ResolvedConfig { theme, ui, .. } = self.config;
		let app = App::new(browser).with_ui_config(ui).with_theme(theme);
		citat::run(app)
	}
}
