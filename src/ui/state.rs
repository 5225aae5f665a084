//! State container for the terminal front-end.

use crate::browser::{DisplayState, QuoteBrowser};
use crate::theme::Theme;
use crate::ui::config::UiConfig;

/// How the user ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
	/// Explicit quit: the collection and the cursor are saved.
	Quit,
	/// Left without quitting: only the cursor is saved.
	Leave,
}

/// Aggregate state shared across the terminal UI.
pub struct App {
	pub(crate) browser: QuoteBrowser,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) show_log: bool,
}

impl App {
	/// Construct an [`App`] with the default labels and theme.
	#[must_use]
	pub fn new(browser: QuoteBrowser) -> Self {
		Self {
			browser,
			ui: UiConfig::default(),
			theme: Theme::default(),
			show_log: false,
		}
	}

	#[must_use]
	pub fn with_ui_config(mut self, ui: UiConfig) -> Self {
		self.ui = ui;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn browser(&self) -> &QuoteBrowser {
		&self.browser
	}

	#[must_use]
	pub fn display(&self) -> DisplayState<'_> {
		self.browser.display()
	}

	/// Save the cursor without ending the session.
	pub(crate) fn pause(&mut self) {
		match self.browser.pause() {
			Ok(()) => log::debug!("saved position"),
			Err(err) => log::error!("failed to save position: {err}"),
		}
	}

	/// Persist according to how the session ended.
	///
	/// Write failures are logged and otherwise ignored.
	pub fn finish(&mut self, end: SessionEnd) {
		let result = match end {
			SessionEnd::Quit => self.browser.exit(),
			SessionEnd::Leave => self.browser.pause(),
		};
		match result {
			Ok(()) => log::info!("session ended ({end:?})"),
			Err(err) => log::error!("failed to save state on {end:?}: {err}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::browser::{INDEX_KEY, QUOTES_KEY};
	use crate::quotes::DefaultSource;
	use crate::store::{KeyValueStore, MemoryStore};

	fn app_over(store: Box<dyn KeyValueStore>) -> App {
		let source = DefaultSource::Text("A\nB\nC\n".to_string());
		App::new(QuoteBrowser::open(store, &source))
	}

	#[test]
	fn leave_keeps_the_saved_collection() {
		let mut app = app_over(Box::new(MemoryStore::new()));
		app.browser.next();
		app.browser.delete_current();
		app.finish(SessionEnd::Leave);

		let store = app.browser.into_store();
		assert!(store.get(QUOTES_KEY).is_none());
		assert_eq!(store.get_int(INDEX_KEY).unwrap(), Some(1));

		let app = app_over(store);
		assert_eq!(app.browser().state().quotes(), ["A", "B", "C"]);
		assert_eq!(app.browser().state().cursor(), Some(1));
	}

	#[test]
	fn quit_saves_the_shortened_collection() {
		let mut app = app_over(Box::new(MemoryStore::new()));
		app.browser.next();
		app.browser.delete_current();
		app.finish(SessionEnd::Quit);

		let store = app.browser.into_store();
		assert_eq!(store.get_string(QUOTES_KEY).unwrap().as_deref(), Some(r#"["A","C"]"#));
		assert_eq!(store.get_int(INDEX_KEY).unwrap(), Some(1));

		let app = app_over(store);
		assert_eq!(app.browser().state().quotes(), ["A", "C"]);
		assert_eq!(app.browser().state().current(), Some("C"));
	}
}
