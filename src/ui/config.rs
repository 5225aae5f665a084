/// Text used by the UI for titles, the empty state and key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
	pub title: String,
	pub empty_message: String,
	pub hints: HintLabels,
}

/// Labels shown next to each key in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintLabels {
	pub previous: String,
	pub next: String,
	pub delete: String,
	pub quit: String,
	pub log: String,
}

impl Default for HintLabels {
	fn default() -> Self {
		Self {
			previous: "previous".to_string(),
			next: "next".to_string(),
			delete: "delete".to_string(),
			quit: "quit".to_string(),
			log: "log".to_string(),
		}
	}
}

impl Default for UiConfig {
	fn default() -> Self {
		Self {
			title: "Citat".to_string(),
			empty_message: "No quotes available".to_string(),
			hints: HintLabels::default(),
		}
	}
}

impl UiConfig {
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
		self.empty_message = message.into();
		self
	}
}
