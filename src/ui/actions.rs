use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, SessionEnd};

impl App {
	/// React to a terminal event. Returns how the session ended, if it did.
	pub(crate) fn handle_event(&mut self, event: Event) -> Option<SessionEnd> {
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
			Event::FocusLost => {
				self.pause();
				None
			}
			_ => None,
		}
	}

	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionEnd> {
		if key.modifiers.contains(KeyModifiers::CONTROL) {
			return match key.code {
				KeyCode::Char('c') => Some(SessionEnd::Leave),
				_ => None,
			};
		}

		match key.code {
			KeyCode::Char('q') => return Some(SessionEnd::Quit),
			KeyCode::Esc => return Some(SessionEnd::Leave),
			KeyCode::Right | KeyCode::Char('l' | 'n' | 'j') => {
				self.browser.next();
			}
			KeyCode::Left | KeyCode::Char('h' | 'p' | 'k') => {
				self.browser.previous();
			}
			KeyCode::Delete | KeyCode::Char('d') => {
				if let Some(removed) = self.browser.delete_current() {
					log::debug!("deleted quote: {removed}");
				}
			}
			KeyCode::Char('L') => {
				self.show_log = !self.show_log;
			}
			_ => {}
		}
		None
	}
}
