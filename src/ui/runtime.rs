use std::io;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableFocusChange, EnableFocusChange};
use ratatui::crossterm::execute;

use super::{App, SessionEnd};

/// Upper bound on how long the log pane can go without a redraw.
const TICK: Duration = Duration::from_millis(250);

/// Run `app` in the terminal, then persist according to how the session ended.
///
/// A terminal failure still saves the cursor before the error is returned.
pub fn run(mut app: App) -> Result<SessionEnd> {
	let outcome = app.run();
	app.conclude(outcome)
}

impl App {
	/// Pump the terminal event loop until the user ends the session.
	pub fn run(&mut self) -> Result<SessionEnd> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableFocusChange) {
			log::debug!("terminal does not report focus changes: {err}");
		}

		let result = self.event_loop(&mut terminal);

		let _ = execute!(io::stdout(), DisableFocusChange);
		ratatui::restore();
		result
	}

	pub(crate) fn conclude(&mut self, outcome: Result<SessionEnd>) -> Result<SessionEnd> {
		match outcome {
			Ok(end) => {
				self.finish(end);
				Ok(end)
			}
			Err(err) => {
				log::error!("terminal session failed: {err:#}");
				self.finish(SessionEnd::Leave);
				Err(err)
			}
		}
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<SessionEnd> {
		terminal.clear()?;
		loop {
			terminal.draw(|frame| self.draw(frame))?;

			if !event::poll(TICK)? {
				continue;
			}
			if let Some(end) = self.handle_event(event::read()?) {
				return Ok(end);
			}
		}
	}
}
