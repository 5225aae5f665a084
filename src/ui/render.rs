use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, Padding, Paragraph, Wrap},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use crate::browser::{ActionAvailability, QuoteView};

const LOG_PANE_HEIGHT: u16 = 8;

impl App {
	pub(crate) fn draw(&self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let log_height = if self.show_log { LOG_PANE_HEIGHT } else { 0 };
		let [header, body, log, footer] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(log_height),
			Constraint::Length(1),
		])
		.areas(area);

		let display = self.display();
		self.render_header(frame, header, &display.view);
		self.render_quote(frame, body, &display.view);
		if self.show_log {
			self.render_log(frame, log);
		}
		self.render_footer(frame, footer, display.actions);
	}

	fn render_header(&self, frame: &mut Frame, area: Rect, view: &QuoteView<'_>) {
		let title = Paragraph::new(self.ui.title.as_str()).style(self.theme.title_style());
		frame.render_widget(title, area);

		if let QuoteView::Quote { counter, .. } = view {
			let counter = Paragraph::new(counter.to_string())
				.alignment(Alignment::Right)
				.style(self.theme.counter_style());
			frame.render_widget(counter, area);
		}
	}

	fn render_quote(&self, frame: &mut Frame, area: Rect, view: &QuoteView<'_>) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(self.theme.border_style())
			.padding(Padding::new(2, 2, 1, 1));

		let paragraph = match view {
			QuoteView::Quote { text, .. } => Paragraph::new(*text).style(self.theme.quote_style()),
			QuoteView::Empty => {
				Paragraph::new(self.ui.empty_message.as_str()).style(self.theme.empty_style())
			}
		};

		frame.render_widget(
			paragraph
				.block(block)
				.alignment(Alignment::Center)
				.wrap(Wrap { trim: true }),
			area,
		);
	}

	fn render_log(&self, frame: &mut Frame, area: Rect) {
		let widget = TuiLoggerWidget::default()
			.block(
				Block::default()
					.borders(Borders::ALL)
					.border_style(self.theme.border_style())
					.title(format!(" {} ", self.ui.hints.log)),
			)
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.output_target(false);
		frame.render_widget(widget, area);
	}

	fn render_footer(&self, frame: &mut Frame, area: Rect, actions: ActionAvailability) {
		let hints = &self.ui.hints;
		let entries = [
			("←", hints.previous.as_str(), actions.previous),
			("→", hints.next.as_str(), actions.next),
			("d", hints.delete.as_str(), actions.delete),
			("q", hints.quit.as_str(), true),
			("L", hints.log.as_str(), true),
		];

		let mut spans = Vec::with_capacity(entries.len() * 3);
		for (index, (key, label, enabled)) in entries.into_iter().enumerate() {
			if index > 0 {
				spans.push(Span::raw("  "));
			}
			spans.push(Span::styled(key, self.theme.key_style(enabled)));
			spans.push(Span::styled(format!(" {label}"), self.theme.key_label_style(enabled)));
		}

		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
