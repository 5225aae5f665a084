use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	counter: Style::new().fg(Color::Rgb(120, 120, 0)),
	quote: Style::new().fg(Color::Rgb(15, 23, 42)),
	border: Style::new().fg(Color::Rgb(160, 160, 160)),
	key_enabled: Style::new()
		.fg(Color::Rgb(0, 102, 153))
		.add_modifier(Modifier::BOLD),
	key_disabled: Style::new().fg(Color::Rgb(180, 180, 180)),
	empty: Style::new()
		.fg(Color::Rgb(100, 100, 100))
		.add_modifier(Modifier::ITALIC),
};
