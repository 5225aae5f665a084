use super::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	counter: Style::new().fg(Color::Rgb(250, 204, 21)),
	quote: Style::new().fg(Color::Rgb(226, 232, 240)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	key_enabled: Style::new()
		.fg(Color::LightCyan)
		.add_modifier(Modifier::BOLD),
	key_disabled: Style::new().fg(Color::DarkGray),
	empty: Style::new()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC),
};
