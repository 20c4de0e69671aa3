use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::ThemeColors;

/// Key hints shown when there is no status message.
pub const HELP_TEXT: &str = "Tab: Switch panels | Up/Down: Navigate/Scroll | Enter: Open | PgUp/PgDn: Scroll file | r: Refresh | q: Quit";

/// Bottom line: key hints, or an error message while one is active.
pub struct StatusBarWidget<'a> {
    theme: &'a ThemeColors,
    status_message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(theme: &'a ThemeColors) -> Self {
        Self {
            theme,
            status_message: None,
        }
    }

    pub fn status_message(mut self, msg: &'a str) -> Self {
        self.status_message = Some(msg);
        self
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let (text, style) = match self.status_message {
            Some(msg) => (
                msg,
                Style::default()
                    .bg(self.theme.error_fg)
                    .fg(self.theme.help_fg)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                HELP_TEXT,
                Style::default().bg(self.theme.help_bg).fg(self.theme.help_fg),
            ),
        };

        // Fill the whole line so the bar reads as one solid strip
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), style);
        let line = Line::from(Span::styled(text, style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
