use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::{store::AppState, util::colors};

/// Bottom line: loading indicator, region errors and key hints.
pub struct StatusLine<'a> {
    state: &'a AppState,
    hints: &'a str,
}

impl<'a> StatusLine<'a> {
    pub fn new(state: &'a AppState, hints: &'a str) -> Self {
        Self { state, hints }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        if self.state.songs.loading || self.state.statistics.loading {
            spans.push(Span::styled(" syncing… ", Style::default().fg(colors::PRIMARY)));
        }
        if let Some(error) = &self.state.songs.error {
            spans.push(Span::styled(
                format!(" songs: {error} (x to clear) "),
                Style::default().fg(colors::ERROR),
            ));
        }
        if let Some(error) = &self.state.statistics.error {
            spans.push(Span::styled(
                format!(" statistics: {error} "),
                Style::default().fg(colors::ERROR),
            ));
        }
        spans.push(Span::styled(
            format!(" {}", self.hints),
            Style::default().fg(colors::NEUTRAL),
        ));

        Line::from(spans).render(area, buf);
    }
}
