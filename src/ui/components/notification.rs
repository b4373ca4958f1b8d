use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::{store::Notification, util::colors};

const MAX_WIDTH: u16 = 48;

/// Toast shown in the top-right corner of `area`.
pub struct Toast<'a> {
    notification: &'a Notification,
}

impl<'a> Toast<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }

    /// Where the toast lands inside `area`.
    pub fn placement(&self, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width);
        let inner = width.saturating_sub(2).max(1) as usize;
        let lines = self.notification.message.chars().count().div_ceil(inner).max(1) as u16;
        let height = (lines + 2).min(area.height);

        Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height,
        }
    }
}

impl Widget for Toast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = self.placement(area);
        if rect.width < 3 || rect.height < 3 {
            return;
        }

        let color = colors::severity(self.notification.severity);
        let title = Line::from(vec![Span::styled(
            format!(" {} ", self.notification.severity),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_bottom(Line::from(" esc ").right_aligned());

        Clear.render(rect, buf);
        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(block)
            .render(rect, buf);
    }
}
