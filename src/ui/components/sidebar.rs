use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::{ui::message::ViewRoute, util::colors};

pub struct Sidebar {
    selected_index: usize,
}

impl Sidebar {
    pub fn new(selected_index: usize) -> Self {
        Self { selected_index }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = ViewRoute::SECTIONS
            .iter()
            .enumerate()
            .map(|(i, (label, _))| {
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::NEUTRAL)
                };
                ListItem::new(format!(" {} {}", i + 1, label)).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
