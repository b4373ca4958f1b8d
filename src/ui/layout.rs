use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{notification::Toast, sidebar::Sidebar, status::StatusLine},
    },
    util::colors,
};

const SIDEBAR_WIDTH: u16 = 22;
const GLOBAL_HINTS: &str = "tab/1-3 section · b sidebar · q quit";

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let main_area = chunks[0];
        let status_area = chunks[1];

        let state = self.app.engine.state();
        let content_area = if state.ui.sidebar_open {
            let main_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
                .split(main_area);

            let sidebar_block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title("songdeck")
                .title_alignment(Alignment::Center);
            let sidebar_inner = sidebar_block.inner(main_chunks[0]);

            f.render_widget(sidebar_block, main_chunks[0]);
            f.render_widget(Sidebar::new(self.app.section_index()), sidebar_inner);
            main_chunks[1]
        } else {
            main_area
        };

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app.router.render(f, content_inner, self.app.engine.state());

        let state = self.app.engine.state();
        let hints = format!("{} · {}", self.app.router.hints(), GLOBAL_HINTS);
        f.render_widget(StatusLine::new(state, hints.trim_start_matches(" · ")), status_area);

        if let Some(notification) = state.ui.active_notification() {
            f.render_widget(Toast::new(notification), main_area);
        }
    }
}
