use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

use crate::{
    model::{Statistics, Tally},
    store::{Action, AppState, Request},
    ui::{
        components::spinner::Spinner,
        message::{AppMessage, ViewRoute},
        traits::View,
        util::truncate,
    },
    util::colors,
};

const BAR_WIDTH: u16 = 7;

pub struct Dashboard;

impl View for Dashboard {
    fn route(&self) -> ViewRoute {
        ViewRoute::Dashboard
    }

    fn hints(&self) -> &'static str {
        "r refresh"
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let stats = match &state.statistics.data {
            Some(stats) if !state.statistics.loading => stats,
            _ => {
                let spinner = Spinner::new()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading statistics...");
                f.render_widget(spinner, area);
                return;
            }
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(50),
                Constraint::Percentage(50),
            ])
            .split(area);

        render_totals(f, rows[0], stats);

        let breakdowns = stats.breakdowns();
        for (row, pair) in rows[1..].iter().zip(breakdowns.chunks(2)) {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row);
            for (cell, (title, tallies)) in cells.iter().zip(pair) {
                render_chart(f, *cell, title, tallies);
            }
        }
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<AppMessage> {
        match key.code {
            KeyCode::Char('r') => Some(Action::Request(Request::Statistics).into()),
            KeyCode::Char('s') => Some(AppMessage::NavigateTo(ViewRoute::Songs)),
            _ => None,
        }
    }
}

fn render_totals(f: &mut Frame, area: Rect, stats: &Statistics) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (cell, (label, value)) in cells.iter().zip(stats.totals()) {
        let card = Paragraph::new(vec![
            Line::from(value.to_string()).style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::NEUTRAL))
                .title(label)
                .title_alignment(Alignment::Center),
        );
        f.render_widget(card, *cell);
    }
}

fn render_chart(f: &mut Frame, area: Rect, title: &str, tallies: &[Tally]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::NEUTRAL))
        .title(title);

    if tallies.is_empty() {
        f.render_widget(
            Paragraph::new("No data")
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = tallies
        .iter()
        .map(|t| {
            Bar::default()
                .label(Line::from(truncate(&t.label, BAR_WIDTH as usize)))
                .value(t.count)
                .style(Style::default().fg(colors::SECONDARY))
                .value_style(Style::default().fg(colors::BACKGROUND).bg(colors::SECONDARY))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));
    f.render_widget(chart, area);
}
