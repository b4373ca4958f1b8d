use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    model::{Song, SongId},
    store::{Action, AppState, Request, SongFilter},
    ui::{
        components::spinner::Spinner,
        message::{AppMessage, ViewRoute},
        traits::View,
    },
    util::colors,
};

#[derive(Default)]
pub struct SongsList {
    table_state: TableState,
    filter: SongFilter,
    confirm_delete: Option<(SongId, String)>,
}

impl SongsList {
    pub fn filter(&self) -> &SongFilter {
        &self.filter
    }

    pub fn pending_delete(&self) -> Option<&SongId> {
        self.confirm_delete.as_ref().map(|(id, _)| id)
    }

    fn selected<'a>(&self, songs: &[&'a Song]) -> Option<&'a Song> {
        self.table_state
            .selected()
            .and_then(|i| songs.get(i).copied())
    }

    fn select(&mut self, index: Option<usize>) {
        self.table_state.select(index);
    }

    fn cycle(current: &Option<String>, options: &[&str]) -> Option<String> {
        let next = match current {
            None => 0,
            Some(value) => match options.iter().position(|o| *o == value.as_str()) {
                Some(i) => i + 1,
                None => 0,
            },
        };
        options.get(next).map(|o| o.to_string())
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let label = |name: &str, value: &Option<String>, key: &str| {
            vec![
                Span::styled(format!("{name}: "), Style::default().fg(colors::NEUTRAL)),
                Span::styled(
                    value.clone().unwrap_or_else(|| format!("All {name}s")),
                    Style::default().fg(colors::ACCENT),
                ),
                Span::styled(format!(" ({key})   "), Style::default().fg(colors::NEUTRAL)),
            ]
        };

        let mut spans = label("Genre", &self.filter.genre, "f");
        spans.extend(label("Artist", &self.filter.artist, "a"));
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_empty(&self, f: &mut Frame, area: Rect, catalog_empty: bool) {
        let (title, body) = if catalog_empty {
            (
                "No songs found",
                "Start by adding your first song to the catalog (n).",
            )
        } else {
            (
                "No songs match the selected filters",
                "Try adjusting your filters to see more results.",
            )
        };

        let text = vec![
            Line::from(title).style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::from(body).style(Style::default().fg(colors::NEUTRAL)),
        ];
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }
}

impl View for SongsList {
    fn route(&self) -> ViewRoute {
        ViewRoute::Songs
    }

    fn hints(&self) -> &'static str {
        if self.confirm_delete.is_some() {
            "y delete · n keep"
        } else {
            "n new · e edit · d delete · f/a filter · r refresh"
        }
    }

    /// The delete prompt owns every key until it is answered.
    fn captures_input(&self) -> bool {
        self.confirm_delete.is_some()
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        let songs_state = &state.songs;
        if songs_state.loading && songs_state.songs.is_empty() {
            let spinner = Spinner::new()
                .with_style(Style::default().fg(colors::PRIMARY))
                .with_label("Loading songs...");
            f.render_widget(spinner, area);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(if self.confirm_delete.is_some() { 3 } else { 0 }),
            ])
            .split(area);

        self.render_filters(f, chunks[0]);

        let songs = songs_state.filtered(&self.filter);
        if songs.is_empty() {
            self.render_empty(f, chunks[2], songs_state.songs.is_empty());
        } else {
            match self.table_state.selected() {
                None => self.select(Some(0)),
                Some(i) if i >= songs.len() => self.select(Some(songs.len() - 1)),
                _ => {}
            }

            let rows = songs.iter().map(|song| {
                Row::new(vec![
                    Cell::from(song.title.as_str()),
                    Cell::from(song.artist.as_str()),
                    Cell::from(song.album.as_str()),
                    Cell::from(song.genre.as_str()),
                ])
            });
            let header = Row::new(vec!["Title", "Artist", "Album", "Genre"]).style(
                Style::default()
                    .fg(colors::NEUTRAL)
                    .add_modifier(Modifier::BOLD),
            );
            let table = Table::new(
                rows,
                [
                    Constraint::Percentage(35),
                    Constraint::Percentage(25),
                    Constraint::Percentage(25),
                    Constraint::Percentage(15),
                ],
            )
            .header(header)
            .row_highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

            f.render_widget(
                Paragraph::new(format!("{} of {} songs", songs.len(), songs_state.songs.len()))
                    .style(Style::default().fg(colors::NEUTRAL)),
                chunks[1],
            );
            f.render_stateful_widget(table, chunks[2], &mut self.table_state);
        }

        if let Some((_, title)) = &self.confirm_delete {
            let prompt = Paragraph::new(format!("Delete \"{title}\"? (y/n)"))
                .style(Style::default().fg(colors::ERROR))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(prompt, chunks[3]);
        }
    }

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        if let Some((id, _)) = &self.confirm_delete {
            let msg = match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    Some(Action::Request(Request::Delete(id.clone())).into())
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => None,
                _ => return None,
            };
            self.confirm_delete = None;
            return msg;
        }

        let songs = state.songs.filtered(&self.filter);
        let len = songs.len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 {
                    let i = self
                        .table_state
                        .selected()
                        .map_or(0, |i| if i >= len - 1 { i } else { i + 1 });
                    self.select(Some(i));
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if len > 0 {
                    let i = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
                    self.select(Some(i));
                }
                None
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.select(Some(0));
                }
                None
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.select(Some(len - 1));
                }
                None
            }
            KeyCode::Char('f') => {
                self.filter.genre = Self::cycle(&self.filter.genre, &state.songs.genres());
                self.select(None);
                None
            }
            KeyCode::Char('a') => {
                self.filter.artist = Self::cycle(&self.filter.artist, &state.songs.artists());
                self.select(None);
                None
            }
            KeyCode::Char('n') => Some(AppMessage::NavigateTo(ViewRoute::NewSong)),
            KeyCode::Char('e') | KeyCode::Enter => self
                .selected(&songs)
                .map(|song| AppMessage::NavigateTo(ViewRoute::EditSong(song.id.clone()))),
            KeyCode::Char('d') => {
                if let Some(song) = self.selected(&songs) {
                    self.confirm_delete = Some((song.id.clone(), song.title.clone()));
                }
                None
            }
            KeyCode::Char('r') => Some(Action::Request(Request::List).into()),
            _ => None,
        }
    }
}
