use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{FormErrors, FormField, SongFormData, SongId, validate},
    store::{Action, AppState, Request},
    ui::{
        components::spinner::Spinner,
        message::{AppMessage, ViewRoute},
        traits::View,
    },
    util::colors,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormMode {
    Create,
    Edit(SongId),
}

/// Create/edit form. In edit mode the draft is filled once the requested
/// song arrives as the current song.
pub struct SongForm {
    mode: FormMode,
    draft: SongFormData,
    focus: FormField,
    errors: FormErrors,
    populated: bool,
}

impl SongForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: SongFormData::default(),
            focus: FormField::Title,
            errors: FormErrors::default(),
            populated: true,
        }
    }

    pub fn edit(id: SongId) -> Self {
        Self {
            mode: FormMode::Edit(id),
            populated: false,
            ..Self::create()
        }
    }

    pub fn draft(&self) -> &SongFormData {
        &self.draft
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    /// Copies the loaded song into the draft the first time it shows up.
    pub fn sync_draft(&mut self, state: &AppState) {
        if self.populated {
            return;
        }
        let FormMode::Edit(id) = &self.mode else {
            return;
        };
        if let Some(song) = state.songs.current.as_ref().filter(|s| s.id == *id) {
            self.draft = SongFormData::from(song);
            self.populated = true;
        }
    }

    fn submit(&mut self) -> Option<AppMessage> {
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            return None;
        }

        let request = match &self.mode {
            FormMode::Create => Request::Create(self.draft.clone()),
            FormMode::Edit(id) => Request::Update {
                id: id.clone(),
                draft: self.draft.clone(),
            },
        };
        Some(AppMessage::Submit(Action::Request(request)))
    }

    fn edit_text(&mut self, key: KeyCode) {
        if self.focus == FormField::Genre {
            match key {
                KeyCode::Left => self.draft.cycle_genre(false),
                KeyCode::Right | KeyCode::Char(' ') => self.draft.cycle_genre(true),
                _ => return,
            }
        } else {
            let value = self.draft.field_mut(self.focus);
            match key {
                KeyCode::Char(c) => value.push(c),
                KeyCode::Backspace => {
                    value.pop();
                }
                _ => return,
            }
        }
        self.errors.clear(self.focus);
    }

    fn render_field(&self, f: &mut Frame, area: Rect, field: FormField) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1)])
            .split(area);

        let focused = self.focus == field;
        let error = self.errors.get(field);
        let border = match (focused, error) {
            (_, Some(_)) => colors::ERROR,
            (true, None) => colors::PRIMARY,
            (false, None) => colors::NEUTRAL,
        };

        let value = self.draft.field(field);
        let line = if field == FormField::Genre {
            Line::from(vec![
                Span::styled("< ", Style::default().fg(colors::NEUTRAL)),
                Span::raw(value),
                Span::styled(" >", Style::default().fg(colors::NEUTRAL)),
            ])
        } else if focused {
            Line::from(vec![
                Span::raw(value),
                Span::styled("_", Style::default().fg(colors::PRIMARY)),
            ])
        } else {
            Line::from(value)
        };

        let title = if focused {
            Span::styled(
                field.label(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(field.label())
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title),
        );
        f.render_widget(input, chunks[0]);

        if let Some(message) = error {
            f.render_widget(
                Paragraph::new(message).style(Style::default().fg(colors::ERROR)),
                chunks[1],
            );
        }
    }
}

impl View for SongForm {
    fn route(&self) -> ViewRoute {
        match &self.mode {
            FormMode::Create => ViewRoute::NewSong,
            FormMode::Edit(id) => ViewRoute::EditSong(id.clone()),
        }
    }

    fn on_mount(&mut self, _state: &AppState) -> Vec<Action> {
        match &self.mode {
            FormMode::Create => Vec::new(),
            FormMode::Edit(id) => vec![Request::One(id.clone()).into()],
        }
    }

    fn on_unmount(&mut self) -> Vec<Action> {
        vec![Action::ClearCurrent]
    }

    fn hints(&self) -> &'static str {
        "tab next field · ←/→ genre · enter save · esc cancel"
    }

    fn captures_input(&self) -> bool {
        true
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        self.sync_draft(state);

        if !self.populated {
            if let Some(error) = state.songs.error.as_deref().filter(|_| !state.songs.loading) {
                f.render_widget(
                    Paragraph::new(format!("Could not load song: {error}"))
                        .style(Style::default().fg(colors::ERROR)),
                    area,
                );
            } else {
                let spinner = Spinner::new()
                    .with_style(Style::default().fg(colors::PRIMARY))
                    .with_label("Loading song...");
                f.render_widget(spinner, area);
            }
            return;
        }

        let title = match self.mode {
            FormMode::Create => "Add a new song",
            FormMode::Edit(_) => "Edit song",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::NEUTRAL))
            .title(title);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Length(4),
                Constraint::Min(0),
            ])
            .split(inner);

        for (row, field) in rows.iter().zip(FormField::ALL) {
            self.render_field(f, *row, field);
        }
    }

    fn handle_input(&mut self, key: KeyEvent, _state: &AppState) -> Option<AppMessage> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match key.code {
            KeyCode::Esc => Some(AppMessage::GoBack),
            _ if !self.populated => None,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                None
            }
            KeyCode::Enter => self.submit(),
            code => {
                self.edit_text(code);
                None
            }
        }
    }
}
