use tracing::warn;

use crate::model::{Song, SongId};

use super::action::{Action, Request, RequestKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SongsState {
    pub songs: Vec<Song>,
    pub current: Option<Song>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Client-side list filter. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongFilter {
    pub genre: Option<String>,
    pub artist: Option<String>,
}

impl SongFilter {
    pub fn matches(&self, song: &Song) -> bool {
        self.genre.as_ref().is_none_or(|g| *g == song.genre)
            && self.artist.as_ref().is_none_or(|a| *a == song.artist)
    }

    pub fn is_active(&self) -> bool {
        self.genre.is_some() || self.artist.is_some()
    }
}

impl SongsState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::Request(request) => {
                if !matches!(request, Request::Statistics) {
                    self.loading = true;
                    self.error = None;
                }
            }
            Action::ReceiveList(songs) => {
                self.songs = songs.clone();
                self.loading = false;
            }
            Action::ReceiveOne(song) => {
                self.current = Some(song.clone());
                self.loading = false;
            }
            Action::ReceiveCreate(song) => {
                self.songs.push(song.clone());
                self.loading = false;
            }
            Action::ReceiveUpdate(song) => {
                match self.songs.iter_mut().find(|s| s.id == song.id) {
                    Some(existing) => *existing = song.clone(),
                    None => {
                        warn!(id = %song.id, "updated song missing from collection, appending");
                        self.songs.push(song.clone());
                    }
                }
                self.current = None;
                self.loading = false;
            }
            Action::ReceiveDelete(id) => {
                self.songs.retain(|s| s.id != *id);
                self.loading = false;
            }
            Action::FailList(message)
            | Action::FailOne(message)
            | Action::FailCreate(message)
            | Action::FailUpdate(message)
            | Action::FailDelete(message) => {
                self.loading = false;
                self.error = Some(message.clone());
            }
            Action::ClearCurrent => self.current = None,
            Action::Abandoned(kind) if *kind != RequestKind::Statistics => self.loading = false,
            Action::ClearErrors => self.error = None,
            _ => {}
        }
    }

    pub fn get(&self, id: &SongId) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == *id)
    }

    /// Distinct genres in first-seen order.
    pub fn genres(&self) -> Vec<&str> {
        distinct(self.songs.iter().map(|s| s.genre.as_str()))
    }

    /// Distinct artists in first-seen order.
    pub fn artists(&self) -> Vec<&str> {
        distinct(self.songs.iter().map(|s| s.artist.as_str()))
    }

    pub fn filtered(&self, filter: &SongFilter) -> Vec<&Song> {
        self.songs.iter().filter(|s| filter.matches(s)).collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}
