use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::song::Song;

pub const GENRES: [&str; 15] = [
    "Pop",
    "Rock",
    "Hip Hop",
    "R&B",
    "Country",
    "Jazz",
    "Classical",
    "Electronic",
    "Folk",
    "Reggae",
    "Blues",
    "Metal",
    "Punk",
    "Soul",
    "Alternative",
];

/// Editable draft submitted on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongFormData {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
}

impl Default for SongFormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            album: String::new(),
            genre: GENRES[0].to_string(),
        }
    }
}

impl From<&Song> for SongFormData {
    fn from(song: &Song) -> Self {
        Self {
            title: song.title.clone(),
            artist: song.artist.clone(),
            album: song.album.clone(),
            genre: song.genre.clone(),
        }
    }
}

impl SongFormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Artist => &self.artist,
            FormField::Album => &self.album,
            FormField::Genre => &self.genre,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Artist => &mut self.artist,
            FormField::Album => &mut self.album,
            FormField::Genre => &mut self.genre,
        }
    }

    /// Moves the genre to the neighbouring option. An unknown genre jumps to
    /// the first option.
    pub fn cycle_genre(&mut self, forward: bool) {
        let next = match GENRES.iter().position(|g| *g == self.genre) {
            Some(i) if forward => (i + 1) % GENRES.len(),
            Some(i) => (i + GENRES.len() - 1) % GENRES.len(),
            None => 0,
        };
        self.genre = GENRES[next].to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Title,
    Artist,
    Album,
    Genre,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Title,
        FormField::Artist,
        FormField::Album,
        FormField::Genre,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Artist => "Artist",
            FormField::Album => "Album",
            FormField::Genre => "Genre",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Title => FormField::Artist,
            FormField::Artist => FormField::Album,
            FormField::Album => FormField::Genre,
            FormField::Genre => FormField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Title => FormField::Genre,
            FormField::Artist => FormField::Title,
            FormField::Album => FormField::Artist,
            FormField::Genre => FormField::Album,
        }
    }
}

/// Per-field validation messages. A missing entry means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, String>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

pub fn validate(draft: &SongFormData) -> FormErrors {
    let mut errors = FormErrors::default();

    for field in [FormField::Title, FormField::Artist, FormField::Album] {
        if draft.field(field).trim().is_empty() {
            let message = match field {
                FormField::Title => "Title is required",
                FormField::Artist => "Artist is required",
                _ => "Album is required",
            };
            errors.insert(field, message);
        }
    }

    if draft.genre.is_empty() {
        errors.insert(FormField::Genre, "Genre is required");
    } else if !GENRES.contains(&draft.genre.as_str()) {
        errors.insert(FormField::Genre, "Select a genre from the list");
    }

    errors
}
