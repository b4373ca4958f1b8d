use serde::{Deserialize, Serialize};

/// One label/count row of a breakdown. The server names the label after the
/// grouping key (`genre`, `artist` or `album`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    #[serde(alias = "genre", alias = "artist", alias = "album")]
    pub label: String,
    pub count: u64,
}

/// Aggregate snapshot computed server-side. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_songs: u64,
    pub total_artists: u64,
    pub total_albums: u64,
    pub total_genres: u64,
    #[serde(default)]
    pub songs_per_genre: Vec<Tally>,
    #[serde(default)]
    pub songs_per_artist: Vec<Tally>,
    #[serde(default)]
    pub albums_per_artist: Vec<Tally>,
    #[serde(default)]
    pub songs_per_album: Vec<Tally>,
}

impl Statistics {
    pub fn totals(&self) -> [(&'static str, u64); 4] {
        [
            ("Total Songs", self.total_songs),
            ("Total Artists", self.total_artists),
            ("Total Albums", self.total_albums),
            ("Total Genres", self.total_genres),
        ]
    }

    pub fn breakdowns(&self) -> [(&'static str, &[Tally]); 4] {
        [
            ("Songs by Genre", &self.songs_per_genre),
            ("Songs per Artist", &self.songs_per_artist),
            ("Albums per Artist", &self.albums_per_artist),
            ("Songs per Album", &self.songs_per_album),
        ]
    }
}
