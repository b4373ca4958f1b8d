pub mod form;
pub mod song;
pub mod statistics;

pub use form::{FormErrors, FormField, GENRES, SongFormData, validate};
pub use song::{Song, SongId};
pub use statistics::{Statistics, Tally};
