pub mod dashboard;
pub mod song_form;
pub mod songs_list;

pub use dashboard::Dashboard;
pub use song_form::SongForm;
pub use songs_list::SongsList;
