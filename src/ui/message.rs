use crate::{model::SongId, store::Action};

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,

    // Navigation
    NavigateTo(ViewRoute),
    GoBack,
    NextSidebarItem,
    PreviousSidebarItem,
    SetSidebarIndex(usize),
    ToggleSidebar,

    DismissNotification,

    /// Forwarded to the sync engine.
    Dispatch(Action),
    /// Dispatches a form submission and leaves the form for the song list.
    Submit(Action),
}

impl From<Action> for AppMessage {
    fn from(action: Action) -> Self {
        AppMessage::Dispatch(action)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRoute {
    Dashboard,
    Songs,
    NewSong,
    EditSong(SongId),
}

impl ViewRoute {
    /// Sections reachable from the sidebar, in display order.
    pub const SECTIONS: [(&'static str, ViewRoute); 3] = [
        ("Dashboard", ViewRoute::Dashboard),
        ("Songs", ViewRoute::Songs),
        ("Add song", ViewRoute::NewSong),
    ];

    pub fn section_index(&self) -> usize {
        match self {
            ViewRoute::Dashboard => 0,
            ViewRoute::Songs | ViewRoute::EditSong(_) => 1,
            ViewRoute::NewSong => 2,
        }
    }
}
