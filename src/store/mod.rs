pub mod action;
pub mod songs;
pub mod statistics;
pub mod ticket;
pub mod ui;

use flume::{Receiver, Sender};
use tracing::debug;

pub use action::{Action, Request, RequestKind};
pub use songs::{SongFilter, SongsState};
pub use statistics::StatisticsState;
pub use ticket::{Ticket, Tickets};
pub use ui::{Notification, NotificationId, Severity, UiState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub songs: SongsState,
    pub statistics: StatisticsState,
    pub ui: UiState,
}

impl AppState {
    pub fn reduce(&mut self, action: &Action) {
        self.songs.reduce(action);
        self.statistics.reduce(action);
        self.ui.reduce(action);
    }
}

/// Single source of truth for application state. Constructed explicitly by
/// the composition root; nothing here is global.
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
    tickets: Tickets,
    revision: u64,
    subscribers: Vec<Sender<u64>>,
    disposed: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Receives the state revision after every committed action.
    pub fn subscribe(&mut self) -> Receiver<u64> {
        let (tx, rx) = flume::unbounded();
        if !self.disposed {
            self.subscribers.push(tx);
        }
        rx
    }

    /// Applies `action`. Request actions get a ticket the caller must hand
    /// back through [`Store::is_current`] before committing the result.
    pub fn dispatch(&mut self, action: &Action) -> Option<Ticket> {
        if self.disposed {
            debug!(?action, "dispatch after dispose ignored");
            return None;
        }

        let ticket = match action {
            Action::Request(request) => Some(self.tickets.issue(request.kind())),
            // Also drops any single-song fetch still in flight.
            Action::ClearCurrent => {
                self.tickets.cancel(RequestKind::One);
                None
            }
            _ => None,
        };

        self.state.reduce(action);
        self.revision += 1;

        let revision = self.revision;
        self.subscribers.retain(|tx| tx.send(revision).is_ok());

        ticket
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.tickets.is_current(ticket)
    }

    pub fn was_cancelled(&self, ticket: &Ticket) -> bool {
        self.tickets.was_cancelled(ticket)
    }

    pub fn dispose(&mut self) {
        self.subscribers.clear();
        self.disposed = true;
    }
}
