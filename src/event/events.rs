use crate::store::{Action, NotificationId, Ticket};

/// Messages sent back to the UI task by background work.
#[derive(Debug, Clone)]
pub enum Event {
    /// A side-effect handler finished; `actions` are committed only if
    /// `ticket` is still current.
    Settled { ticket: Ticket, actions: Vec<Action> },
    NotificationExpired(NotificationId),
}
