use crate::model::{Song, SongFormData, SongId, Statistics};

use super::ui::{NotificationId, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    List,
    One,
    Create,
    Update,
    Delete,
    Statistics,
}

impl RequestKind {
    /// Read kinds follow "latest wins": a newer request of the same kind makes
    /// older completions stale.
    pub fn supersedes(&self) -> bool {
        matches!(
            self,
            RequestKind::List | RequestKind::One | RequestKind::Statistics
        )
    }
}

/// Work handed to a side-effect handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    List,
    One(SongId),
    Create(SongFormData),
    Update { id: SongId, draft: SongFormData },
    Delete(SongId),
    Statistics,
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::List => RequestKind::List,
            Request::One(_) => RequestKind::One,
            Request::Create(_) => RequestKind::Create,
            Request::Update { .. } => RequestKind::Update,
            Request::Delete(_) => RequestKind::Delete,
            Request::Statistics => RequestKind::Statistics,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::large_enum_variant)]
pub enum Action {
    Request(Request),

    // Songs
    ReceiveList(Vec<Song>),
    FailList(String),
    ReceiveOne(Song),
    FailOne(String),
    ReceiveCreate(Song),
    FailCreate(String),
    ReceiveUpdate(Song),
    FailUpdate(String),
    ReceiveDelete(SongId),
    FailDelete(String),
    ClearCurrent,
    ClearErrors,
    /// A cancelled request settled. Only its loading flag is reset.
    Abandoned(RequestKind),

    // Statistics
    ReceiveStatistics(Statistics),
    FailStatistics(String),

    // UI
    ToggleSidebar,
    ShowNotification { message: String, severity: Severity },
    HideNotification,
    ExpireNotification(NotificationId),
}

impl Action {
    pub fn notify(message: impl Into<String>, severity: Severity) -> Self {
        Action::ShowNotification {
            message: message.into(),
            severity,
        }
    }
}

impl From<Request> for Action {
    fn from(request: Request) -> Self {
        Action::Request(request)
    }
}
