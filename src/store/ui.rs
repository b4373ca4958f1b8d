use std::fmt;

use super::action::Action;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        })
    }
}

/// Identifies one shown notification so that a stale auto-dismiss cannot
/// hide a newer one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub sidebar_open: bool,
    pub notification: Notification,
}

impl UiState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
            Action::ShowNotification { message, severity } => {
                self.notification = Notification {
                    id: NotificationId(self.notification.id.0 + 1),
                    message: message.clone(),
                    severity: *severity,
                    visible: true,
                };
            }
            Action::HideNotification => self.notification.visible = false,
            Action::ExpireNotification(id) => {
                if self.notification.id == *id {
                    self.notification.visible = false;
                }
            }
            _ => {}
        }
    }

    pub fn active_notification(&self) -> Option<&Notification> {
        self.notification.visible.then_some(&self.notification)
    }
}
