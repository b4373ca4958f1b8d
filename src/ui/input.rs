use crate::{
    store::Action,
    ui::message::AppMessage,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Global shortcuts, consulted after the active view declined the key.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, text_input: bool) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Some(AppMessage::Quit),
            (KeyCode::Tab, _) if !text_input => return Some(AppMessage::NextSidebarItem),
            (KeyCode::BackTab, _) if !text_input => {
                return Some(AppMessage::PreviousSidebarItem);
            }
            (KeyCode::Esc, _) if !text_input => return Some(AppMessage::DismissNotification),
            _ => {}
        }

        if text_input {
            return None;
        }

        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char('b') => Some(AppMessage::ToggleSidebar),
            KeyCode::Char('x') => Some(Action::ClearErrors.into()),
            KeyCode::Char('1') => Some(AppMessage::SetSidebarIndex(0)),
            KeyCode::Char('2') => Some(AppMessage::SetSidebarIndex(1)),
            KeyCode::Char('3') => Some(AppMessage::SetSidebarIndex(2)),
            _ => None,
        }
    }
}
