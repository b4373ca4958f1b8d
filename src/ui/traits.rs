use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    store::{Action, AppState},
    ui::message::{AppMessage, ViewRoute},
};

pub trait View: Send {
    fn route(&self) -> ViewRoute;

    /// Actions to dispatch when the view becomes active.
    fn on_mount(&mut self, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Actions to dispatch when the view is removed from the stack.
    fn on_unmount(&mut self) -> Vec<Action> {
        Vec::new()
    }

    /// Key hints for the status line.
    fn hints(&self) -> &'static str {
        ""
    }

    fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState);

    fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<AppMessage>;

    /// While true, plain character keys belong to the view and global
    /// shortcuts are skipped.
    fn captures_input(&self) -> bool {
        false
    }
}
