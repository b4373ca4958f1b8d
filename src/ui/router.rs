use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::{
    store::{Action, AppState},
    ui::{
        message::{AppMessage, ViewRoute},
        traits::View,
    },
};

/// Stack of views. The last one is active. Every mount/unmount returns the
/// actions the view asked for, which the caller dispatches.
pub struct Router {
    pub stack: Vec<Box<dyn View>>,
}

impl Router {
    pub fn new(initial_view: Box<dyn View>) -> Self {
        Self {
            stack: vec![initial_view],
        }
    }

    pub fn push(&mut self, mut view: Box<dyn View>, state: &AppState) -> Vec<Action> {
        let actions = view.on_mount(state);
        self.stack.push(view);
        actions
    }

    pub fn pop(&mut self) -> Vec<Action> {
        if self.stack.len() > 1 {
            if let Some(mut view) = self.stack.pop() {
                return view.on_unmount();
            }
        }
        Vec::new()
    }

    /// Unmounts everything and starts over from `view`.
    pub fn reset(&mut self, mut view: Box<dyn View>, state: &AppState) -> Vec<Action> {
        let mut actions: Vec<Action> = self
            .stack
            .drain(..)
            .rev()
            .flat_map(|mut v| v.on_unmount())
            .collect();
        actions.extend(view.on_mount(state));
        self.stack.push(view);
        actions
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn active_route(&self) -> Option<ViewRoute> {
        self.stack.last().map(|v| v.route())
    }

    pub fn hints(&self) -> &'static str {
        self.stack.last().map(|v| v.hints()).unwrap_or_default()
    }

    pub fn captures_input(&self) -> bool {
        self.stack.last().is_some_and(|v| v.captures_input())
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState) {
        if let Some(view) = self.stack.last_mut() {
            view.render(f, area, state);
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        self.stack
            .last_mut()
            .and_then(|view| view.handle_input(key, state))
    }
}
