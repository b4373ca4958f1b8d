use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::debug;

use crate::ui::{
    app::App,
    input::InputHandler,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for one terminal event, then applies whatever background work
    /// has settled in the meantime.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        if app.engine.pump() {
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.mount(),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick => return Ok(app.has_focus),
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }

        let text_input = app.router.captures_input();
        if let Some(msg) = app.router.handle_input(evt, app.engine.state()) {
            debug!(?msg, "view message");
            app.update(msg);
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt, text_input) {
            app.update(msg);
        }
    }
}
