use std::sync::Arc;

use ratatui::Frame;
use tracing::info;

use crate::{
    config::AppConfig,
    http::ApiService,
    store::{Action, Request},
    sync::SyncEngine,
    ui::{
        layout::AppLayout,
        message::{AppMessage, ViewRoute},
        router::Router,
        traits::View,
        views::{Dashboard, SongForm, SongsList},
    },
};

use super::{tui, util::handler::EventHandler};

pub struct App {
    pub engine: SyncEngine,
    pub router: Router,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> color_eyre::Result<Self> {
        let api = ApiService::new(config)?;
        info!(base_url = api.base_url(), "using catalog api");

        let engine = SyncEngine::new(Arc::new(api), config.notification_ttl);
        Ok(Self::with_engine(engine))
    }

    pub fn with_engine(engine: SyncEngine) -> Self {
        Self {
            engine,
            router: Router::new(Box::new(Dashboard)),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.engine.dispose();
        tui.exit()?;
        Ok(())
    }

    /// Initial loads, issued once the terminal is ready.
    pub fn mount(&mut self) {
        self.engine.dispatch(Action::Request(Request::List));
        self.engine.dispatch(Action::Request(Request::Statistics));
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::NavigateTo(route) => self.navigate(route),
            AppMessage::GoBack => self.go_back(),
            AppMessage::NextSidebarItem => {
                let next = (self.section_index() + 1) % ViewRoute::SECTIONS.len();
                self.open_section(next);
            }
            AppMessage::PreviousSidebarItem => {
                let len = ViewRoute::SECTIONS.len();
                let prev = (self.section_index() + len - 1) % len;
                self.open_section(prev);
            }
            AppMessage::SetSidebarIndex(index) => self.open_section(index),
            AppMessage::ToggleSidebar => self.engine.dispatch(Action::ToggleSidebar),
            AppMessage::DismissNotification => {
                if self.engine.state().ui.notification.visible {
                    self.engine.dispatch(Action::HideNotification);
                }
            }
            AppMessage::Dispatch(action) => self.engine.dispatch(action),
            AppMessage::Submit(action) => {
                self.engine.dispatch(action);
                self.go_back();
            }
        }
    }

    /// Pops the active view. A form opened from the sidebar has nothing
    /// beneath it, so it falls back to the song list.
    fn go_back(&mut self) {
        if self.router.depth() > 1 {
            let actions = self.router.pop();
            self.dispatch_all(actions);
        } else if matches!(
            self.router.active_route(),
            Some(ViewRoute::NewSong | ViewRoute::EditSong(_))
        ) {
            self.navigate(ViewRoute::Songs);
        }
    }

    pub fn section_index(&self) -> usize {
        self.router
            .stack
            .first()
            .map(|v| v.route().section_index())
            .unwrap_or(0)
    }

    fn open_section(&mut self, index: usize) {
        if let Some((_, route)) = ViewRoute::SECTIONS.into_iter().nth(index) {
            let view = Self::view_for(route);
            let actions = self.router.reset(view, self.engine.state());
            self.dispatch_all(actions);
        }
    }

    /// Forms stack on top of the current section; sections replace the stack.
    fn navigate(&mut self, route: ViewRoute) {
        let actions = match route {
            ViewRoute::NewSong | ViewRoute::EditSong(_) => {
                let view = Self::view_for(route);
                self.router.push(view, self.engine.state())
            }
            ViewRoute::Dashboard | ViewRoute::Songs => {
                let view = Self::view_for(route);
                self.router.reset(view, self.engine.state())
            }
        };
        self.dispatch_all(actions);
    }

    fn view_for(route: ViewRoute) -> Box<dyn View> {
        match route {
            ViewRoute::Dashboard => Box::new(Dashboard),
            ViewRoute::Songs => Box::new(SongsList::default()),
            ViewRoute::NewSong => Box::new(SongForm::create()),
            ViewRoute::EditSong(id) => Box::new(SongForm::edit(id)),
        }
    }

    fn dispatch_all(&mut self, actions: Vec<Action>) {
        for action in actions {
            self.engine.dispatch(action);
        }
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}
