//! Navigation and key routing through the app shell, without a terminal.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use songdeck::http::{ApiError, CatalogApi, Result as ApiResult};
use songdeck::model::{Song, SongFormData, SongId, Statistics};
use songdeck::store::{Action, Severity};
use songdeck::sync::SyncEngine;
use songdeck::ui::app::App;
use songdeck::ui::message::{AppMessage, ViewRoute};
use songdeck::ui::util::handler::EventHandler;

/// Echoes drafts back as songs; reads are always empty.
struct EchoApi;

impl EchoApi {
    fn stamp(&self, id: &str, title: &str) -> Song {
        Song {
            id: id.into(),
            title: title.into(),
            artist: "Mulatu".into(),
            album: "Ethiopiques".into(),
            genre: "Jazz".into(),
            created_at: "t".into(),
            updated_at: "t".into(),
        }
    }
}

#[async_trait]
impl CatalogApi for EchoApi {
    async fn fetch_songs(&self) -> ApiResult<Vec<Song>> {
        Ok(Vec::new())
    }

    async fn fetch_song(&self, _id: &SongId) -> ApiResult<Song> {
        Err(ApiError::Status { status: 404 })
    }

    async fn create_song(&self, draft: &SongFormData) -> ApiResult<Song> {
        let mut song = self.stamp("echo", &draft.title);
        song.artist = draft.artist.clone();
        song.album = draft.album.clone();
        song.genre = draft.genre.clone();
        Ok(song)
    }

    async fn update_song(&self, _id: &SongId, _draft: &SongFormData) -> ApiResult<Song> {
        Err(ApiError::Status { status: 404 })
    }

    async fn delete_song(&self, _id: &SongId) -> ApiResult<()> {
        Ok(())
    }

    async fn fetch_statistics(&self) -> ApiResult<Statistics> {
        Ok(Statistics::default())
    }
}

fn app() -> App {
    App::with_engine(SyncEngine::new(Arc::new(EchoApi), Duration::from_secs(5)))
}

fn press(app: &mut App, code: KeyCode) {
    EventHandler::handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

async fn settle(app: &mut App) {
    loop {
        app.engine.pump();
        if app.engine.in_flight() == 0 {
            break;
        }
        tokio::time::timeout(Duration::from_secs(5), app.engine.process_next())
            .await
            .expect("handler never settled");
    }
}

mod navigation {
    use super::*;

    #[tokio::test]
    async fn mount_loads_songs_and_statistics() {
        let mut app = app();
        app.mount();
        assert_eq!(app.engine.in_flight(), 2);

        settle(&mut app).await;
        assert!(app.engine.state().statistics.data.is_some());
        assert!(!app.engine.state().songs.loading);
    }

    #[tokio::test]
    async fn number_keys_switch_sections() {
        let mut app = app();
        assert_eq!(app.router.active_route(), Some(ViewRoute::Dashboard));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.router.active_route(), Some(ViewRoute::Songs));
        assert_eq!(app.section_index(), 1);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.router.active_route(), Some(ViewRoute::NewSong));
    }

    #[tokio::test]
    async fn tab_wraps_through_sections() {
        let mut app = app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.router.active_route(), Some(ViewRoute::NewSong));

        // The form keeps Tab for its fields.
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.router.active_route(), Some(ViewRoute::NewSong));
    }

    #[tokio::test]
    async fn sidebar_toggles_outside_forms() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(app.engine.state().ui.sidebar_open);

        app.update(AppMessage::NavigateTo(ViewRoute::NewSong));
        press(&mut app, KeyCode::Char('b'));
        assert!(app.engine.state().ui.sidebar_open);
    }

    #[tokio::test]
    async fn q_quits_but_not_inside_form() {
        let mut app = app();
        app.update(AppMessage::NavigateTo(ViewRoute::NewSong));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

mod song_form {
    use super::*;

    #[tokio::test]
    async fn valid_form_creates_and_returns_to_list() {
        let mut app = app();
        app.update(AppMessage::NavigateTo(ViewRoute::Songs));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.router.active_route(), Some(ViewRoute::NewSong));
        assert_eq!(app.router.depth(), 2);

        type_text(&mut app, "Ambassel");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Mulatu");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Ethiopiques");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.router.active_route(), Some(ViewRoute::Songs));
        settle(&mut app).await;

        let songs = &app.engine.state().songs.songs;
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].title, "Ambassel");
        assert_eq!(songs[0].genre, "Pop");
    }

    #[tokio::test]
    async fn invalid_form_stays_open_without_request() {
        let mut app = app();
        app.update(AppMessage::NavigateTo(ViewRoute::NewSong));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.router.active_route(), Some(ViewRoute::NewSong));
        assert_eq!(app.engine.in_flight(), 0);
    }

    #[tokio::test]
    async fn edit_form_requests_song_and_clears_it_on_exit() {
        let mut app = app();
        app.update(AppMessage::NavigateTo(ViewRoute::Songs));
        app.update(AppMessage::NavigateTo(ViewRoute::EditSong("7".into())));
        assert_eq!(app.engine.in_flight(), 1);

        settle(&mut app).await;
        assert!(app.engine.state().songs.error.is_some());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.router.active_route(), Some(ViewRoute::Songs));
        assert!(app.engine.state().songs.current.is_none());
    }

    #[tokio::test]
    async fn delete_prompt_swallows_global_keys() {
        let mut app = app();
        app.engine
            .dispatch(Action::ReceiveList(vec![EchoApi.stamp("1", "Tizita")]));
        app.update(AppMessage::NavigateTo(ViewRoute::Songs));
        app.engine.dispatch(Action::notify("loaded", Severity::Info));

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('1'));
        assert!(!app.should_quit);
        assert_eq!(app.router.active_route(), Some(ViewRoute::Songs));

        press(&mut app, KeyCode::Esc);
        assert!(app.engine.state().ui.notification.visible);
        assert_eq!(app.engine.in_flight(), 0);
        assert_eq!(app.engine.state().songs.songs.len(), 1);
    }

    #[tokio::test]
    async fn x_clears_region_errors_from_list() {
        let mut app = app();
        app.update(AppMessage::NavigateTo(ViewRoute::Songs));
        app.engine.dispatch(Action::FailList("boom".into()));
        assert!(app.engine.state().songs.error.is_some());

        press(&mut app, KeyCode::Char('x'));
        assert!(app.engine.state().songs.error.is_none());
    }
}
