//! HTTP client tests against a mock catalog server.

use std::time::Duration;

use serde_json::json;
use songdeck::http::{ApiError, ApiService, CatalogApi};
use songdeck::model::{SongFormData, SongId};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn song_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "title": title,
        "artist": "Aster Aweke",
        "album": "Kabu",
        "genre": "Soul",
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-01T00:00:00.000Z",
        "__v": 0
    })
}

fn draft(title: &str) -> SongFormData {
    SongFormData {
        title: title.into(),
        artist: "Aster Aweke".into(),
        album: "Kabu".into(),
        genre: "Soul".into(),
    }
}

async fn client(server: &MockServer) -> ApiService {
    ApiService::with_timeout(&server.uri(), Some(Duration::from_secs(5))).unwrap()
}

// =============================================================================
// Client Creation
// =============================================================================

mod client_creation {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(ApiService::with_timeout("https://example.com/api", None).is_ok());
        assert!(ApiService::with_timeout("http://localhost:5000/api", None).is_ok());
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = ApiService::with_timeout("http://localhost:5000/api/", None).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn empty_url_rejected() {
        match ApiService::with_timeout("", None) {
            Err(ApiError::InvalidUrl(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected InvalidUrl, got {:?}", other.err()),
        }
    }

    #[test]
    fn url_without_scheme_rejected() {
        match ApiService::with_timeout("example.com/api", None) {
            Err(ApiError::InvalidUrl(msg)) => assert!(msg.contains("http://")),
            other => panic!("expected InvalidUrl, got {:?}", other.err()),
        }
    }
}

// =============================================================================
// Songs
// =============================================================================

mod songs {
    use super::*;

    #[tokio::test]
    async fn fetch_songs_keeps_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([song_json("b", "Second"), song_json("a", "First")])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let songs = client(&server).await.fetch_songs().await.unwrap();

        let ids: Vec<&str> = songs.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(songs[0].title, "Second");
    }

    #[tokio::test]
    async fn fetch_song_by_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(song_json("abc", "Tizita")))
            .mount(&server)
            .await;

        let song = client(&server)
            .await
            .fetch_song(&SongId::from("abc"))
            .await
            .unwrap();

        assert_eq!(song.id, SongId::from("abc"));
        assert_eq!(song.created_at, "2024-01-01T00:00:00.000Z");
    }

    #[tokio::test]
    async fn create_posts_draft_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/songs"))
            .and(body_json(json!({
                "title": "New",
                "artist": "Aster Aweke",
                "album": "Kabu",
                "genre": "Soul"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(song_json("n1", "New")))
            .expect(1)
            .mount(&server)
            .await;

        let song = client(&server)
            .await
            .create_song(&draft("New"))
            .await
            .unwrap();

        assert_eq!(song.id, SongId::from("n1"));
    }

    #[tokio::test]
    async fn update_puts_to_song_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/songs/abc"))
            .and(body_json(json!({
                "title": "Renamed",
                "artist": "Aster Aweke",
                "album": "Kabu",
                "genre": "Soul"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(song_json("abc", "Renamed")))
            .expect(1)
            .mount(&server)
            .await;

        let song = client(&server)
            .await
            .update_song(&SongId::from("abc"), &draft("Renamed"))
            .await
            .unwrap();

        assert_eq!(song.title, "Renamed");
    }

    #[tokio::test]
    async fn delete_ignores_response_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/songs/abc"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Song deleted"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server)
            .await
            .delete_song(&SongId::from("abc"))
            .await;

        assert!(result.is_ok());
    }
}

// =============================================================================
// Statistics
// =============================================================================

mod statistics {
    use super::*;

    #[tokio::test]
    async fn fetch_statistics_maps_breakdowns() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/statistics"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "totalSongs": 3,
                "totalArtists": 2,
                "totalAlbums": 2,
                "totalGenres": 1,
                "songsPerGenre": [{"genre": "Soul", "count": 3}],
                "songsPerArtist": [{"artist": "Aster Aweke", "count": 2}],
                "albumsPerArtist": [{"artist": "Aster Aweke", "count": 1}],
                "songsPerAlbum": [{"album": "Kabu", "count": 2}]
            })))
            .mount(&server)
            .await;

        let stats = client(&server).await.fetch_statistics().await.unwrap();

        assert_eq!(stats.total_songs, 3);
        assert_eq!(stats.songs_per_genre[0].label, "Soul");
        assert_eq!(stats.songs_per_album[0].count, 2);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

mod errors {
    use super::*;

    #[tokio::test]
    async fn non_success_status_becomes_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .fetch_song(&SongId::from("missing"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404 }));
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[tokio::test]
    async fn server_error_on_mutation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server)
            .await
            .create_song(&draft("x"))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 500 }));
    }

    #[tokio::test]
    async fn malformed_body_is_a_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/songs"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server).await.fetch_songs().await.unwrap_err();

        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn timeout_surfaces_as_request_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/statistics"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let api = ApiService::with_timeout(&server.uri(), Some(Duration::from_millis(50))).unwrap();
        let err = api.fetch_statistics().await.unwrap_err();

        assert!(matches!(err, ApiError::Request(_)));
    }
}
