//! Side-effect handlers: one API call per request, mapped to the actions the
//! store should apply afterwards. Handlers never fail; errors become failure
//! actions plus an error notification.

use std::fmt;

use tracing::{info, warn};

use crate::{
    http::{ApiError, CatalogApi},
    store::{Action, Request, Severity},
};

pub async fn run(api: &dyn CatalogApi, request: Request) -> Vec<Action> {
    match request {
        Request::List => match api.fetch_songs().await {
            Ok(songs) => {
                info!(count = songs.len(), "songs fetched");
                vec![Action::ReceiveList(songs)]
            }
            Err(e) => failure(e, "Failed to fetch songs", Action::FailList),
        },
        Request::One(id) => match api.fetch_song(&id).await {
            Ok(song) => vec![Action::ReceiveOne(song)],
            Err(e) => failure(e, "Failed to fetch song", Action::FailOne),
        },
        Request::Create(draft) => match api.create_song(&draft).await {
            Ok(song) => {
                info!(id = %song.id, "song created");
                mutated(Action::ReceiveCreate(song), "Song created successfully")
            }
            Err(e) => failure(e, "Failed to create song", Action::FailCreate),
        },
        Request::Update { id, draft } => match api.update_song(&id, &draft).await {
            Ok(song) => {
                info!(id = %song.id, "song updated");
                mutated(Action::ReceiveUpdate(song), "Song updated successfully")
            }
            Err(e) => failure(e, "Failed to update song", Action::FailUpdate),
        },
        Request::Delete(id) => match api.delete_song(&id).await {
            Ok(()) => {
                info!(%id, "song deleted");
                mutated(Action::ReceiveDelete(id), "Song deleted successfully")
            }
            Err(e) => failure(e, "Failed to delete song", Action::FailDelete),
        },
        Request::Statistics => match api.fetch_statistics().await {
            Ok(stats) => vec![Action::ReceiveStatistics(stats)],
            Err(e) => failure(e, "Failed to fetch statistics", Action::FailStatistics),
        },
    }
}

/// Successful mutations confirm, then refresh the statistics snapshot.
fn mutated(receive: Action, message: &str) -> Vec<Action> {
    vec![
        receive,
        Action::notify(message, Severity::Success),
        Action::Request(Request::Statistics),
    ]
}

fn failure(error: ApiError, fallback: &str, fail: fn(String) -> Action) -> Vec<Action> {
    let message = failure_message(&error, fallback);
    warn!(error = %message, "request failed");
    vec![fail(message.clone()), Action::notify(message, Severity::Error)]
}

pub fn failure_message(error: &impl fmt::Display, fallback: &str) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
