pub mod effects;

use std::{sync::Arc, time::Duration};

use flume::{Receiver, Sender};
use tokio::task::JoinSet;
use tracing::debug;

use crate::{
    event::events::Event,
    http::CatalogApi,
    store::{Action, AppState, Store},
    util::task::TaskManager,
};

const NOTIFICATION_TIMER: &str = "notification";

/// Owns the store and runs side-effect handlers against it.
///
/// All state transitions happen on the task that owns the engine. Handlers
/// run on the tokio runtime and report back through the event channel, so a
/// transition is never interleaved with another.
pub struct SyncEngine {
    store: Store,
    api: Arc<dyn CatalogApi>,
    event_tx: Sender<Event>,
    event_rx: Receiver<Event>,
    effects: JoinSet<()>,
    timers: TaskManager,
    notification_ttl: Duration,
}

impl SyncEngine {
    pub fn new(api: Arc<dyn CatalogApi>, notification_ttl: Duration) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            store: Store::new(),
            api,
            event_tx,
            event_rx,
            effects: JoinSet::new(),
            timers: TaskManager::new(),
            notification_ttl,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn subscribe(&mut self) -> Receiver<u64> {
        self.store.subscribe()
    }

    pub fn in_flight(&self) -> usize {
        self.effects.len()
    }

    pub fn dispatch(&mut self, action: Action) {
        if self.store.is_disposed() {
            debug!(?action, "engine disposed, dropping action");
            return;
        }

        let ticket = self.store.dispatch(&action);

        match action {
            Action::Request(request) => {
                let Some(ticket) = ticket else { return };
                debug!(?ticket, "spawning handler");

                let api = self.api.clone();
                let tx = self.event_tx.clone();
                self.effects.spawn(async move {
                    let actions = effects::run(api.as_ref(), request).await;
                    let _ = tx.send(Event::Settled { ticket, actions });
                });
            }
            Action::ShowNotification { .. } => {
                let id = self.store.state().ui.notification.id;
                let ttl = self.notification_ttl;
                let tx = self.event_tx.clone();

                self.timers.spawn(NOTIFICATION_TIMER, async move {
                    tokio::time::sleep(ttl).await;
                    let _ = tx.send(Event::NotificationExpired(id));
                });
            }
            Action::HideNotification => self.timers.abort(NOTIFICATION_TIMER),
            _ => {}
        }
    }

    /// Handles every pending event without waiting. Returns whether anything
    /// was processed.
    pub fn pump(&mut self) -> bool {
        self.reap();

        let mut processed = false;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed = true;
        }
        processed
    }

    /// Waits for the next event and handles it.
    pub async fn process_next(&mut self) {
        if let Ok(event) = self.event_rx.recv_async().await {
            self.handle_event(event);
        }
        self.reap();
    }

    pub fn dispose(&mut self) {
        self.effects.abort_all();
        self.timers.abort_all();
        self.store.dispose();
    }

    /// Joins handlers that already finished so `in_flight` only counts live
    /// ones.
    fn reap(&mut self) {
        while self.effects.try_join_next().is_some() {}
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Settled { ticket, actions } => {
                if !self.store.is_current(&ticket) {
                    debug!(?ticket, "dropping superseded completion");
                    if self.store.was_cancelled(&ticket) {
                        self.dispatch(Action::Abandoned(ticket.kind));
                    }
                    return;
                }
                for action in actions {
                    self.dispatch(action);
                }
            }
            Event::NotificationExpired(id) => self.dispatch(Action::ExpireNotification(id)),
        }
    }
}
