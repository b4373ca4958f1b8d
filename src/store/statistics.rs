use crate::model::Statistics;

use super::action::{Action, Request, RequestKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsState {
    pub data: Option<Statistics>,
    pub loading: bool,
    pub error: Option<String>,
}

impl StatisticsState {
    pub fn reduce(&mut self, action: &Action) {
        match action {
            Action::Request(Request::Statistics) => {
                self.loading = true;
                self.error = None;
            }
            Action::ReceiveStatistics(stats) => {
                self.data = Some(stats.clone());
                self.loading = false;
            }
            Action::FailStatistics(message) => {
                self.loading = false;
                self.error = Some(message.clone());
            }
            Action::Abandoned(RequestKind::Statistics) => self.loading = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let mut state = StatisticsState::default();
        state.reduce(&Action::Request(Request::Statistics));
        assert!(state.loading);

        state.reduce(&Action::ReceiveStatistics(Statistics {
            total_songs: 4,
            ..Default::default()
        }));
        state.reduce(&Action::ReceiveStatistics(Statistics {
            total_artists: 2,
            ..Default::default()
        }));

        let data = state.data.as_ref().unwrap();
        assert_eq!(data.total_songs, 0);
        assert_eq!(data.total_artists, 2);
        assert!(!state.loading);
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut state = StatisticsState {
            data: Some(Statistics::default()),
            ..Default::default()
        };
        state.reduce(&Action::Request(Request::Statistics));
        state.reduce(&Action::FailStatistics("down".into()));

        assert!(state.data.is_some());
        assert_eq!(state.error.as_deref(), Some("down"));
        assert!(!state.loading);
    }

    #[test]
    fn song_requests_are_ignored() {
        let mut state = StatisticsState::default();
        state.reduce(&Action::Request(Request::List));

        assert_eq!(state, StatisticsState::default());
    }
}
