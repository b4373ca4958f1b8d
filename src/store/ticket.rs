use std::collections::HashMap;

use super::action::RequestKind;

/// Issued for every request. A completion carries its ticket back so the
/// store can tell whether a newer request of the same kind was made since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub kind: RequestKind,
    pub seq: u64,
}

#[derive(Debug, Default)]
pub struct Tickets {
    latest: HashMap<RequestKind, u64>,
    cancelled: HashMap<RequestKind, u64>,
}

impl Tickets {
    pub fn issue(&mut self, kind: RequestKind) -> Ticket {
        let seq = self.latest.entry(kind).or_default();
        *seq += 1;
        Ticket { kind, seq: *seq }
    }

    /// Makes every outstanding ticket of `kind` stale without a newer request
    /// taking its place.
    pub fn cancel(&mut self, kind: RequestKind) {
        let ticket = self.issue(kind);
        self.cancelled.insert(kind, ticket.seq);
    }

    /// True when `ticket` went stale through [`Tickets::cancel`] and nothing
    /// of its kind has been requested since.
    pub fn was_cancelled(&self, ticket: &Ticket) -> bool {
        let latest = self.latest.get(&ticket.kind);
        latest.is_some_and(|seq| *seq > ticket.seq)
            && latest == self.cancelled.get(&ticket.kind)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        if !ticket.kind.supersedes() {
            return true;
        }
        self.latest.get(&ticket.kind) == Some(&ticket.seq)
    }
}
