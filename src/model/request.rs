//! Ordering of asynchronous requests
//!
//! Every search or lyrics request is tagged with a [`Ticket`]. Only the
//! holder of the most recently issued ticket may write its result back.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Makes every outstanding ticket stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_latest() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        assert!(tracker.is_latest(first));
        let second = tracker.issue();
        assert!(!tracker.is_latest(first));
        assert!(tracker.is_latest(second));
    }

    #[test]
    fn test_invalidate_drops_outstanding_ticket() {
        let mut tracker = RequestTracker::default();
        let ticket = tracker.issue();
        tracker.invalidate();
        assert!(!tracker.is_latest(ticket));
        assert!(tracker.issue() > ticket);
    }
}
