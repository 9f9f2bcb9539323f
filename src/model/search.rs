//! Search state: the query, its results and the in-flight flag

use super::media::MediaItem;
use super::request::{RequestTracker, Ticket};

#[derive(Clone, Debug, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<MediaItem>,
    pub is_loading: bool,
    requests: RequestTracker,
}

impl SearchState {
    /// Record a new query and mark the search as loading
    pub fn begin(&mut self, query: String) -> Ticket {
        self.query = query;
        self.is_loading = true;
        self.requests.issue()
    }

    /// Apply results for `ticket`. Returns `false` and leaves the state
    /// untouched when a newer search has been issued since.
    pub fn complete(&mut self, ticket: Ticket, results: Vec<MediaItem>) -> bool {
        if !self.requests.is_latest(ticket) {
            return false;
        }
        self.results = results;
        self.is_loading = false;
        true
    }

    /// Finish `ticket` without results. Previous results stay visible.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.requests.is_latest(ticket) {
            return false;
        }
        self.is_loading = false;
        true
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.is_loading = false;
        self.requests.invalidate();
    }

    /// A finished, non-empty query that matched nothing
    pub fn is_empty_result(&self) -> bool {
        !self.is_loading && !self.query.is_empty() && self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MediaItem {
        MediaItem {
            id: id.to_string(),
            title: id.to_string(),
            artist: String::new(),
            thumbnail: String::new(),
            duration: String::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let mut state = SearchState::default();
        let old = state.begin("q".to_string());
        let new = state.begin("qu".to_string());

        assert!(state.complete(new, vec![item("new")]));
        assert!(!state.complete(old, vec![item("old")]));
        assert_eq!(state.results[0].id, "new");
        assert_eq!(state.query, "qu");
        assert!(!state.is_loading);
    }

    #[test]
    fn test_loading_until_latest_completes() {
        let mut state = SearchState::default();
        let old = state.begin("a".to_string());
        let new = state.begin("ab".to_string());
        state.complete(old, vec![]);
        assert!(state.is_loading);
        state.complete(new, vec![]);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_clear_invalidates_in_flight_search() {
        let mut state = SearchState::default();
        let ticket = state.begin("queen".to_string());
        state.clear();
        assert!(!state.complete(ticket, vec![item("late")]));
        assert!(state.results.is_empty());
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_empty_result_only_for_finished_nonempty_query() {
        let mut state = SearchState::default();
        assert!(!state.is_empty_result());
        let ticket = state.begin("zzz".to_string());
        assert!(!state.is_empty_result());
        state.complete(ticket, vec![]);
        assert!(state.is_empty_result());
    }
}
