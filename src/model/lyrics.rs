//! Lyrics for the current item

use super::request::{RequestTracker, Ticket};
use crate::error::FetchError;

#[derive(Clone, Debug, Default)]
pub struct LyricsState {
    pub text: Option<String>,
    /// Item the text (or pending request) belongs to
    pub media_id: Option<String>,
    pub is_loading: bool,
    /// Why the last lookup produced no text
    pub status: Option<String>,
    requests: RequestTracker,
}

impl LyricsState {
    /// Drop whatever is shown and start a lookup for `media_id`
    pub fn begin(&mut self, media_id: &str) -> Ticket {
        self.text = None;
        self.status = None;
        self.media_id = Some(media_id.to_string());
        self.is_loading = true;
        self.requests.issue()
    }

    /// Apply a lookup result. Ignored unless `ticket` is the latest request
    /// and was issued for `media_id`.
    pub fn apply(&mut self, ticket: Ticket, media_id: &str, result: Result<String, FetchError>) -> bool {
        if !self.requests.is_latest(ticket) || self.media_id.as_deref() != Some(media_id) {
            return false;
        }
        self.is_loading = false;
        match result {
            Ok(text) => self.text = Some(text),
            Err(e) => self.status = Some(e.to_string()),
        }
        true
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.media_id = None;
        self.is_loading = false;
        self.status = None;
        self.requests.invalidate();
    }
}
