//! Lyrics requests for the current item

use crate::error::FetchError;
use crate::model::{MediaItem, Ticket};

use super::AppController;

impl AppController {
    /// Look up lyrics for `item` in the background. The answer is dropped if
    /// the item is no longer current or a newer lookup has been started.
    pub(crate) fn fetch_lyrics(&self, item: MediaItem, ticket: Ticket) {
        let lookup = self.lyrics_source.fetch(&item);
        let model = self.model.clone();
        let timeout = self.settings.request_timeout;
        tracing::debug!(media_id = %item.id, ticket = ticket.value(), "Lyrics requested");

        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => Err(FetchError::Timeout("lyrics lookup")),
            };
            if let Err(e) = &outcome {
                tracing::warn!(media_id = %item.id, error = %e, "Lyrics lookup failed");
            }

            let model = model.lock().await;
            if model.apply_lyrics(ticket, &item.id, outcome).await {
                tracing::debug!(media_id = %item.id, "Lyrics applied");
            } else {
                tracing::debug!(media_id = %item.id, ticket = ticket.value(), "Discarding stale lyrics");
            }
        });
    }

    pub async fn toggle_lyrics_panel(&self) {
        self.model.lock().await.toggle_lyrics_panel().await;
    }
}
