//! Catalog search requests

use crate::error::FetchError;
use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    /// Called after every edit of the search box
    pub async fn on_search_input_changed(&self, query: String) {
        if self.settings.live_search {
            self.perform_search(query).await;
        }
    }

    /// Start a search. The result is written back by a background task once
    /// the catalog answers, unless a newer search was started meanwhile.
    pub async fn perform_search(&self, query: String) {
        let (ticket, lookup) = {
            let model = self.model.lock().await;
            let lookup = model.catalog().search(&query);
            (model.begin_search(query.clone()).await, lookup)
        };
        tracing::debug!(query = %query, ticket = ticket.value(), "Search started");

        let model = self.model.clone();
        let timeout = self.settings.request_timeout;
        tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, lookup).await {
                Ok(outcome) => outcome,
                Err(_) => Err(FetchError::Timeout("search")),
            };

            let model = model.lock().await;
            match outcome {
                Ok(results) => {
                    let count = results.len();
                    if model.complete_search(ticket, results).await {
                        tracing::info!(query = %query, results = count, "Search completed");
                    } else {
                        tracing::debug!(query = %query, ticket = ticket.value(), "Discarding stale search result");
                    }
                }
                Err(e) => {
                    if model.fail_search(ticket).await {
                        tracing::error!(query = %query, error = %e, "Search failed");
                        model.set_error(Self::format_error(&e)).await;
                    } else {
                        tracing::debug!(query = %query, error = %e, "Stale search failed");
                    }
                }
            }
        });
    }

    /// Enter in the search box: search now and move focus to the results
    pub async fn submit_search(&self) {
        let query = self.model.lock().await.search_input().await;
        self.perform_search(query).await;
        self.model
            .lock()
            .await
            .set_active_section(ActiveSection::Results)
            .await;
    }
}
