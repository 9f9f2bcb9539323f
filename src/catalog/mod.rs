//! Catalog provider - the read-only source of media items and seed playlists
//!
//! The controllers never hold catalog data themselves; they query a
//! [`Catalog`] injected at start-up:
//!
//! - `mock`: the built-in demo set used when no catalog file is given
//! - `file`: JSON catalog files

mod file;
mod mock;

use std::path::Path;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::error::{CatalogError, FetchError};
use crate::model::{MediaItem, Playlist};

pub use file::{CatalogFile, PlaylistEntry};

/// Read-only query contract for the media catalog.
///
/// `search` stands in for a remote call: it resolves asynchronously and may
/// fail, even though the local implementation never does.
pub trait Catalog: Send + Sync {
    fn items(&self) -> &[MediaItem];

    /// Playlists the store is seeded with at start-up
    fn playlists(&self) -> Vec<Playlist>;

    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<MediaItem>, FetchError>>;
}

/// In-memory catalog with an optional simulated lookup latency
#[derive(Clone, Debug)]
pub struct LocalCatalog {
    items: Vec<MediaItem>,
    playlists: Vec<Playlist>,
    latency: Duration,
}

impl LocalCatalog {
    pub fn new(items: Vec<MediaItem>, playlists: Vec<Playlist>) -> Self {
        Self {
            items,
            playlists,
            latency: Duration::ZERO,
        }
    }

    pub fn builtin() -> Self {
        let items = mock::items();
        let playlists = mock::playlists(&items);
        Self::new(items, playlists)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let file = CatalogFile::parse(&content)?;
        let catalog = file.into_catalog()?;
        tracing::info!(
            path = %path.display(),
            items = catalog.items.len(),
            playlists = catalog.playlists.len(),
            "Catalog loaded from file"
        );
        Ok(catalog)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Catalog items matching `query`, in catalog order
    pub fn filter(&self, query: &str) -> Vec<MediaItem> {
        self.items
            .iter()
            .filter(|item| item.matches(query))
            .cloned()
            .collect()
    }
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog for LocalCatalog {
    fn items(&self) -> &[MediaItem] {
        &self.items
    }

    fn playlists(&self) -> Vec<Playlist> {
        self.playlists.clone()
    }

    fn search(&self, query: &str) -> BoxFuture<'static, Result<Vec<MediaItem>, FetchError>> {
        let results = self.filter(query);
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                tokio::time::sleep(latency).await;
            }
            Ok(results)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artists(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|i| i.artist.as_str()).collect()
    }

    #[test]
    fn test_filter_queen_returns_only_bohemian_rhapsody() {
        let catalog = LocalCatalog::builtin();
        let results = catalog.filter("queen");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "fJ9rUzIMcZQ");
    }

    #[test]
    fn test_filter_single_letter_hits_whole_builtin_set() {
        let catalog = LocalCatalog::builtin();
        let results = catalog.filter("a");
        assert_eq!(
            artists(&results),
            vec!["Rick Astley", "Queen", "a-ha", "Michael Jackson", "The Weeknd"]
        );
    }

    #[test]
    fn test_filter_empty_query_is_empty() {
        assert!(LocalCatalog::builtin().filter("").is_empty());
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let catalog = LocalCatalog::builtin();
        for query in ["a", "ON", "jack", "official", "zzz", "-", "Lights"] {
            let results = catalog.filter(query);
            let q = query.to_lowercase();
            for item in &results {
                assert!(
                    item.title.to_lowercase().contains(&q) || item.artist.to_lowercase().contains(&q),
                    "{} should not match {query}",
                    item.title
                );
            }
            let expected = catalog
                .items()
                .iter()
                .filter(|i| i.title.to_lowercase().contains(&q) || i.artist.to_lowercase().contains(&q))
                .count();
            assert_eq!(results.len(), expected, "query {query}");
        }
    }

    #[test]
    fn test_builtin_seed_playlists() {
        let catalog = LocalCatalog::builtin();
        let playlists = catalog.playlists();
        assert_eq!(playlists.len(), 2);
        assert_eq!(playlists[0].name, "My Favorites");
        assert_eq!(playlists[0].items[0].id, "dQw4w9WgXcQ");
        assert_eq!(playlists[1].name, "80s Hits");
        assert_eq!(playlists[1].len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_waits_for_latency() {
        let catalog = LocalCatalog::builtin().with_latency(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        let results = catalog.search("weeknd").await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
