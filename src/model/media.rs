//! Catalog entities: media items and playlists

use serde::{Deserialize, Serialize};

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// A single music video in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub thumbnail: String,
    pub duration: String,
    pub url: String,
}

impl MediaItem {
    /// Address handed to the external player frame
    pub fn embed_url(&self) -> String {
        format!("{}/{}?autoplay=1", EMBED_BASE_URL, self.id)
    }

    /// Case-insensitive substring match on title or artist.
    /// An empty query matches nothing.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return false;
        }
        let query_lower = query.to_lowercase();
        self.title.to_lowercase().contains(&query_lower)
            || self.artist.to_lowercase().contains(&query_lower)
    }
}

/// A named, ordered list of media items. Duplicates are allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub items: Vec<MediaItem>,
}

impl Playlist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
