//! JSON catalog files
//!
//! ```json
//! {
//!   "items": [{ "id": "...", "title": "...", "artist": "...",
//!               "thumbnail": "...", "duration": "3:32", "url": "..." }],
//!   "playlists": [{ "id": "p1", "name": "Favorites", "items": ["<item id>"] }]
//! }
//! ```

use std::collections::HashMap;

use serde::Deserialize;

use super::LocalCatalog;
use crate::error::CatalogError;
use crate::model::{MediaItem, Playlist};

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub items: Vec<MediaItem>,
    #[serde(default)]
    pub playlists: Vec<PlaylistEntry>,
}

/// A seed playlist, referencing catalog items by id
#[derive(Debug, Deserialize)]
pub struct PlaylistEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

impl CatalogFile {
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Resolve playlist references and build the catalog
    pub fn into_catalog(self) -> Result<LocalCatalog, CatalogError> {
        let mut by_id: HashMap<&str, &MediaItem> = HashMap::new();
        for item in &self.items {
            if by_id.insert(item.id.as_str(), item).is_some() {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        let mut playlists = Vec::with_capacity(self.playlists.len());
        for entry in &self.playlists {
            let mut items = Vec::with_capacity(entry.items.len());
            for item_id in &entry.items {
                let item = by_id.get(item_id.as_str()).ok_or_else(|| CatalogError::UnknownItem {
                    playlist: entry.id.clone(),
                    item: item_id.clone(),
                })?;
                items.push((*item).clone());
            }
            playlists.push(Playlist {
                id: entry.id.clone(),
                name: entry.name.clone(),
                items,
            });
        }

        Ok(LocalCatalog::new(self.items, playlists))
    }
}
