//! In-memory playlist store

use super::media::{MediaItem, Playlist};
use crate::error::StoreError;

/// Ordered collection of playlists, addressed by id
#[derive(Clone, Debug)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
    next_id: usize,
}

impl PlaylistStore {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self {
            next_id: playlists.len() + 1,
            playlists,
        }
    }

    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get(&self, playlist_id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == playlist_id)
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Append a copy of `item` to the playlist. Returns the new track count.
    pub fn add(&mut self, item: &MediaItem, playlist_id: &str) -> Result<usize, StoreError> {
        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| StoreError::PlaylistNotFound(playlist_id.to_string()))?;
        playlist.items.push(item.clone());
        Ok(playlist.items.len())
    }

    /// Create an empty playlist and return its id
    pub fn create(&mut self, name: &str) -> Result<String, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        let id = self.fresh_id();
        self.playlists.push(Playlist::new(id.clone(), name));
        Ok(id)
    }

    pub fn clear(&mut self) {
        self.playlists.clear();
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = format!("p{}", self.next_id);
            self.next_id += 1;
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for PlaylistStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
