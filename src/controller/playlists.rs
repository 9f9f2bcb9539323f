//! Playlist picker, add and create

use crate::error::StoreError;
use crate::model::{MediaItem, Overlay, PlaylistTarget};

use super::AppController;

impl AppController {
    pub async fn add_to_playlist(&self, item: &MediaItem, playlist_id: &str) -> Result<usize, StoreError> {
        let model = self.model.lock().await;
        let result = model.add_to_playlist(item, playlist_id).await;
        match &result {
            Ok(count) => {
                tracing::info!(media_id = %item.id, playlist_id, tracks = count, "Added to playlist");
                if let Some(playlist) = model.get_playlist(playlist_id).await {
                    model.set_info(format!("Added \"{}\" to {}", item.title, playlist.name)).await;
                }
            }
            Err(e) => {
                tracing::warn!(media_id = %item.id, playlist_id, error = %e, "Add to playlist failed");
                model.set_error(Self::format_error(e)).await;
            }
        }
        result
    }

    /// Add the current item to `playlist_id`
    pub async fn select_playlist_for_current(&self, playlist_id: &str) -> Result<usize, StoreError> {
        let current = self.model.lock().await.current_item().await;
        match current {
            Some(item) => self.add_to_playlist(&item, playlist_id).await,
            None => {
                let e = StoreError::NothingPlaying;
                self.model.lock().await.set_error(Self::format_error(&e)).await;
                Err(e)
            }
        }
    }

    pub async fn create_playlist(&self, name: &str) -> Result<String, StoreError> {
        let model = self.model.lock().await;
        let result = model.create_playlist(name).await;
        match &result {
            Ok(id) => tracing::info!(playlist_id = %id, name = name.trim(), "Playlist created"),
            Err(e) => {
                tracing::warn!(error = %e, "Create playlist failed");
                model.set_error(Self::format_error(e)).await;
            }
        }
        result
    }

    pub async fn open_playlist_picker(&self, target: PlaylistTarget) {
        let model = self.model.lock().await;
        if target == PlaylistTarget::Current && model.current_item().await.is_none() {
            model.set_error(Self::format_error(&StoreError::NothingPlaying)).await;
            return;
        }
        model.open_overlay(Overlay::PlaylistPicker { target }).await;
    }

    /// Picker add-to-playlist for the selected search result
    pub async fn open_picker_for_selected_result(&self) {
        let selected = self.model.lock().await.get_selected_result().await;
        if let Some(item) = selected {
            self.open_playlist_picker(PlaylistTarget::Item(item)).await;
        }
    }

    /// Enter in the picker: add to the highlighted playlist, or start naming
    /// a new one when the "new playlist" row is highlighted
    pub async fn confirm_picker(&self, target: PlaylistTarget) {
        let selection = self.model.lock().await.picker_selection().await;
        match selection {
            Some(playlist) => {
                // On error the picker stays open for another choice
                if self.add_to_target(&target, &playlist.id).await.is_ok() {
                    self.model.lock().await.close_overlay().await;
                }
            }
            None => self.start_new_playlist(target).await,
        }
    }

    pub async fn start_new_playlist(&self, target: PlaylistTarget) {
        self.model
            .lock()
            .await
            .open_overlay(Overlay::NewPlaylist { target, name: String::new() })
            .await;
    }

    /// Create the playlist being named and add the pending target to it
    pub async fn submit_new_playlist(&self, target: PlaylistTarget, name: String) {
        // On error the prompt stays open so the name can be fixed
        let Ok(playlist_id) = self.create_playlist(&name).await else {
            return;
        };
        // The playlist exists now, so a failed add falls back to the picker
        match self.add_to_target(&target, &playlist_id).await {
            Ok(_) => self.model.lock().await.close_overlay().await,
            Err(_) => {
                self.model
                    .lock()
                    .await
                    .open_overlay(Overlay::PlaylistPicker { target })
                    .await
            }
        }
    }

    async fn add_to_target(&self, target: &PlaylistTarget, playlist_id: &str) -> Result<usize, StoreError> {
        match target {
            PlaylistTarget::Current => self.select_playlist_for_current(playlist_id).await,
            PlaylistTarget::Item(item) => self.add_to_playlist(item, playlist_id).await,
        }
    }
}
