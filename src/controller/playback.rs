//! Playback session control

use crate::model::MediaItem;

use super::AppController;

impl AppController {
    /// Make `item` current and start its lyrics lookup
    pub async fn play_item(&self, item: MediaItem) {
        let ticket = self.model.lock().await.play(item.clone()).await;
        tracing::info!(media_id = %item.id, title = %item.title, "Playing");
        self.fetch_lyrics(item, ticket);
    }

    pub async fn play_selected_result(&self) {
        let selected = self.model.lock().await.get_selected_result().await;
        if let Some(item) = selected {
            self.play_item(item).await;
        }
    }

    pub async fn toggle_playback(&self) {
        let model = self.model.lock().await;
        match model.toggle_playback().await {
            Some(is_playing) => {
                tracing::info!(action = if is_playing { "resumed" } else { "paused" }, "Playback toggled");
            }
            None => tracing::debug!("Toggle ignored, nothing is playing"),
        }
    }

    pub async fn pause(&self) {
        self.model.lock().await.pause().await;
    }

    pub async fn resume(&self) {
        self.model.lock().await.resume().await;
    }

    pub async fn close_player(&self) {
        self.model.lock().await.close_player().await;
        tracing::info!("Player closed");
    }

    pub async fn toggle_full_screen(&self) {
        self.model.lock().await.toggle_full_screen().await;
    }

    pub async fn enter_full_screen(&self) {
        self.model.lock().await.enter_full_screen().await;
    }

    pub async fn exit_full_screen(&self) {
        self.model.lock().await.exit_full_screen().await;
    }
}
