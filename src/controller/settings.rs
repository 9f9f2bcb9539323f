//! Preferences and data reset

use crate::model::Overlay;

use super::AppController;

impl AppController {
    pub async fn toggle_dark_mode(&self) {
        let dark_mode = self.model.lock().await.toggle_dark_mode().await;
        tracing::debug!(dark_mode, "Dark mode toggled");
    }

    pub async fn toggle_list_view(&self) {
        let list_view = self.model.lock().await.toggle_list_view().await;
        tracing::debug!(list_view, "Result layout toggled");
    }

    pub async fn open_settings(&self) {
        self.model.lock().await.open_overlay(Overlay::Settings).await;
    }

    /// Reset asks for confirmation first
    pub async fn request_reset(&self) {
        self.model.lock().await.open_overlay(Overlay::ConfirmReset).await;
    }

    pub async fn confirm_reset(&self) {
        let model = self.model.lock().await;
        model.reset_data().await;
        model.set_info("All data has been reset.".to_string()).await;
        tracing::info!("User data reset");
    }
}
