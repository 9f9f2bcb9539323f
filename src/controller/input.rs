//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Overlay, PlaylistTarget};
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.model.lock().await.set_should_quit(true).await;
            return Ok(());
        }

        let (has_banner, overlay, ui_state, is_full_screen) = {
            let model = self.model.lock().await;
            (
                model.has_banner().await,
                model.overlay().await,
                model.get_ui_state().await,
                model.get_playback().await.is_full_screen(),
            )
        };

        // A banner blocks all other interactions until dismissed
        if has_banner {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.model.lock().await.clear_banner().await;
            }
            return Ok(());
        }

        if let Some(overlay) = overlay {
            self.handle_overlay_key(overlay, key).await;
            return Ok(());
        }

        if is_full_screen {
            self.handle_full_screen_key(key).await;
            return Ok(());
        }

        match ui_state.active_section {
            ActiveSection::Search => self.handle_search_key(key).await,
            ActiveSection::Results => self.handle_results_key(key).await,
        }
        Ok(())
    }

    async fn handle_search_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.model.lock().await.cycle_section().await;
            }
            KeyCode::Enter => self.submit_search().await,
            KeyCode::Esc => {
                self.model.lock().await.clear_search_input().await;
                if self.settings.live_search {
                    self.on_search_input_changed(String::new()).await;
                } else {
                    self.model.lock().await.clear_search().await;
                }
            }
            KeyCode::Backspace => {
                let query = self.model.lock().await.backspace_search().await;
                self.on_search_input_changed(query).await;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let query = self.model.lock().await.append_to_search(c).await;
                self.on_search_input_changed(query).await;
            }
            _ => {}
        }
    }

    async fn handle_results_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                let model = self.model.lock().await;
                let step = model.row_step().await;
                model.move_result_selection(-step).await;
            }
            KeyCode::Down => {
                let model = self.model.lock().await;
                let step = model.row_step().await;
                model.move_result_selection(step).await;
            }
            KeyCode::Left => self.model.lock().await.move_result_selection(-1).await,
            KeyCode::Right => self.model.lock().await.move_result_selection(1).await,
            KeyCode::Enter => self.play_selected_result().await,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc | KeyCode::Char('/') => {
                self.model
                    .lock()
                    .await
                    .set_active_section(ActiveSection::Search)
                    .await;
            }
            KeyCode::Char('a') | KeyCode::Char('A') => self.open_picker_for_selected_result().await,
            KeyCode::Char('v') | KeyCode::Char('V') => self.toggle_list_view().await,
            _ => self.handle_player_key(key).await,
        }
    }

    async fn handle_full_screen_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.exit_full_screen().await,
            _ => self.handle_player_key(key).await,
        }
    }

    /// Bindings shared by the results view and the full-screen player
    async fn handle_player_key(&self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => self.toggle_playback().await,
            KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_full_screen().await,
            KeyCode::Char('x') | KeyCode::Char('X') => self.close_player().await,
            KeyCode::Char('l') | KeyCode::Char('L') => self.toggle_lyrics_panel().await,
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.open_playlist_picker(PlaylistTarget::Current).await
            }
            KeyCode::Char('d') | KeyCode::Char('D') => self.toggle_dark_mode().await,
            KeyCode::Char('s') | KeyCode::Char('S') => self.open_settings().await,
            KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => {
                self.model.lock().await.open_overlay(Overlay::Help).await;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.model.lock().await.set_should_quit(true).await;
            }
            _ => {}
        }
    }

    async fn handle_overlay_key(&self, overlay: Overlay, key: KeyEvent) {
        match overlay {
            Overlay::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?')
                ) {
                    self.model.lock().await.close_overlay().await;
                }
            }
            Overlay::Settings => match key.code {
                KeyCode::Char('d') | KeyCode::Char('D') => self.toggle_dark_mode().await,
                KeyCode::Char('v') | KeyCode::Char('V') => self.toggle_list_view().await,
                KeyCode::Char('r') | KeyCode::Char('R') => self.request_reset().await,
                KeyCode::Esc | KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.model.lock().await.close_overlay().await;
                }
                _ => {}
            },
            Overlay::ConfirmReset => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_reset().await,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.model.lock().await.open_overlay(Overlay::Settings).await;
                }
                _ => {}
            },
            Overlay::PlaylistPicker { target } => match key.code {
                KeyCode::Up => self.model.lock().await.picker_move(-1).await,
                KeyCode::Down => self.model.lock().await.picker_move(1).await,
                KeyCode::Enter => self.confirm_picker(target).await,
                KeyCode::Char('n') | KeyCode::Char('N') => self.start_new_playlist(target).await,
                KeyCode::Esc => self.model.lock().await.close_overlay().await,
                _ => {}
            },
            Overlay::NewPlaylist { target, name } => match key.code {
                KeyCode::Enter => self.submit_new_playlist(target, name).await,
                KeyCode::Backspace => {
                    self.model
                        .lock()
                        .await
                        .edit_new_playlist_name(|name| {
                            name.pop();
                        })
                        .await;
                }
                KeyCode::Char(c) => {
                    self.model
                        .lock()
                        .await
                        .edit_new_playlist_name(|name| name.push(c))
                        .await;
                }
                KeyCode::Esc => self.model.lock().await.close_overlay().await,
                _ => {}
            },
        }
    }
}
