//! View module - UI rendering
//!
//! Renders one [`AppSnapshot`] per frame using ratatui:
//!
//! - `theme`: Light and dark palettes
//! - `utils`: Shared helpers (scrollable lists, truncation, centering)
//! - `layout`: Top bar and key hints
//! - `content`: Search results in grid or list layout
//! - `player`: Mini-player bar and full-screen player
//! - `overlays`: Banner, help, settings, reset confirmation, playlist picker

mod theme;
mod utils;
mod layout;
mod content;
mod player;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::model::{AppSnapshot, Overlay};

pub use theme::Palette;

const MINI_PLAYER_HEIGHT: u16 = 4;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, snapshot: &AppSnapshot) {
        let palette = Palette::for_mode(snapshot.preferences.dark_mode);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        if snapshot.playback.is_full_screen() {
            player::render_full_screen(frame, area, snapshot, &palette);
        } else {
            let player_height = if snapshot.playback.is_idle() { 0 } else { MINI_PLAYER_HEIGHT };
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),             // Search bar + view status
                    Constraint::Min(0),                // Results
                    Constraint::Length(player_height), // Mini player
                    Constraint::Length(1),             // Key hints
                ])
                .split(area);

            layout::render_top_bar(frame, chunks[0], snapshot, &palette);
            content::render_main_content(frame, chunks[1], snapshot, &palette);
            player::render_mini_player(frame, chunks[2], snapshot, &palette);
            layout::render_key_hints(frame, chunks[3], snapshot, &palette);
        }

        match &snapshot.ui.overlay {
            Some(Overlay::Help) => overlays::render_help_popup(frame, &palette),
            Some(Overlay::Settings) => overlays::render_settings(
                frame,
                snapshot.preferences.dark_mode,
                snapshot.preferences.list_view,
                &palette,
            ),
            Some(Overlay::ConfirmReset) => overlays::render_confirm_reset(frame, &palette),
            Some(Overlay::PlaylistPicker { target }) => overlays::render_playlist_picker(
                frame,
                &snapshot.playlists,
                snapshot.ui.picker_selected,
                target,
                &palette,
            ),
            Some(Overlay::NewPlaylist { name, .. }) => {
                overlays::render_new_playlist_prompt(frame, name, &palette)
            }
            None => {}
        }

        // Banner goes on top of everything
        if let Some(banner) = &snapshot.ui.banner {
            overlays::render_banner(frame, banner, &palette);
        }
    }
}
