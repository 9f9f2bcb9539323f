//! Main application model with state management
//!
//! The controller and the render loop share one `Arc<Mutex<AppModel>>`.
//! Every method here runs while that outer lock is held, so a method that
//! touches several pieces of state (close, reset, play) is never observed
//! half-applied.

use std::sync::Arc;
use tokio::sync::Mutex;

use super::lyrics::LyricsState;
use super::media::{MediaItem, Playlist};
use super::playback::PlaybackSession;
use super::playlists::PlaylistStore;
use super::request::Ticket;
use super::search::SearchState;
use super::types::{
    ActiveSection, Banner, BannerLevel, Overlay, Preferences, UiState, GRID_COLUMNS,
};
use crate::catalog::Catalog;
use crate::error::{FetchError, StoreError};

/// Everything the view needs for one frame
#[derive(Clone, Debug)]
pub struct AppSnapshot {
    pub playback: PlaybackSession,
    pub search: SearchState,
    pub playlists: Vec<Playlist>,
    pub lyrics: LyricsState,
    pub preferences: Preferences,
    pub ui: UiState,
}

/// Main application model containing all state
pub struct AppModel {
    catalog: Arc<dyn Catalog>,
    search: Arc<Mutex<SearchState>>,
    playlists: Arc<Mutex<PlaylistStore>>,
    playback: Arc<Mutex<PlaybackSession>>,
    lyrics: Arc<Mutex<LyricsState>>,
    preferences: Arc<Mutex<Preferences>>,
    pub ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(catalog: Arc<dyn Catalog>, preferences: Preferences) -> Self {
        let playlists = PlaylistStore::new(catalog.playlists());
        Self {
            catalog,
            search: Arc::new(Mutex::new(SearchState::default())),
            playlists: Arc::new(Mutex::new(playlists)),
            playback: Arc::new(Mutex::new(PlaybackSession::default())),
            lyrics: Arc::new(Mutex::new(LyricsState::default())),
            preferences: Arc::new(Mutex::new(preferences)),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub fn catalog(&self) -> Arc<dyn Catalog> {
        Arc::clone(&self.catalog)
    }

    pub async fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            playback: self.playback.lock().await.clone(),
            search: self.search.lock().await.clone(),
            playlists: self.playlists.lock().await.all().to_vec(),
            lyrics: self.lyrics.lock().await.clone(),
            preferences: *self.preferences.lock().await,
            ui: self.ui_state.lock().await.clone(),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub async fn begin_search(&self, query: String) -> Ticket {
        self.search.lock().await.begin(query)
    }

    pub async fn complete_search(&self, ticket: Ticket, results: Vec<MediaItem>) -> bool {
        let applied = self.search.lock().await.complete(ticket, results);
        if applied {
            self.ui_state.lock().await.result_selected = 0;
        }
        applied
    }

    pub async fn fail_search(&self, ticket: Ticket) -> bool {
        self.search.lock().await.fail(ticket)
    }

    /// Drop the query and results, discarding any search in flight
    pub async fn clear_search(&self) {
        self.search.lock().await.clear();
        self.ui_state.lock().await.result_selected = 0;
    }

    pub async fn get_selected_result(&self) -> Option<MediaItem> {
        let index = self.ui_state.lock().await.result_selected;
        self.search.lock().await.results.get(index).cloned()
    }

    // ========================================================================
    // Playback & lyrics
    // ========================================================================

    /// Make `item` current. Lyrics of the previous item are dropped in the
    /// same step; the returned ticket belongs to the new lyrics request.
    pub async fn play(&self, item: MediaItem) -> Ticket {
        let mut playback = self.playback.lock().await;
        let mut lyrics = self.lyrics.lock().await;
        let ticket = lyrics.begin(&item.id);
        playback.play(item);
        ticket
    }

    pub async fn pause(&self) {
        self.playback.lock().await.pause();
    }

    pub async fn resume(&self) {
        self.playback.lock().await.resume();
    }

    pub async fn toggle_playback(&self) -> Option<bool> {
        self.playback.lock().await.toggle()
    }

    pub async fn close_player(&self) {
        let mut playback = self.playback.lock().await;
        let mut lyrics = self.lyrics.lock().await;
        playback.close();
        lyrics.clear();
        self.ui_state.lock().await.show_lyrics = false;
    }

    pub async fn enter_full_screen(&self) {
        self.playback.lock().await.enter_full_screen();
    }

    pub async fn exit_full_screen(&self) {
        self.playback.lock().await.exit_full_screen();
    }

    pub async fn toggle_full_screen(&self) {
        self.playback.lock().await.toggle_full_screen();
    }

    pub async fn get_playback(&self) -> PlaybackSession {
        self.playback.lock().await.clone()
    }

    pub async fn current_item(&self) -> Option<MediaItem> {
        self.playback.lock().await.current().cloned()
    }

    /// Store a lyrics result if it still belongs to the current item
    pub async fn apply_lyrics(
        &self,
        ticket: Ticket,
        media_id: &str,
        result: Result<String, FetchError>,
    ) -> bool {
        let playback = self.playback.lock().await;
        if playback.current().map(|item| item.id.as_str()) != Some(media_id) {
            return false;
        }
        self.lyrics.lock().await.apply(ticket, media_id, result)
    }

    pub async fn get_lyrics(&self) -> LyricsState {
        self.lyrics.lock().await.clone()
    }

    // ========================================================================
    // Playlists
    // ========================================================================

    pub async fn add_to_playlist(&self, item: &MediaItem, playlist_id: &str) -> Result<usize, StoreError> {
        self.playlists.lock().await.add(item, playlist_id)
    }

    pub async fn add_current_to_playlist(&self, playlist_id: &str) -> Result<usize, StoreError> {
        let item = self.current_item().await.ok_or(StoreError::NothingPlaying)?;
        self.playlists.lock().await.add(&item, playlist_id)
    }

    pub async fn create_playlist(&self, name: &str) -> Result<String, StoreError> {
        self.playlists.lock().await.create(name)
    }

    pub async fn get_playlist(&self, playlist_id: &str) -> Option<Playlist> {
        self.playlists.lock().await.get(playlist_id).cloned()
    }

    // ========================================================================
    // Reset & preferences
    // ========================================================================

    /// Clear playlists, playback, lyrics and search. Preferences are kept.
    pub async fn reset_data(&self) {
        let mut search = self.search.lock().await;
        let mut playlists = self.playlists.lock().await;
        let mut playback = self.playback.lock().await;
        let mut lyrics = self.lyrics.lock().await;
        let mut ui = self.ui_state.lock().await;

        search.clear();
        playlists.clear();
        playback.close();
        lyrics.clear();

        ui.search_input.clear();
        ui.result_selected = 0;
        ui.picker_selected = 0;
        ui.show_lyrics = false;
        ui.overlay = None;
        ui.active_section = ActiveSection::Search;
    }

    pub async fn toggle_dark_mode(&self) -> bool {
        let mut prefs = self.preferences.lock().await;
        prefs.dark_mode = !prefs.dark_mode;
        prefs.dark_mode
    }

    pub async fn toggle_list_view(&self) -> bool {
        let mut prefs = self.preferences.lock().await;
        prefs.list_view = !prefs.list_view;
        prefs.list_view
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        self.ui_state.lock().await.active_section = section;
    }

    pub async fn cycle_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn search_input(&self) -> String {
        self.ui_state.lock().await.search_input.clone()
    }

    pub async fn append_to_search(&self, c: char) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.push(c);
        state.search_input.clone()
    }

    pub async fn backspace_search(&self) -> String {
        let mut state = self.ui_state.lock().await;
        state.search_input.pop();
        state.search_input.clone()
    }

    pub async fn clear_search_input(&self) {
        self.ui_state.lock().await.search_input.clear();
    }

    /// Move the result cursor by `delta` cells, clamped to the result list
    pub async fn move_result_selection(&self, delta: isize) {
        let count = self.search.lock().await.results.len();
        let mut state = self.ui_state.lock().await;
        if count == 0 {
            state.result_selected = 0;
            return;
        }
        let target = state.result_selected as isize + delta;
        state.result_selected = target.clamp(0, count as isize - 1) as usize;
    }

    /// Vertical step for the result cursor in the current layout
    pub async fn row_step(&self) -> isize {
        if self.preferences.lock().await.list_view {
            1
        } else {
            GRID_COLUMNS as isize
        }
    }

    pub async fn overlay(&self) -> Option<Overlay> {
        self.ui_state.lock().await.overlay.clone()
    }

    pub async fn open_overlay(&self, overlay: Overlay) {
        let mut state = self.ui_state.lock().await;
        if matches!(overlay, Overlay::PlaylistPicker { .. }) {
            state.picker_selected = 0;
        }
        state.overlay = Some(overlay);
    }

    pub async fn close_overlay(&self) {
        self.ui_state.lock().await.overlay = None;
    }

    /// The picker lists every playlist followed by a "new playlist" row
    pub async fn picker_move(&self, delta: isize) {
        let rows = self.playlists.lock().await.len() + 1;
        let mut state = self.ui_state.lock().await;
        let target = state.picker_selected as isize + delta;
        state.picker_selected = target.clamp(0, rows as isize - 1) as usize;
    }

    /// Playlist under the picker cursor; `None` on the "new playlist" row
    pub async fn picker_selection(&self) -> Option<Playlist> {
        let index = self.ui_state.lock().await.picker_selected;
        self.playlists.lock().await.all().get(index).cloned()
    }

    pub async fn edit_new_playlist_name(&self, edit: impl FnOnce(&mut String)) {
        let mut state = self.ui_state.lock().await;
        if let Some(Overlay::NewPlaylist { name, .. }) = state.overlay.as_mut() {
            edit(name);
        }
    }

    pub async fn toggle_lyrics_panel(&self) -> bool {
        let mut state = self.ui_state.lock().await;
        state.show_lyrics = !state.show_lyrics;
        state.show_lyrics
    }

    pub async fn set_error(&self, message: String) {
        self.ui_state.lock().await.banner = Some(Banner::new(message, BannerLevel::Error));
    }

    pub async fn set_info(&self, message: String) {
        self.ui_state.lock().await.banner = Some(Banner::new(message, BannerLevel::Info));
    }

    pub async fn clear_banner(&self) {
        self.ui_state.lock().await.banner = None;
    }

    pub async fn has_banner(&self) -> bool {
        self.ui_state.lock().await.banner.is_some()
    }

    pub async fn auto_clear_old_banners(&self) {
        let mut state = self.ui_state.lock().await;
        if state.banner.as_ref().is_some_and(Banner::is_expired) {
            state.banner = None;
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}
