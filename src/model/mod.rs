//! Model module - Application state and data types
//!
//! - `media`: Catalog entities (media items, playlists)
//! - `types`: UI state, overlays, preferences, banners
//! - `request`: Request tickets that keep async results in order
//! - `search`: Search query, results and loading flag
//! - `playback`: The playback session state machine
//! - `playlists`: In-memory playlist store
//! - `lyrics`: Lyrics for the current item
//! - `app_model`: Main application model with state management methods

mod types;
mod media;
mod request;
mod search;
mod playback;
mod playlists;
mod lyrics;
mod app_model;

pub use types::{
    ActiveSection, Banner, BannerLevel, Overlay, PlaylistTarget, Preferences, UiState,
    BANNER_TTL, GRID_COLUMNS,
};

pub use media::{MediaItem, Playlist};
pub use request::{RequestTracker, Ticket};
pub use search::SearchState;
pub use playback::{PlaybackSession, Presentation};
pub use playlists::PlaylistStore;
pub use lyrics::LyricsState;

pub use app_model::{AppModel, AppSnapshot};
