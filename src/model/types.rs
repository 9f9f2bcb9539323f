//! Core type definitions for the UI state

use std::time::{Duration, Instant};

use super::media::MediaItem;

/// Banners disappear after this long
pub const BANNER_TTL: Duration = Duration::from_secs(5);

/// Which part of the main screen has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// What an add-to-playlist action applies to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaylistTarget {
    /// The item in the playback session
    Current,
    /// A specific search result
    Item(MediaItem),
}

/// Modal panels drawn over the main screen. At most one is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    Help,
    Settings,
    ConfirmReset,
    PlaylistPicker { target: PlaylistTarget },
    NewPlaylist { target: PlaylistTarget, name: String },
}

/// Presentation preferences; live for the whole process
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub list_view: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerLevel {
    Info,
    Error,
}

/// Non-fatal message shown on top of everything else
#[derive(Clone, Debug)]
pub struct Banner {
    pub message: String,
    pub level: BannerLevel,
    pub shown_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>, level: BannerLevel) -> Self {
        Self {
            message: message.into(),
            level,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() > BANNER_TTL
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Text in the search box; may differ from the last issued query
    pub search_input: String,
    pub result_selected: usize,
    pub picker_selected: usize,
    pub overlay: Option<Overlay>,
    pub banner: Option<Banner>,
    pub show_lyrics: bool,
}

/// Cards per row in grid view
pub const GRID_COLUMNS: usize = 3;
