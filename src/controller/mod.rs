//! Controller module - Application logic and event handling
//!
//! The controller turns user intents into model mutations and runs the
//! asynchronous collaborator calls. It is organized into submodules by
//! responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Catalog search requests
//! - `playback`: Playback session control
//! - `lyrics`: Lyrics requests for the current item
//! - `playlists`: Playlist picker, add and create
//! - `settings`: Preferences and data reset

mod input;
mod search;
mod playback;
mod lyrics;
mod playlists;
mod settings;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::{FetchError, StoreError};
use crate::lyrics::LyricsSource;
use crate::model::AppModel;

/// Behaviour switches taken from the configuration
#[derive(Clone, Copy, Debug)]
pub struct ControllerSettings {
    /// Search on every edit of the search box
    pub live_search: bool,
    /// Upper bound for any collaborator request
    pub request_timeout: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            live_search: true,
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            live_search: config.live_search,
            request_timeout: config.request_timeout,
        }
    }
}

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) lyrics_source: Arc<dyn LyricsSource>,
    pub(crate) settings: ControllerSettings,
}

impl AppController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        lyrics_source: Arc<dyn LyricsSource>,
        settings: ControllerSettings,
    ) -> Self {
        Self {
            model,
            lyrics_source,
            settings,
        }
    }

    pub fn model(&self) -> Arc<Mutex<AppModel>> {
        Arc::clone(&self.model)
    }

    pub(crate) fn format_error(error: &(dyn std::error::Error + 'static)) -> String {
        if let Some(store_error) = error.downcast_ref::<StoreError>() {
            match store_error {
                StoreError::PlaylistNotFound(_) => {
                    "That playlist no longer exists.".to_string()
                }
                StoreError::NothingPlaying => "Nothing is playing. Pick a song first.".to_string(),
                StoreError::EmptyName => "Playlist name cannot be empty.".to_string(),
            }
        } else if let Some(fetch_error) = error.downcast_ref::<FetchError>() {
            match fetch_error {
                FetchError::Timeout(what) => format!("The {} took too long. Please try again.", what),
                FetchError::Network(reason) => format!("Network problem: {}", reason),
                FetchError::NotFound(_) => "No lyrics found for this song.".to_string(),
            }
        } else {
            format!("Error: {}", error)
        }
    }
}
