//! Playback session state machine
//!
//! `Idle → Compact(playing|paused) ↔ FullScreen(playing|paused) → Idle`

use super::media::MediaItem;

/// How the current item is presented
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Mini-player bar at the bottom of the screen
    #[default]
    Compact,
    FullScreen,
}

/// The single current item and how it is being played
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackSession {
    #[default]
    Idle,
    Active {
        item: MediaItem,
        is_playing: bool,
        presentation: Presentation,
    },
}

impl PlaybackSession {
    /// Make `item` current and start playing it in compact mode
    pub fn play(&mut self, item: MediaItem) {
        *self = Self::Active {
            item,
            is_playing: true,
            presentation: Presentation::Compact,
        };
    }

    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    pub fn resume(&mut self) {
        self.set_playing(true);
    }

    /// Flip play/pause. Returns the new state, or `None` when idle.
    pub fn toggle(&mut self) -> Option<bool> {
        match self {
            Self::Active { is_playing, .. } => {
                *is_playing = !*is_playing;
                Some(*is_playing)
            }
            Self::Idle => None,
        }
    }

    pub fn close(&mut self) {
        *self = Self::Idle;
    }

    pub fn enter_full_screen(&mut self) {
        self.set_presentation(Presentation::FullScreen);
    }

    pub fn exit_full_screen(&mut self) {
        self.set_presentation(Presentation::Compact);
    }

    pub fn toggle_full_screen(&mut self) {
        let next = match self.presentation() {
            Some(Presentation::Compact) => Presentation::FullScreen,
            Some(Presentation::FullScreen) => Presentation::Compact,
            None => return,
        };
        self.set_presentation(next);
    }

    pub fn current(&self) -> Option<&MediaItem> {
        match self {
            Self::Active { item, .. } => Some(item),
            Self::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Active { is_playing: true, .. })
    }

    pub fn is_full_screen(&self) -> bool {
        self.presentation() == Some(Presentation::FullScreen)
    }

    pub fn presentation(&self) -> Option<Presentation> {
        match self {
            Self::Active { presentation, .. } => Some(*presentation),
            Self::Idle => None,
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if let Self::Active { is_playing, .. } = self {
            *is_playing = playing;
        }
    }

    fn set_presentation(&mut self, next: Presentation) {
        if let Self::Active { presentation, .. } = self {
            *presentation = next;
        }
    }
}
