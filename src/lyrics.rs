//! Lyrics collaborator

use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use crate::error::FetchError;
use crate::model::MediaItem;

pub const DEFAULT_LYRICS: &str = "\
[Verse 1]
We're no strangers to love
You know the rules and so do I
A full commitment's what I'm thinking of
You wouldn't get this from any other guy

[Pre-Chorus]
I just wanna tell you how I'm feeling
Gotta make you understand

[Chorus]
Never gonna give you up
Never gonna let you down
Never gonna run around and desert you
Never gonna make you cry
Never gonna say goodbye
Never gonna tell a lie and hurt you
";

/// Resolves the lyrics text for a media item
pub trait LyricsSource: Send + Sync {
    fn fetch(&self, item: &MediaItem) -> BoxFuture<'static, Result<String, FetchError>>;
}

/// Answers every request with the same text after a fixed delay
#[derive(Clone, Debug)]
pub struct StaticLyrics {
    text: String,
    delay: Duration,
}

impl StaticLyrics {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }
}

impl Default for StaticLyrics {
    fn default() -> Self {
        Self::new(DEFAULT_LYRICS, Duration::from_millis(750))
    }
}

impl LyricsSource for StaticLyrics {
    fn fetch(&self, item: &MediaItem) -> BoxFuture<'static, Result<String, FetchError>> {
        let text = self.text.clone();
        let delay = self.delay;
        let id = item.id.clone();
        async move {
            tokio::time::sleep(delay).await;
            if text.trim().is_empty() {
                Err(FetchError::NotFound(id))
            } else {
                Ok(text)
            }
        }
        .boxed()
    }
}
