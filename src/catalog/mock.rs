//! Built-in demo catalog

use crate::model::{MediaItem, Playlist};

fn video(id: &str, title: &str, artist: &str, duration: &str) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        thumbnail: format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id),
        duration: duration.to_string(),
        url: format!("https://www.youtube.com/watch?v={}", id),
    }
}

pub(super) fn items() -> Vec<MediaItem> {
    vec![
        video(
            "dQw4w9WgXcQ",
            "Rick Astley - Never Gonna Give You Up (Official Music Video)",
            "Rick Astley",
            "3:32",
        ),
        video(
            "fJ9rUzIMcZQ",
            "Queen – Bohemian Rhapsody (Official Video Remastered)",
            "Queen",
            "5:55",
        ),
        video(
            "pzigoHPE_mE",
            "a-ha - Take On Me (Official 4K Music Video)",
            "a-ha",
            "3:49",
        ),
        video(
            "HgzUkwZGmJk",
            "Michael Jackson - Billie Jean (Official Music Video)",
            "Michael Jackson",
            "4:54",
        ),
        video(
            "kOkQ4T5WO9E",
            "The Weeknd - Blinding Lights (Official Music Video)",
            "The Weeknd",
            "3:21",
        ),
    ]
}

pub(super) fn playlists(items: &[MediaItem]) -> Vec<Playlist> {
    let pick = |indices: &[usize]| -> Vec<MediaItem> {
        indices.iter().filter_map(|&i| items.get(i).cloned()).collect()
    };

    vec![
        Playlist {
            id: "p1".to_string(),
            name: "My Favorites".to_string(),
            items: pick(&[0, 2]),
        },
        Playlist {
            id: "p2".to_string(),
            name: "80s Hits".to_string(),
            items: pick(&[1, 2]),
        },
    ]
}
