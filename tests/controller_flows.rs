//! End-to-end flows through `AppController` on a paused tokio clock

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::Mutex;
use tokio::time::sleep;

use tuneflow::catalog::{Catalog, LocalCatalog};
use tuneflow::controller::{AppController, ControllerSettings};
use tuneflow::error::StoreError;
use tuneflow::lyrics::StaticLyrics;
use tuneflow::model::{
    ActiveSection, AppModel, AppSnapshot, BannerLevel, MediaItem, Overlay, Preferences,
};

const BOHEMIAN_RHAPSODY: &str = "fJ9rUzIMcZQ";
const LYRICS: &str = "la la la";

fn setup_with(catalog: LocalCatalog, settings: ControllerSettings) -> AppController {
    let lyrics = StaticLyrics::new(LYRICS, Duration::from_millis(750));
    let model = AppModel::new(Arc::new(catalog), Preferences::default());
    AppController::new(Arc::new(Mutex::new(model)), Arc::new(lyrics), settings)
}

fn setup() -> AppController {
    setup_with(
        LocalCatalog::builtin().with_latency(Duration::from_millis(500)),
        ControllerSettings::default(),
    )
}

async fn snapshot(controller: &AppController) -> AppSnapshot {
    controller.model().lock().await.snapshot().await
}

fn catalog_item(index: usize) -> MediaItem {
    LocalCatalog::builtin().items()[index].clone()
}

async fn press(controller: &AppController, code: KeyCode) {
    controller
        .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
        .await
        .unwrap();
}

async fn type_text(controller: &AppController, text: &str) {
    for c in text.chars() {
        press(controller, KeyCode::Char(c)).await;
    }
}

fn ids(items: &[MediaItem]) -> Vec<&str> {
    items.iter().map(|item| item.id.as_str()).collect()
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_search_loads_then_shows_results() {
    let controller = setup();
    controller.perform_search("queen".to_string()).await;

    let state = snapshot(&controller).await.search;
    assert!(state.is_loading);
    assert_eq!(state.query, "queen");

    sleep(Duration::from_millis(499)).await;
    assert!(snapshot(&controller).await.search.is_loading);

    sleep(Duration::from_millis(2)).await;
    let state = snapshot(&controller).await.search;
    assert!(!state.is_loading);
    assert_eq!(ids(&state.results), vec![BOHEMIAN_RHAPSODY]);
}

#[tokio::test(start_paused = true)]
async fn test_search_single_letter_matches_whole_catalog() {
    let controller = setup();
    controller.perform_search("a".to_string()).await;
    sleep(Duration::from_millis(600)).await;
    assert_eq!(snapshot(&controller).await.search.results.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_empty_search_clears_results() {
    let controller = setup();
    controller.perform_search("queen".to_string()).await;
    sleep(Duration::from_millis(600)).await;
    controller.perform_search(String::new()).await;
    sleep(Duration::from_millis(600)).await;

    let state = snapshot(&controller).await.search;
    assert!(state.results.is_empty());
    assert!(!state.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_stale_search_result_is_discarded() {
    let controller = setup();
    controller.perform_search("a".to_string()).await;
    sleep(Duration::from_millis(100)).await;
    controller.perform_search("queen".to_string()).await;

    // The first answer arrives at 500ms but is no longer wanted
    sleep(Duration::from_millis(450)).await;
    let state = snapshot(&controller).await.search;
    assert!(state.results.is_empty());
    assert!(state.is_loading);

    sleep(Duration::from_millis(100)).await;
    let state = snapshot(&controller).await.search;
    assert!(!state.is_loading);
    assert_eq!(ids(&state.results), vec![BOHEMIAN_RHAPSODY]);
}

#[tokio::test(start_paused = true)]
async fn test_live_search_follows_typing() {
    let controller = setup();
    type_text(&controller, "weeknd").await;
    sleep(Duration::from_millis(600)).await;

    let snap = snapshot(&controller).await;
    assert_eq!(snap.ui.search_input, "weeknd");
    assert_eq!(snap.search.query, "weeknd");
    assert_eq!(ids(&snap.search.results), vec!["kOkQ4T5WO9E"]);
}

#[tokio::test(start_paused = true)]
async fn test_enter_searches_when_live_search_is_off() {
    let controller = setup_with(
        LocalCatalog::builtin().with_latency(Duration::from_millis(500)),
        ControllerSettings {
            live_search: false,
            ..ControllerSettings::default()
        },
    );
    type_text(&controller, "queen").await;
    sleep(Duration::from_millis(600)).await;
    let snap = snapshot(&controller).await;
    assert!(snap.search.query.is_empty());
    assert!(!snap.search.is_loading);

    press(&controller, KeyCode::Enter).await;
    sleep(Duration::from_millis(600)).await;
    let snap = snapshot(&controller).await;
    assert_eq!(snap.ui.active_section, ActiveSection::Results);
    assert_eq!(ids(&snap.search.results), vec![BOHEMIAN_RHAPSODY]);
}

#[tokio::test(start_paused = true)]
async fn test_search_timeout_shows_error_banner() {
    let controller = setup_with(
        LocalCatalog::builtin().with_latency(Duration::from_secs(10)),
        ControllerSettings {
            live_search: true,
            request_timeout: Duration::from_secs(1),
        },
    );
    controller.perform_search("queen".to_string()).await;
    sleep(Duration::from_millis(1100)).await;

    let snap = snapshot(&controller).await;
    assert!(!snap.search.is_loading);
    assert!(snap.search.results.is_empty());
    let banner = snap.ui.banner.expect("timeout banner");
    assert_eq!(banner.level, BannerLevel::Error);
    assert_eq!(banner.message, "The search took too long. Please try again.");
}

#[tokio::test(start_paused = true)]
async fn test_control_chords_are_not_typed() {
    let controller = setup();
    type_text(&controller, "queen").await;
    controller
        .handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL))
        .await
        .unwrap();
    sleep(Duration::from_millis(600)).await;

    let snap = snapshot(&controller).await;
    assert_eq!(snap.ui.search_input, "queen");
    assert_eq!(snap.search.query, "queen");
    assert!(!controller.model().lock().await.should_quit().await);
}

#[tokio::test(start_paused = true)]
async fn test_shifted_letters_are_typed() {
    let controller = setup();
    controller
        .handle_key_event(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT))
        .await
        .unwrap();
    assert_eq!(snapshot(&controller).await.ui.search_input, "Q");
}

#[tokio::test(start_paused = true)]
async fn test_escape_clears_results_without_live_search() {
    let controller = setup_with(
        LocalCatalog::builtin().with_latency(Duration::from_millis(500)),
        ControllerSettings {
            live_search: false,
            ..ControllerSettings::default()
        },
    );
    type_text(&controller, "queen").await;
    press(&controller, KeyCode::Enter).await;
    sleep(Duration::from_millis(600)).await;
    assert_eq!(snapshot(&controller).await.search.results.len(), 1);

    press(&controller, KeyCode::Esc).await;
    assert_eq!(snapshot(&controller).await.ui.active_section, ActiveSection::Search);
    press(&controller, KeyCode::Esc).await;

    let snap = snapshot(&controller).await;
    assert!(snap.ui.search_input.is_empty());
    assert!(snap.search.query.is_empty());
    assert!(snap.search.results.is_empty());
    assert!(!snap.search.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_escape_discards_pending_search_without_live_search() {
    let controller = setup_with(
        LocalCatalog::builtin().with_latency(Duration::from_millis(500)),
        ControllerSettings {
            live_search: false,
            ..ControllerSettings::default()
        },
    );
    type_text(&controller, "queen").await;
    press(&controller, KeyCode::Enter).await;
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Esc).await;
    sleep(Duration::from_millis(600)).await;

    let snap = snapshot(&controller).await;
    assert!(snap.search.results.is_empty());
    assert!(!snap.search.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_grid_and_list_navigation() {
    let controller = setup();
    controller.perform_search("a".to_string()).await;
    sleep(Duration::from_millis(600)).await;
    press(&controller, KeyCode::Tab).await;

    press(&controller, KeyCode::Down).await;
    assert_eq!(snapshot(&controller).await.ui.result_selected, 3);
    press(&controller, KeyCode::Down).await;
    assert_eq!(snapshot(&controller).await.ui.result_selected, 4);
    press(&controller, KeyCode::Up).await;
    assert_eq!(snapshot(&controller).await.ui.result_selected, 1);

    press(&controller, KeyCode::Char('v')).await;
    assert!(snapshot(&controller).await.preferences.list_view);
    press(&controller, KeyCode::Down).await;
    assert_eq!(snapshot(&controller).await.ui.result_selected, 2);
}

// ============================================================================
// Playback & lyrics
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_play_full_screen_close() {
    let controller = setup();
    controller.play_item(catalog_item(0)).await;
    controller.enter_full_screen().await;

    let playback = snapshot(&controller).await.playback;
    assert!(playback.is_playing());
    assert!(playback.is_full_screen());

    controller.toggle_playback().await;
    let playback = snapshot(&controller).await.playback;
    assert!(!playback.is_playing());
    assert!(playback.is_full_screen());

    controller.close_player().await;
    let snap = snapshot(&controller).await;
    assert!(snap.playback.is_idle());
    assert!(!snap.playback.is_playing());
    assert!(!snap.playback.is_full_screen());
    assert!(snap.lyrics.text.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_pause_and_resume() {
    let controller = setup();
    controller.pause().await;
    assert!(snapshot(&controller).await.playback.is_idle());

    controller.play_item(catalog_item(3)).await;
    controller.pause().await;
    let playback = snapshot(&controller).await.playback;
    assert!(!playback.is_playing());
    assert_eq!(playback.current(), Some(&catalog_item(3)));

    controller.pause().await;
    assert!(!snapshot(&controller).await.playback.is_playing());

    controller.resume().await;
    assert!(snapshot(&controller).await.playback.is_playing());
    controller.resume().await;
    assert!(snapshot(&controller).await.playback.is_playing());
}

#[tokio::test(start_paused = true)]
async fn test_lyrics_arrive_after_delay() {
    let controller = setup();
    controller.play_item(catalog_item(0)).await;

    let lyrics = snapshot(&controller).await.lyrics;
    assert!(lyrics.is_loading);
    assert!(lyrics.text.is_none());

    sleep(Duration::from_millis(760)).await;
    let lyrics = snapshot(&controller).await.lyrics;
    assert!(!lyrics.is_loading);
    assert_eq!(lyrics.text.as_deref(), Some(LYRICS));
}

#[tokio::test(start_paused = true)]
async fn test_switching_items_drops_old_lyrics() {
    let controller = setup();
    controller.play_item(catalog_item(0)).await;
    sleep(Duration::from_millis(800)).await;
    assert!(snapshot(&controller).await.lyrics.text.is_some());

    controller.play_item(catalog_item(1)).await;
    let lyrics = snapshot(&controller).await.lyrics;
    assert!(lyrics.text.is_none());
    assert_eq!(lyrics.media_id.as_deref(), Some(BOHEMIAN_RHAPSODY));
}

#[tokio::test(start_paused = true)]
async fn test_stale_lyrics_are_discarded() {
    let controller = setup();
    controller.play_item(catalog_item(0)).await;
    sleep(Duration::from_millis(400)).await;
    controller.play_item(catalog_item(1)).await;

    // First lookup completes at 750ms, second at 1150ms
    sleep(Duration::from_millis(400)).await;
    let lyrics = snapshot(&controller).await.lyrics;
    assert!(lyrics.text.is_none());
    assert!(lyrics.is_loading);

    sleep(Duration::from_millis(400)).await;
    let lyrics = snapshot(&controller).await.lyrics;
    assert_eq!(lyrics.text.as_deref(), Some(LYRICS));
    assert_eq!(lyrics.media_id.as_deref(), Some(BOHEMIAN_RHAPSODY));
}

#[tokio::test(start_paused = true)]
async fn test_close_before_lyrics_arrive() {
    let controller = setup();
    controller.play_item(catalog_item(0)).await;
    sleep(Duration::from_millis(100)).await;
    controller.close_player().await;
    sleep(Duration::from_secs(1)).await;

    let lyrics = snapshot(&controller).await.lyrics;
    assert!(lyrics.text.is_none());
    assert!(!lyrics.is_loading);
}

#[tokio::test(start_paused = true)]
async fn test_missing_lyrics_set_status() {
    let model = AppModel::new(Arc::new(LocalCatalog::builtin()), Preferences::default());
    let controller = AppController::new(
        Arc::new(Mutex::new(model)),
        Arc::new(StaticLyrics::new("   ", Duration::from_millis(10))),
        ControllerSettings::default(),
    );
    controller.play_item(catalog_item(0)).await;
    sleep(Duration::from_millis(20)).await;

    let lyrics = snapshot(&controller).await.lyrics;
    assert!(lyrics.text.is_none());
    assert!(!lyrics.is_loading);
    assert!(lyrics.status.is_some());
    // Lyrics failures never raise a banner
    assert!(snapshot(&controller).await.ui.banner.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_full_screen_keys() {
    let controller = setup();
    controller.play_item(catalog_item(2)).await;
    press(&controller, KeyCode::Tab).await;

    press(&controller, KeyCode::Char('f')).await;
    assert!(snapshot(&controller).await.playback.is_full_screen());

    press(&controller, KeyCode::Char('l')).await;
    assert!(snapshot(&controller).await.ui.show_lyrics);

    press(&controller, KeyCode::Char(' ')).await;
    assert!(!snapshot(&controller).await.playback.is_playing());

    press(&controller, KeyCode::Esc).await;
    let playback = snapshot(&controller).await.playback;
    assert!(!playback.is_full_screen());
    assert!(!playback.is_idle());
}

// ============================================================================
// Playlists
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_add_to_playlist_grows_only_target() {
    let controller = setup();
    let before = snapshot(&controller).await.playlists;

    let count = controller.add_to_playlist(&catalog_item(4), "p2").await.unwrap();
    assert_eq!(count, 3);

    let after = snapshot(&controller).await.playlists;
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1].items.len(), before[1].items.len() + 1);
    assert_eq!(after[1].items.last(), Some(&catalog_item(4)));

    let banner = snapshot(&controller).await.ui.banner.expect("info banner");
    assert_eq!(banner.level, BannerLevel::Info);
    assert!(banner.message.contains("80s Hits"));
}

#[tokio::test(start_paused = true)]
async fn test_add_to_unknown_playlist_fails() {
    let controller = setup();
    let result = controller.add_to_playlist(&catalog_item(0), "p99").await;
    assert_eq!(result, Err(StoreError::PlaylistNotFound("p99".to_string())));

    let snap = snapshot(&controller).await;
    assert_eq!(snap.playlists[0].items.len(), 2);
    assert_eq!(snap.ui.banner.map(|b| b.level), Some(BannerLevel::Error));
}

#[tokio::test(start_paused = true)]
async fn test_select_playlist_requires_current_item() {
    let controller = setup();
    assert_eq!(
        controller.select_playlist_for_current("p1").await,
        Err(StoreError::NothingPlaying)
    );

    controller.play_item(catalog_item(3)).await;
    assert_eq!(controller.select_playlist_for_current("p1").await, Ok(3));
}

#[tokio::test(start_paused = true)]
async fn test_picker_adds_selected_result() {
    let controller = setup();
    type_text(&controller, "queen").await;
    sleep(Duration::from_millis(600)).await;
    press(&controller, KeyCode::Tab).await;

    press(&controller, KeyCode::Char('a')).await;
    assert!(matches!(
        snapshot(&controller).await.ui.overlay,
        Some(Overlay::PlaylistPicker { .. })
    ));

    press(&controller, KeyCode::Down).await;
    press(&controller, KeyCode::Enter).await;

    let snap = snapshot(&controller).await;
    assert!(snap.ui.overlay.is_none());
    assert_eq!(snap.playlists[0].items.len(), 2);
    assert_eq!(ids(&snap.playlists[1].items).last(), Some(&BOHEMIAN_RHAPSODY));
}

#[tokio::test(start_paused = true)]
async fn test_banner_blocks_keys_until_dismissed() {
    let controller = setup();
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Char('p')).await;
    assert!(snapshot(&controller).await.ui.banner.is_some());

    // Swallowed while the banner is up
    press(&controller, KeyCode::Char('s')).await;
    assert!(snapshot(&controller).await.ui.overlay.is_none());

    press(&controller, KeyCode::Esc).await;
    assert!(snapshot(&controller).await.ui.banner.is_none());
    press(&controller, KeyCode::Char('s')).await;
    assert_eq!(snapshot(&controller).await.ui.overlay, Some(Overlay::Settings));
}

#[tokio::test(start_paused = true)]
async fn test_new_playlist_from_picker() {
    let controller = setup();
    controller.play_item(catalog_item(1)).await;
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Char('p')).await;

    // Two seeded playlists, then the "new playlist" row
    press(&controller, KeyCode::Down).await;
    press(&controller, KeyCode::Down).await;
    press(&controller, KeyCode::Enter).await;
    assert!(matches!(
        snapshot(&controller).await.ui.overlay,
        Some(Overlay::NewPlaylist { .. })
    ));

    type_text(&controller, "Road Trip").await;
    press(&controller, KeyCode::Enter).await;

    let snap = snapshot(&controller).await;
    assert!(snap.ui.overlay.is_none());
    assert_eq!(snap.playlists.len(), 3);
    let created = &snap.playlists[2];
    assert_eq!(created.id, "p3");
    assert_eq!(created.name, "Road Trip");
    assert_eq!(ids(&created.items), vec![BOHEMIAN_RHAPSODY]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_add_keeps_picker_open() {
    let controller = setup();
    controller.play_item(catalog_item(1)).await;
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Char('p')).await;
    controller.close_player().await;

    press(&controller, KeyCode::Enter).await;

    let snap = snapshot(&controller).await;
    assert!(matches!(snap.ui.overlay, Some(Overlay::PlaylistPicker { .. })));
    assert_eq!(snap.ui.banner.map(|b| b.level), Some(BannerLevel::Error));
    assert_eq!(snap.playlists[0].items.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_new_playlist_with_failed_add_returns_to_picker() {
    let controller = setup();
    controller.play_item(catalog_item(1)).await;
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Char('p')).await;
    press(&controller, KeyCode::Char('n')).await;
    type_text(&controller, "Later").await;
    controller.close_player().await;

    press(&controller, KeyCode::Enter).await;

    let snap = snapshot(&controller).await;
    assert!(matches!(snap.ui.overlay, Some(Overlay::PlaylistPicker { .. })));
    assert_eq!(snap.playlists.len(), 3);
    assert!(snap.playlists[2].is_empty());
    assert_eq!(snap.ui.banner.map(|b| b.level), Some(BannerLevel::Error));
}

#[tokio::test(start_paused = true)]
async fn test_blank_playlist_name_keeps_prompt_open() {
    let controller = setup();
    controller.play_item(catalog_item(1)).await;
    press(&controller, KeyCode::Tab).await;
    press(&controller, KeyCode::Char('p')).await;
    press(&controller, KeyCode::Char('n')).await;
    type_text(&controller, "  ").await;
    press(&controller, KeyCode::Enter).await;

    let snap = snapshot(&controller).await;
    assert_eq!(snap.playlists.len(), 2);
    assert!(matches!(snap.ui.overlay, Some(Overlay::NewPlaylist { .. })));
    assert_eq!(snap.ui.banner.map(|b| b.level), Some(BannerLevel::Error));
}

// ============================================================================
// Settings & reset
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_reset_requires_confirmation() {
    let controller = setup();
    controller.perform_search("queen".to_string()).await;
    sleep(Duration::from_millis(600)).await;
    controller.play_item(catalog_item(0)).await;
    press(&controller, KeyCode::Tab).await;

    press(&controller, KeyCode::Char('s')).await;
    press(&controller, KeyCode::Char('d')).await;
    press(&controller, KeyCode::Char('r')).await;
    assert_eq!(snapshot(&controller).await.ui.overlay, Some(Overlay::ConfirmReset));

    press(&controller, KeyCode::Char('n')).await;
    let snap = snapshot(&controller).await;
    assert_eq!(snap.ui.overlay, Some(Overlay::Settings));
    assert_eq!(snap.playlists.len(), 2);
    assert!(!snap.playback.is_idle());

    press(&controller, KeyCode::Char('r')).await;
    press(&controller, KeyCode::Char('y')).await;

    let snap = snapshot(&controller).await;
    assert!(snap.playlists.is_empty());
    assert!(snap.playback.is_idle());
    assert!(snap.search.results.is_empty());
    assert!(snap.search.query.is_empty());
    assert!(snap.lyrics.text.is_none());
    assert!(snap.ui.overlay.is_none());
    assert!(snap.preferences.dark_mode);
    let banner = snap.ui.banner.expect("reset banner");
    assert_eq!(banner.message, "All data has been reset.");
}

#[tokio::test(start_paused = true)]
async fn test_reset_discards_in_flight_requests() {
    let controller = setup();
    controller.perform_search("queen".to_string()).await;
    controller.play_item(catalog_item(0)).await;
    controller.confirm_reset().await;
    sleep(Duration::from_secs(1)).await;

    let snap = snapshot(&controller).await;
    assert!(snap.search.results.is_empty());
    assert!(!snap.search.is_loading);
    assert!(snap.lyrics.text.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_quit_keys() {
    let controller = setup();
    controller
        .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
        .await
        .unwrap();
    assert!(controller.model().lock().await.should_quit().await);
}
