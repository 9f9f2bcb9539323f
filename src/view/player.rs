//! Mini-player bar and full-screen player

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{AppSnapshot, LyricsState, MediaItem};
use super::theme::Palette;
use super::utils::truncate_string;

fn play_state_label(is_playing: bool) -> &'static str {
    if is_playing { "▶ Playing" } else { "⏸ Paused" }
}

pub fn render_mini_player(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, palette: &Palette) {
    let Some(item) = snapshot.playback.current() else {
        return;
    };
    let is_playing = snapshot.playback.is_playing();
    let title_width = area.width.saturating_sub(20) as usize;

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{}  ", play_state_label(is_playing)),
                Style::default().fg(palette.accent),
            ),
            Span::styled(
                truncate_string(&item.title, title_width),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} - {}", item.artist, item.duration),
            Style::default().fg(palette.muted),
        )),
    ];

    let bar = Paragraph::new(lines).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .title_bottom(Line::from(" Space play/pause · F full screen · P add to playlist · X close ").right_aligned())
            .padding(Padding::horizontal(1))
            .border_style(Style::default().fg(palette.accent)),
    );
    frame.render_widget(bar, area);
}

pub fn render_full_screen(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, palette: &Palette) {
    let Some(item) = snapshot.playback.current() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Player (Esc to exit) ")
        .title_style(palette.title())
        .title_bottom(
            Line::from(" Space play/pause · L lyrics · P add to playlist · X close ").right_aligned(),
        )
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let show_lyrics = snapshot.ui.show_lyrics;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_lyrics {
            vec![Constraint::Min(8), Constraint::Percentage(45)]
        } else {
            vec![Constraint::Min(8), Constraint::Length(0)]
        })
        .split(inner);

    render_video_frame(frame, chunks[0], item, snapshot.playback.is_playing(), palette);

    if show_lyrics {
        render_lyrics(frame, chunks[1], &snapshot.lyrics, palette);
    }
}

/// Stand-in for the embedded player: what it would load and where
fn render_video_frame(frame: &mut Frame, area: Rect, item: &MediaItem, is_playing: bool, palette: &Palette) {
    let label = Style::default().fg(palette.muted);
    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.artist.clone(), Style::default().fg(palette.highlight))),
        Line::from(""),
        Line::from(vec![
            Span::styled(play_state_label(is_playing), Style::default().fg(palette.accent)),
            Span::styled(format!("   {}", item.duration), label),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Embed:   ", label), Span::raw(item.embed_url())]),
        Line::from(vec![Span::styled("Browser: ", label), Span::raw(item.url.clone())]),
    ];

    let video = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(palette.base())
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
    frame.render_widget(video, area);
}

fn render_lyrics(frame: &mut Frame, area: Rect, lyrics: &LyricsState, palette: &Palette) {
    let (text, style) = match (&lyrics.text, &lyrics.status) {
        (Some(text), _) => (text.trim().to_string(), Style::default().fg(palette.text)),
        (None, Some(status)) => (status.clone(), Style::default().fg(palette.error)),
        (None, None) if lyrics.is_loading => ("Loading lyrics...".to_string(), Style::default().fg(palette.muted)),
        (None, None) => ("No lyrics".to_string(), Style::default().fg(palette.muted)),
    };

    let panel = Paragraph::new(text)
        .style(style.bg(palette.background))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .title(" Lyrics ")
                .title_style(palette.title())
                .padding(Padding::horizontal(2))
                .border_style(Style::default().fg(palette.muted)),
        );
    frame.render_widget(panel, area);
}
