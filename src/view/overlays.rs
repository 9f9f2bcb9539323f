//! Overlay rendering (banner, help, settings, reset confirmation, playlist picker)

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{Banner, BannerLevel, Playlist, PlaylistTarget};
use super::theme::Palette;
use super::utils::{centered_rect, render_scrollable_list, truncate_string};

fn popup_block<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.highlight))
        .title(title)
        .title_style(palette.title())
        .padding(Padding::horizontal(1))
        .style(palette.base())
}

pub fn render_banner(frame: &mut Frame, banner: &Banner, palette: &Palette) {
    let area = frame.area();

    let popup_width = 52u16.min(area.width.saturating_sub(4));
    let inner_width = popup_width.saturating_sub(4).max(1) as usize;

    // Wrapped line count of the message
    let line_count = banner.message.chars().count().div_ceil(inner_width) as u16;
    let popup_height = (2 + line_count.max(1)).min(area.height.saturating_sub(4).max(3));
    let popup_area = centered_rect(area, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let (color, title) = match banner.level {
        BannerLevel::Error => (palette.error, " Error (Esc to dismiss) "),
        BannerLevel::Info => (palette.info, " Done (Esc to dismiss) "),
    };

    let widget = Paragraph::new(banner.message.clone())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(title)
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .padding(Padding::horizontal(1))
                .style(Style::default().bg(palette.background)),
        );

    frame.render_widget(widget, popup_area);
}

pub fn render_playlist_picker(
    frame: &mut Frame,
    playlists: &[Playlist],
    selected: usize,
    target: &PlaylistTarget,
    palette: &Palette,
) {
    let area = frame.area();
    let popup_width = 50;
    let popup_height = (playlists.len() as u16 + 5).clamp(7, area.height.saturating_sub(4).max(7));
    let popup_area = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup_area);

    let name_width = popup_width.saturating_sub(18) as usize;
    let row_style = |i: usize| {
        if i == selected {
            palette.selected()
        } else {
            Style::default().fg(palette.text)
        }
    };

    let mut items: Vec<ListItem> = if playlists.is_empty() {
        vec![ListItem::new(Span::styled("No playlists yet.", Style::default().fg(palette.muted)))]
    } else {
        playlists
            .iter()
            .enumerate()
            .map(|(i, playlist)| {
                ListItem::new(format!(
                    "{} ({} tracks)",
                    truncate_string(&playlist.name, name_width),
                    playlist.len()
                ))
                .style(row_style(i))
            })
            .collect()
    };
    items.push(ListItem::new("+ New Playlist").style(row_style(playlists.len())));

    let title = match target {
        PlaylistTarget::Current => " Add current song (↑↓ Enter Esc) ",
        PlaylistTarget::Item(_) => " Add to playlist (↑↓ Enter Esc) ",
    };
    // The placeholder row shifts the list by one when there are no playlists
    let list_index = if playlists.is_empty() { selected + 1 } else { selected };
    render_scrollable_list(frame, popup_area, items, list_index, popup_block(title, palette));
}

pub fn render_new_playlist_prompt(frame: &mut Frame, name: &str, palette: &Palette) {
    let popup_area = centered_rect(frame.area(), 46, 5);
    frame.render_widget(Clear, popup_area);

    let line = Line::from(vec![
        Span::styled("Name: ", Style::default().fg(palette.muted)),
        Span::raw(name.to_string()),
        Span::styled("▏", Style::default().fg(palette.accent)),
    ]);
    let prompt = Paragraph::new(vec![line, Line::from("")])
        .block(popup_block(" New Playlist (Enter create, Esc cancel) ", palette));
    frame.render_widget(prompt, popup_area);
}

pub fn render_settings(frame: &mut Frame, dark_mode: bool, list_view: bool, palette: &Palette) {
    let popup_area = centered_rect(frame.area(), 56, 12);
    frame.render_widget(Clear, popup_area);

    let key = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(palette.muted);
    let on_off = |on: bool| if on { "On" } else { "Off" };

    let lines = vec![
        Line::from(Span::styled("Customize the app to your preferences.", muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  D  ", key),
            Span::raw(format!("Dark mode: {}", on_off(dark_mode))),
        ]),
        Line::from(vec![
            Span::styled("  V  ", key),
            Span::raw(format!("Layout: {}", if list_view { "List" } else { "Grid" })),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  R  ", Style::default().fg(palette.error).add_modifier(Modifier::BOLD)),
            Span::raw("Reset data"),
        ]),
        Line::from(Span::styled(
            "     Clears playlists, playback and search. Cannot be undone.",
            muted,
        )),
    ];

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(popup_block(" Settings (S or Esc to close) ", palette));
    frame.render_widget(panel, popup_area);
}

pub fn render_confirm_reset(frame: &mut Frame, palette: &Palette) {
    let popup_area = centered_rect(frame.area(), 48, 6);
    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Clear all playlists, playback and search?"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Y", Style::default().fg(palette.error).add_modifier(Modifier::BOLD)),
            Span::raw(" reset   "),
            Span::styled("N", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]),
    ];

    let dialog = Paragraph::new(lines).block(
        popup_block(" Reset data ", palette).border_style(Style::default().fg(palette.error)),
    );
    frame.render_widget(dialog, popup_area);
}

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let keybindings = [
        ("", "── Search ──"),
        ("Type", "Search as you type"),
        ("Enter", "Search and focus results"),
        ("Esc", "Clear search"),
        ("Tab", "Switch search / results"),
        ("", ""),
        ("", "── Results ──"),
        ("↑ ↓ ← →", "Move selection"),
        ("Enter", "Play selected"),
        ("A", "Add selected to playlist"),
        ("V", "Toggle grid / list"),
        ("", ""),
        ("", "── Player ──"),
        ("Space", "Play / Pause"),
        ("F", "Toggle full screen"),
        ("L", "Toggle lyrics"),
        ("P", "Add current song to playlist"),
        ("X", "Close player"),
        ("", ""),
        ("", "── General ──"),
        ("D", "Toggle dark mode"),
        ("S", "Settings"),
        ("H / ?", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let area = frame.area();
    let popup_area = centered_rect(area, 56, keybindings.len() as u16 + 2);
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^50}", desc),
                    Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help = Paragraph::new(lines).block(popup_block(" Help (H or Esc to close) ", palette));
    frame.render_widget(help, popup_area);
}
