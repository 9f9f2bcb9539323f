//! Layout rendering (top bar, key hints)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, AppSnapshot};
use super::theme::Palette;

pub fn render_top_bar(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(24), // Layout and mode
        ])
        .split(area);

    let focused = snapshot.ui.active_section == ActiveSection::Search;

    let search_line = if snapshot.ui.search_input.is_empty() {
        Line::from(Span::styled(
            "Search for songs, artists...",
            Style::default().fg(palette.muted),
        ))
    } else if focused {
        Line::from(vec![
            Span::raw(snapshot.ui.search_input.clone()),
            Span::styled("▏", Style::default().fg(palette.accent)),
        ])
    } else {
        Line::from(snapshot.ui.search_input.clone())
    };

    let title = if snapshot.search.is_loading {
        " Search ⟳ "
    } else {
        " Search "
    };

    let search = Paragraph::new(search_line).style(palette.base()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1))
            .border_style(palette.border(focused)),
    );
    frame.render_widget(search, chunks[0]);

    let view_mode = if snapshot.preferences.list_view { "List" } else { "Grid" };
    let theme = if snapshot.preferences.dark_mode { "Dark" } else { "Light" };
    let status = Paragraph::new(format!("{} · {}", view_mode, theme))
        .style(Style::default().fg(palette.highlight).bg(palette.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" View ")
                .border_style(palette.border(false)),
        );
    frame.render_widget(status, chunks[1]);
}

pub fn render_key_hints(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, palette: &Palette) {
    let hints = match snapshot.ui.active_section {
        ActiveSection::Search => "Type to search · Enter results · Tab focus results · Esc clear · Ctrl+Q quit",
        ActiveSection::Results => {
            "↑↓←→ move · Enter play · A add to playlist · V grid/list · S settings · H help · Q quit"
        }
    };
    let line = Paragraph::new(hints).style(Style::default().fg(palette.muted).bg(palette.background));
    frame.render_widget(line, area);
}
