//! Main content area rendering (search results in grid or list layout)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{ActiveSection, AppSnapshot, MediaItem, GRID_COLUMNS};
use super::theme::Palette;
use super::utils::{first_visible_row, render_scrollable_list, truncate_string};

const CARD_HEIGHT: u16 = 6;
const SKELETON_CARDS: usize = 6;

pub fn render_main_content(frame: &mut Frame, area: Rect, snapshot: &AppSnapshot, palette: &Palette) {
    let is_focused = snapshot.ui.active_section == ActiveSection::Results;
    let search = &snapshot.search;

    if search.is_loading {
        render_skeleton(frame, area, palette);
        return;
    }

    if search.results.is_empty() {
        let message = if search.is_empty_result() {
            format!("No results found for \"{}\".", search.query)
        } else {
            "Type in the search box to find music\n\nTab switches between search and results\nEnter plays the selected song".to_string()
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(palette.muted).bg(palette.background))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Results ")
                    .padding(Padding::horizontal(1))
                    .border_style(palette.border(is_focused)),
            );
        frame.render_widget(content, area);
        return;
    }

    let current_id = snapshot.playback.current().map(|item| item.id.as_str());
    let selected = snapshot.ui.result_selected.min(search.results.len() - 1);

    if snapshot.preferences.list_view {
        render_result_list(frame, area, &search.results, selected, is_focused, current_id, palette);
    } else {
        render_result_grid(frame, area, &search.results, selected, is_focused, current_id, palette);
    }
}

fn render_result_list(
    frame: &mut Frame,
    area: Rect,
    results: &[MediaItem],
    selected: usize,
    is_focused: bool,
    current_id: Option<&str>,
    palette: &Palette,
) {
    let title_width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_current = current_id == Some(item.id.as_str());
            let marker = if is_current { "▶ " } else { "  " };
            let title_style = if i == selected && is_focused {
                palette.selected()
            } else if is_current {
                Style::default().fg(palette.highlight)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{}{}", marker, truncate_string(&item.title, title_width)),
                    title_style,
                )),
                Line::from(Span::styled(
                    format!("  {} - {}", item.artist, item.duration),
                    Style::default().fg(palette.muted),
                )),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", results.len()))
        .padding(Padding::horizontal(1))
        .border_style(palette.border(is_focused))
        .style(palette.base());

    render_scrollable_list(frame, area, items, selected, block);
}

fn render_result_grid(
    frame: &mut Frame,
    area: Rect,
    results: &[MediaItem],
    selected: usize,
    is_focused: bool,
    current_id: Option<&str>,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Results ({}) ", results.len()))
        .border_style(palette.border(is_focused))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first_row = first_visible_row(selected / GRID_COLUMNS, visible_rows);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(inner);

    for (row_offset, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (column, card_area) in columns.iter().enumerate() {
            let index = (first_row + row_offset) * GRID_COLUMNS + column;
            let Some(item) = results.get(index) else {
                return;
            };
            let is_selected = index == selected && is_focused;
            let is_current = current_id == Some(item.id.as_str());
            render_card(frame, *card_area, item, is_selected, is_current, palette);
        }
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    item: &MediaItem,
    is_selected: bool,
    is_current: bool,
    palette: &Palette,
) {
    let border_style = if is_selected {
        palette.selected()
    } else if is_current {
        Style::default().fg(palette.highlight)
    } else {
        Style::default().fg(palette.muted)
    };
    let title = if is_current { " ▶ Now playing " } else { "" };

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} - {}", item.artist, item.duration),
            Style::default().fg(palette.muted),
        )),
    ];

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1))
                .border_style(border_style),
        );
    frame.render_widget(card, area);
}

/// Placeholder cards shown while a search is in flight
fn render_skeleton(frame: &mut Frame, area: Rect, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Searching... ")
        .border_style(palette.border(false))
        .style(palette.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_count = SKELETON_CARDS.div_ceil(GRID_COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); row_count])
        .split(inner);

    let placeholder = Style::default().fg(palette.muted);
    for row_area in rows.iter() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);
        for card_area in columns.iter() {
            let width = card_area.width.saturating_sub(4) as usize;
            let lines = vec![
                Line::from(Span::styled("░".repeat(width * 3 / 4), placeholder)),
                Line::from(Span::styled("░".repeat(width / 2), placeholder)),
            ];
            let card = Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .border_style(placeholder),
            );
            frame.render_widget(card, *card_area);
        }
    }
}
