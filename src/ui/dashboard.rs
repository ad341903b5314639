//! The file-browser screen
//!
//! Header: breadcrumb for the current path, search box, view-mode tag.
//! Body: the listing in grid or list layout, or the loading/empty state.
//! Footer: item count and hotkey hints.

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use filetui::api::FileEntry;
use filetui::logic::formatting::{format_bytes, format_relative_time};
use filetui::prefs::StyleTokens;
use filetui::ViewMode;

use super::{icons, palette::Palette};
use crate::App;

pub fn render_dashboard(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Listing
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(f, rows[0], app, palette, tokens);

    let visible = app.browser.visible_entries();
    if app.browser.is_loading() {
        render_centered_notice(f, rows[1], "Loading...", palette);
    } else if app.browser.shows_empty_placeholder() {
        let notice = if app.browser.search_query.is_empty() {
            "This folder is empty"
        } else {
            "No entries match the search"
        };
        render_centered_notice(f, rows[1], notice, palette);
    } else {
        match app.browser.view_mode {
            ViewMode::List => render_list(f, rows[1], app, &visible, palette, tokens),
            ViewMode::Grid => render_grid(f, rows[1], app, &visible, palette, tokens),
        }
    }

    render_footer(f, rows[2], app, visible.len(), palette);
}

fn render_header(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Breadcrumb
            Constraint::Length(30), // Search
            Constraint::Length(8),  // View mode
        ])
        .split(area);

    let mut crumbs = vec![Span::styled(
        "Home",
        Style::default()
            .fg(tokens.emphasis_text)
            .add_modifier(Modifier::BOLD),
    )];
    for segment in app.browser.path().segments() {
        crumbs.push(Span::styled(" / ", Style::default().fg(palette.muted)));
        crumbs.push(Span::raw(segment.clone()));
    }
    f.render_widget(
        Paragraph::new(Line::from(crumbs)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        ),
        cols[0],
    );

    let search_border = if app.search_focused {
        tokens.focus_ring
    } else {
        palette.border
    };
    let query = if app.browser.search_query.is_empty() && !app.search_focused {
        Span::styled("/ to search", Style::default().fg(palette.muted))
    } else {
        Span::raw(app.browser.search_query.clone())
    };
    f.render_widget(
        Paragraph::new(query).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(search_border))
                .title("Search"),
        ),
        cols[1],
    );

    f.render_widget(
        Paragraph::new(app.browser.view_mode.as_str())
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            ),
        cols[2],
    );
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    app: &App,
    visible: &[FileEntry],
    palette: &Palette,
    tokens: &StyleTokens,
) {
    let now = Utc::now();
    let name_width = area.width.saturating_sub(34) as usize;

    let items: Vec<ListItem> = visible
        .iter()
        .map(|entry| {
            let (icon, icon_color) = icons::icon_for(entry);
            let name = truncated(&entry.name, name_width);
            let size = if entry.is_dir {
                String::new()
            } else {
                format_bytes(entry.size)
            };
            let age = format_relative_time(&entry.mod_time, now).unwrap_or_default();

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(icon_color)),
                Span::raw(format!("{:<width$}", name, width = name_width.max(1))),
                Span::styled(format!("{:>10}  ", size), Style::default().fg(palette.muted)),
                Span::styled(format!("{:>12}", age), Style::default().fg(palette.muted)),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(app.browser.selected);

    f.render_stateful_widget(
        List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
            .highlight_style(
                Style::default()
                    .bg(tokens.primary_surface)
                    .add_modifier(Modifier::BOLD),
            ),
        area,
        &mut state,
    );
}

/// Grid layout: fixed-width tiles, several per row. Selection highlighting
/// is by tile rather than by row.
fn render_grid(
    f: &mut Frame,
    area: Rect,
    app: &App,
    visible: &[FileEntry],
    palette: &Palette,
    tokens: &StyleTokens,
) {
    const TILE_WIDTH: u16 = 20;
    const TILE_HEIGHT: u16 = 3;

    let inner = area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
        area,
    );

    let columns = (inner.width / TILE_WIDTH).max(1) as usize;
    let rows_visible = (inner.height / TILE_HEIGHT) as usize;
    if rows_visible == 0 {
        return;
    }

    // Keep the selected tile on screen
    let selected = app.browser.selected.unwrap_or(0);
    let first_row = (selected / columns).saturating_sub(rows_visible.saturating_sub(1));
    let offset = first_row * columns;

    for (i, entry) in visible.iter().enumerate().skip(offset) {
        let slot = i - offset;
        let row = slot / columns;
        if row >= rows_visible {
            break;
        }
        let col = slot % columns;

        let tile = Rect {
            x: inner.x + col as u16 * TILE_WIDTH,
            y: inner.y + row as u16 * TILE_HEIGHT,
            width: TILE_WIDTH.min(inner.width.saturating_sub(col as u16 * TILE_WIDTH)),
            height: TILE_HEIGHT,
        };

        let is_selected = app.browser.selected == Some(i);
        let (icon, icon_color) = icons::icon_for(entry);
        let border = if is_selected { tokens.focus_ring } else { palette.border };
        let label_style = if is_selected {
            Style::default()
                .fg(tokens.emphasis_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(icon_color)),
                Span::styled(truncated(&entry.name, TILE_WIDTH as usize - 5), label_style),
            ]))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            ),
            tile,
        );
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, visible_count: usize, palette: &Palette) {
    let status = if app.browser.is_loading() { "Loading" } else { "Ready" };
    let left = format!(" {} items   {}", visible_count, status);
    let hints = "Enter: open  Backspace: up  v: view  /: search  o: download  s: settings  q: quit ";

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(hints.width() as u16)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(left, Style::default().fg(palette.muted))),
        cols[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(palette.muted))),
        cols[1],
    );
}

fn render_centered_notice(f: &mut Frame, area: Rect, notice: &str, palette: &Palette) {
    f.render_widget(
        Paragraph::new(Span::styled(notice, Style::default().fg(palette.muted)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            ),
        area,
    );
}

fn truncated(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    let mut out = String::new();
    for c in name.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push('\u{2026}');
    out
}
