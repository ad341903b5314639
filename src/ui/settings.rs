//! The appearance/sign-out popup
//!
//! Overlays the dashboard. Theme and accent changes apply and persist
//! immediately; sign-out goes through the app's logout transition.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use filetui::prefs::StyleTokens;

use super::palette::Palette;
use crate::App;

pub fn render_settings(f: &mut Frame, area: Rect, app: &App, palette: &Palette, tokens: &StyleTokens) {
    let width = 44u16.min(area.width);
    let height = 8u16.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled("t", Style::default().fg(tokens.emphasis_text).add_modifier(Modifier::BOLD)),
            Span::raw(format!("  Theme: {}", app.prefs.theme().as_str())),
        ]),
        Line::from(vec![
            Span::styled("a", Style::default().fg(tokens.emphasis_text).add_modifier(Modifier::BOLD)),
            Span::raw(format!("  Accent: {}", app.prefs.accent().as_str())),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("x", Style::default().fg(ratatui::style::Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("  Sign out"),
        ]),
        Line::default(),
        Line::from(Span::styled("Esc: close", Style::default().fg(palette.muted))),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().bg(palette.surface).fg(palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(tokens.emphasis_border))
                    .title(Span::styled(
                        " Settings ",
                        Style::default()
                            .fg(tokens.emphasis_text)
                            .add_modifier(Modifier::BOLD),
                    )),
            ),
        popup,
    );
}
